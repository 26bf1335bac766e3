//! Operation surface - the named queries and mutations the API accepts
//!
//! Each operation carries its own argument struct. Requests are JSON objects
//! tagged by `operation`, e.g.
//! `{"operation": "addAuthor", "name": "Ana", "mail": "a@x.com"}`.

use serde::{Deserialize, Serialize};
use crate::Result;
use crate::query::{AuthorView, IngredientView, RecipeView, Resolver};
use crate::store::Catalog;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NameArgs {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AddRecipeArgs {
    pub title: String,
    pub description: String,
    /// Mail of an existing author
    pub mail: String,
    /// Ingredient ids
    pub ingredients: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AddAuthorArgs {
    pub name: String,
    pub mail: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DeleteRecipeArgs {
    #[serde(alias = "name")]
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAuthorArgs {
    pub name: String,
    #[serde(default, alias = "n_name")]
    pub new_name: Option<String>,
    #[serde(default, alias = "n_mail")]
    pub new_mail: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateIngredientArgs {
    pub name: String,
    #[serde(alias = "n_name")]
    pub new_name: String,
}

/// A query or mutation against the catalog
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "operation", rename_all = "camelCase")]
pub enum Operation {
    Recipes,
    Authors,
    Ingredients,
    AuthorRecipes(NameArgs),
    IngredientRecipes(NameArgs),
    AddRecipe(AddRecipeArgs),
    AddAuthor(AddAuthorArgs),
    AddIngredient(NameArgs),
    DeleteRecipe(DeleteRecipeArgs),
    DeleteAuthor(NameArgs),
    DeleteIngredient(NameArgs),
    UpdateAuthor(UpdateAuthorArgs),
    UpdateIngredient(UpdateIngredientArgs),
}

/// Result data of an operation
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Outcome {
    Recipe(RecipeView),
    Author(AuthorView),
    Ingredient(IngredientView),
    Recipes(Vec<RecipeView>),
    Authors(Vec<AuthorView>),
    Ingredients(Vec<IngredientView>),
    /// `"Deleted"` or `"Updated"`
    Confirmation(&'static str),
}

impl Operation {
    /// Operation name as it appears on the wire
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Recipes => "recipes",
            Operation::Authors => "authors",
            Operation::Ingredients => "ingredients",
            Operation::AuthorRecipes(_) => "authorRecipes",
            Operation::IngredientRecipes(_) => "ingredientRecipes",
            Operation::AddRecipe(_) => "addRecipe",
            Operation::AddAuthor(_) => "addAuthor",
            Operation::AddIngredient(_) => "addIngredient",
            Operation::DeleteRecipe(_) => "deleteRecipe",
            Operation::DeleteAuthor(_) => "deleteAuthor",
            Operation::DeleteIngredient(_) => "deleteIngredient",
            Operation::UpdateAuthor(_) => "updateAuthor",
            Operation::UpdateIngredient(_) => "updateIngredient",
        }
    }

    pub fn is_mutation(&self) -> bool {
        !matches!(
            self,
            Operation::Recipes
                | Operation::Authors
                | Operation::Ingredients
                | Operation::AuthorRecipes(_)
                | Operation::IngredientRecipes(_)
        )
    }

    /// Run the operation. A failed operation leaves the catalog untouched.
    pub fn execute(self, catalog: &mut Catalog) -> Result<Outcome> {
        let outcome = match self {
            Operation::Recipes => Outcome::Recipes(Resolver::new(catalog).all_recipes()),
            Operation::Authors => Outcome::Authors(Resolver::new(catalog).all_authors()),
            Operation::Ingredients => Outcome::Ingredients(Resolver::new(catalog).all_ingredients()),
            Operation::AuthorRecipes(args) => {
                let resolver = Resolver::new(catalog);
                let recipes = resolver.recipes_by_author_name(&args.name)?;
                Outcome::Recipes(resolver.recipe_views(recipes))
            }
            Operation::IngredientRecipes(args) => {
                let resolver = Resolver::new(catalog);
                let recipes = resolver.recipes_by_ingredient_name(&args.name)?;
                Outcome::Recipes(resolver.recipe_views(recipes))
            }
            Operation::AddRecipe(args) => {
                let recipe =
                    catalog.add_recipe(&args.title, &args.description, &args.mail, args.ingredients)?;
                Outcome::Recipe(Resolver::new(catalog).recipe_view(&recipe))
            }
            Operation::AddAuthor(args) => {
                let author = catalog.add_author(&args.name, &args.mail)?;
                Outcome::Author(Resolver::new(catalog).author_view(&author))
            }
            Operation::AddIngredient(args) => {
                let ingredient = catalog.add_ingredient(&args.name)?;
                Outcome::Ingredient(Resolver::new(catalog).ingredient_view(&ingredient))
            }
            Operation::DeleteRecipe(args) => Outcome::Confirmation(catalog.delete_recipe(&args.title)?),
            Operation::DeleteAuthor(args) => Outcome::Confirmation(catalog.delete_author(&args.name)?),
            Operation::DeleteIngredient(args) => {
                Outcome::Confirmation(catalog.delete_ingredient(&args.name)?)
            }
            Operation::UpdateAuthor(args) => Outcome::Confirmation(catalog.update_author(
                &args.name,
                args.new_name.as_deref(),
                args.new_mail.as_deref(),
            )?),
            Operation::UpdateIngredient(args) => {
                Outcome::Confirmation(catalog.update_ingredient(&args.name, &args.new_name)?)
            }
        };
        Ok(outcome)
    }
}
