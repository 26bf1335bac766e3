//! Relationship resolver
//!
//! Follows the id references between records:
//! - Recipe -> Author (by author id, absent if dangling)
//! - Recipe -> Ingredients (every ingredient whose id is listed)
//! - Author / Ingredient -> Recipes (reverse lookup)
//!
//! Views render a record with its relations resolved one level deep.

use serde::Serialize;
use crate::{Error, Result};
use crate::model::{Author, EntityKind, Ingredient, Recipe};
use crate::store::Catalog;

/// A recipe with its author and ingredients resolved
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecipeView {
    pub id: String,
    pub title: String,
    pub description: String,
    pub date: String,
    pub author: Option<Author>,
    pub ingredients: Vec<Ingredient>,
}

/// An author with the recipes attributed to it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuthorView {
    pub id: String,
    pub name: String,
    pub mail: String,
    pub recipes: Vec<Recipe>,
}

/// An ingredient with the recipes that use it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IngredientView {
    pub id: String,
    pub name: String,
    pub recipes: Vec<Recipe>,
}

/// Read-only resolver borrowing a catalog
pub struct Resolver<'a> {
    catalog: &'a Catalog,
}

impl<'a> Resolver<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    // ========== Field resolution ==========

    /// The author a recipe points at, if it still exists
    pub fn recipe_author(&self, recipe: &Recipe) -> Option<&'a Author> {
        self.catalog.find_author(&recipe.author)
    }

    /// Ingredients listed by a recipe, in catalog order. Dangling ids are skipped.
    pub fn recipe_ingredients(&self, recipe: &Recipe) -> Vec<&'a Ingredient> {
        self.catalog
            .ingredients()
            .iter()
            .filter(|i| recipe.uses_ingredient(&i.id))
            .collect()
    }

    pub fn author_recipes(&self, author: &Author) -> Vec<&'a Recipe> {
        self.catalog
            .recipes()
            .iter()
            .filter(|r| r.author == author.id)
            .collect()
    }

    pub fn ingredient_recipes(&self, ingredient: &Ingredient) -> Vec<&'a Recipe> {
        self.catalog
            .recipes()
            .iter()
            .filter(|r| r.uses_ingredient(&ingredient.id))
            .collect()
    }

    // ========== Lookups by name ==========

    /// Recipes of the first author named `name`
    pub fn recipes_by_author_name(&self, name: &str) -> Result<Vec<&'a Recipe>> {
        let author = self
            .catalog
            .find_author_by_name(name)
            .ok_or_else(|| Error::not_found(EntityKind::Author, name))?;
        Ok(self.author_recipes(author))
    }

    /// Recipes using the first ingredient named `name`
    pub fn recipes_by_ingredient_name(&self, name: &str) -> Result<Vec<&'a Recipe>> {
        let ingredient = self
            .catalog
            .find_ingredient_by_name(name)
            .ok_or_else(|| Error::not_found(EntityKind::Ingredient, name))?;
        Ok(self.ingredient_recipes(ingredient))
    }

    // ========== Views ==========

    pub fn recipe_view(&self, recipe: &Recipe) -> RecipeView {
        RecipeView {
            id: recipe.id.clone(),
            title: recipe.title.clone(),
            description: recipe.description.clone(),
            date: recipe.date.clone(),
            author: self.recipe_author(recipe).cloned(),
            ingredients: self.recipe_ingredients(recipe).into_iter().cloned().collect(),
        }
    }

    pub fn author_view(&self, author: &Author) -> AuthorView {
        AuthorView {
            id: author.id.clone(),
            name: author.name.clone(),
            mail: author.mail.clone(),
            recipes: self.author_recipes(author).into_iter().cloned().collect(),
        }
    }

    pub fn ingredient_view(&self, ingredient: &Ingredient) -> IngredientView {
        IngredientView {
            id: ingredient.id.clone(),
            name: ingredient.name.clone(),
            recipes: self.ingredient_recipes(ingredient).into_iter().cloned().collect(),
        }
    }

    pub fn recipe_views<'r>(&self, recipes: impl IntoIterator<Item = &'r Recipe>) -> Vec<RecipeView> {
        recipes.into_iter().map(|r| self.recipe_view(r)).collect()
    }

    pub fn all_recipes(&self) -> Vec<RecipeView> {
        self.recipe_views(self.catalog.recipes())
    }

    pub fn all_authors(&self) -> Vec<AuthorView> {
        self.catalog.authors().iter().map(|a| self.author_view(a)).collect()
    }

    pub fn all_ingredients(&self) -> Vec<IngredientView> {
        self.catalog
            .ingredients()
            .iter()
            .map(|i| self.ingredient_view(i))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::CascadePolicy;

    fn seeded() -> Catalog {
        Catalog::seeded(CascadePolicy::Literal)
    }

    #[test]
    fn test_recipes_by_author_name() {
        let catalog = seeded();
        let resolver = Resolver::new(&catalog);

        let recipes = resolver.recipes_by_author_name("Luis").unwrap();
        assert_eq!(recipes.len(), 1);
        assert_eq!(recipes[0].title, "Ensalada");

        assert!(matches!(
            resolver.recipes_by_author_name("Nadie"),
            Err(Error::NotFound { entity: EntityKind::Author, .. })
        ));
    }

    #[test]
    fn test_recipes_by_ingredient_name() {
        let mut catalog = seeded();
        catalog.add_ingredient("Pan").unwrap();
        catalog
            .add_recipe("Tostada", "Pan con tomate", "lfresnog@gmail.com", vec!["1".into()])
            .unwrap();
        let resolver = Resolver::new(&catalog);

        let titles: Vec<_> = resolver
            .recipes_by_ingredient_name("Tomate")
            .unwrap()
            .into_iter()
            .map(|r| r.title.as_str())
            .collect();
        assert_eq!(titles, vec!["Ensalada", "Tostada"]);

        let lechuga = resolver.recipes_by_ingredient_name("Lechuga").unwrap();
        assert_eq!(lechuga.len(), 1);
        assert!(resolver.recipes_by_ingredient_name("Pan").unwrap().is_empty());
        assert!(resolver.recipes_by_ingredient_name("Ajo").is_err());
    }

    #[test]
    fn test_recipe_view_resolves_relations() {
        let catalog = seeded();
        let resolver = Resolver::new(&catalog);

        let view = resolver.recipe_view(&catalog.recipes()[0]);
        assert_eq!(view.author.as_ref().map(|a| a.name.as_str()), Some("Luis"));
        let names: Vec<_> = view.ingredients.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Tomate", "Lechuga"]);
    }

    #[test]
    fn test_dangling_references_resolve_to_nothing() {
        let mut catalog = seeded();
        catalog.delete_author("Luis").unwrap();
        catalog.delete_ingredient("Tomate").unwrap();
        let resolver = Resolver::new(&catalog);

        let view = resolver.recipe_view(&catalog.recipes()[0]);
        assert!(view.author.is_none());
        assert_eq!(view.ingredients.len(), 1);
        assert_eq!(view.ingredients[0].name, "Lechuga");
    }

    #[test]
    fn test_reverse_lookups() {
        let catalog = seeded();
        let resolver = Resolver::new(&catalog);

        let authors = resolver.all_authors();
        assert_eq!(authors[0].recipes.len(), 1);

        let ingredients = resolver.all_ingredients();
        assert!(ingredients.iter().all(|i| i.recipes.len() == 1));
        assert_eq!(ingredients[0].recipes[0].ingredients, vec!["1".to_string(), "2".to_string()]);
    }
}
