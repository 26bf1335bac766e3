//! In-memory catalog implementation

use serde::{Deserialize, Serialize};
use crate::{Error, Result};
use crate::model::{Author, EntityKind, Ingredient, Recipe};
use super::seed;

/// Confirmation returned by delete mutations
pub const DELETED: &str = "Deleted";
/// Confirmation returned by update mutations
pub const UPDATED: &str = "Updated";

/// How author/ingredient deletion picks the recipes to remove along with the record.
///
/// Recipes store ids, while deletions are addressed by name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CascadePolicy {
    /// Compare the stored ids against the name argument as-is.
    /// With generated ids this normally removes no recipes.
    #[default]
    Literal,
    /// Resolve the name to the record id first, then remove recipes referencing that id.
    ResolveName,
}

impl CascadePolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            CascadePolicy::Literal => "literal",
            CascadePolicy::ResolveName => "resolve_name",
        }
    }
}

impl std::str::FromStr for CascadePolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "literal" => Ok(CascadePolicy::Literal),
            "resolve_name" => Ok(CascadePolicy::ResolveName),
            _ => Err(format!("Unknown cascade policy: {}", s)),
        }
    }
}

impl std::fmt::Display for CascadePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Owned in-memory store for recipes, authors and ingredients
#[derive(Debug, Default)]
pub struct Catalog {
    recipes: Vec<Recipe>,
    authors: Vec<Author>,
    ingredients: Vec<Ingredient>,
    cascade: CascadePolicy,
}

impl Catalog {
    /// Create an empty catalog
    pub fn new(cascade: CascadePolicy) -> Self {
        Self {
            cascade,
            ..Self::default()
        }
    }

    /// Create a catalog holding the seed records
    pub fn seeded(cascade: CascadePolicy) -> Self {
        Self {
            recipes: seed::recipes(),
            authors: seed::authors(),
            ingredients: seed::ingredients(),
            cascade,
        }
    }

    pub fn cascade_policy(&self) -> CascadePolicy {
        self.cascade
    }

    // ========== Listings ==========

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn authors(&self) -> &[Author] {
        &self.authors
    }

    pub fn ingredients(&self) -> &[Ingredient] {
        &self.ingredients
    }

    // ========== Lookups ==========

    pub fn find_recipe_by_title(&self, title: &str) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.title == title)
    }

    pub fn find_author(&self, id: &str) -> Option<&Author> {
        self.authors.iter().find(|a| a.id == id)
    }

    pub fn find_author_by_name(&self, name: &str) -> Option<&Author> {
        self.authors.iter().find(|a| a.name == name)
    }

    pub fn find_author_by_mail(&self, mail: &str) -> Option<&Author> {
        self.authors.iter().find(|a| a.mail == mail)
    }

    pub fn find_ingredient_by_name(&self, name: &str) -> Option<&Ingredient> {
        self.ingredients.iter().find(|i| i.name == name)
    }

    // ========== Recipe Operations ==========

    /// Add a recipe written by the author registered under `mail`.
    ///
    /// Ingredient ids are stored as given, without checking they exist.
    pub fn add_recipe(
        &mut self,
        title: &str,
        description: &str,
        mail: &str,
        ingredients: Vec<String>,
    ) -> Result<Recipe> {
        if self.find_recipe_by_title(title).is_some() {
            return Err(Error::conflict(EntityKind::Recipe, title));
        }
        let author_id = self
            .find_author_by_mail(mail)
            .map(|a| a.id.clone())
            .ok_or_else(|| Error::not_found(EntityKind::Author, mail))?;

        let recipe = Recipe::new(title, description, author_id, ingredients);
        tracing::debug!("Added recipe {} ({})", recipe.title, recipe.id);
        self.recipes.push(recipe.clone());
        Ok(recipe)
    }

    /// Remove the first recipe with this title
    pub fn delete_recipe(&mut self, title: &str) -> Result<&'static str> {
        let index = self
            .recipes
            .iter()
            .position(|r| r.title == title)
            .ok_or_else(|| Error::not_found(EntityKind::Recipe, title))?;

        let removed = self.recipes.remove(index);
        tracing::debug!("Deleted recipe {} ({})", removed.title, removed.id);
        Ok(DELETED)
    }

    // ========== Author Operations ==========

    pub fn add_author(&mut self, name: &str, mail: &str) -> Result<Author> {
        if self.find_author_by_name(name).is_some() {
            return Err(Error::conflict(EntityKind::Author, name));
        }
        let author = Author::new(name, mail);
        tracing::debug!("Added author {} ({})", author.name, author.id);
        self.authors.push(author.clone());
        Ok(author)
    }

    /// Remove an author and, per the cascade policy, the recipes attributed to it
    pub fn delete_author(&mut self, name: &str) -> Result<&'static str> {
        let index = self
            .authors
            .iter()
            .position(|a| a.name == name)
            .ok_or_else(|| Error::not_found(EntityKind::Author, name))?;

        let key = match self.cascade {
            CascadePolicy::Literal => name.to_string(),
            CascadePolicy::ResolveName => self.authors[index].id.clone(),
        };
        let before = self.recipes.len();
        self.recipes.retain(|r| r.author != key);

        let removed = self.authors.remove(index);
        tracing::debug!(
            "Deleted author {} ({}), cascaded to {} recipe(s) [{}]",
            removed.name,
            removed.id,
            before - self.recipes.len(),
            self.cascade
        );
        Ok(DELETED)
    }

    /// Replace the name and/or mail of an author.
    ///
    /// Missing or empty replacements keep the current value. Name uniqueness is not re-checked.
    pub fn update_author(
        &mut self,
        name: &str,
        new_name: Option<&str>,
        new_mail: Option<&str>,
    ) -> Result<&'static str> {
        let author = self
            .authors
            .iter_mut()
            .find(|a| a.name == name)
            .ok_or_else(|| Error::not_found(EntityKind::Author, name))?;

        if let Some(n) = new_name.filter(|n| !n.is_empty()) {
            author.name = n.to_string();
        }
        if let Some(m) = new_mail.filter(|m| !m.is_empty()) {
            author.mail = m.to_string();
        }
        tracing::debug!("Updated author {} ({})", author.name, author.id);
        Ok(UPDATED)
    }

    // ========== Ingredient Operations ==========

    pub fn add_ingredient(&mut self, name: &str) -> Result<Ingredient> {
        if self.find_ingredient_by_name(name).is_some() {
            return Err(Error::conflict(EntityKind::Ingredient, name));
        }
        let ingredient = Ingredient::new(name);
        tracing::debug!("Added ingredient {} ({})", ingredient.name, ingredient.id);
        self.ingredients.push(ingredient.clone());
        Ok(ingredient)
    }

    /// Remove an ingredient and, per the cascade policy, the recipes using it
    pub fn delete_ingredient(&mut self, name: &str) -> Result<&'static str> {
        let index = self
            .ingredients
            .iter()
            .position(|i| i.name == name)
            .ok_or_else(|| Error::not_found(EntityKind::Ingredient, name))?;

        let key = match self.cascade {
            CascadePolicy::Literal => name.to_string(),
            CascadePolicy::ResolveName => self.ingredients[index].id.clone(),
        };
        let before = self.recipes.len();
        self.recipes.retain(|r| !r.uses_ingredient(&key));

        let removed = self.ingredients.remove(index);
        tracing::debug!(
            "Deleted ingredient {} ({}), cascaded to {} recipe(s) [{}]",
            removed.name,
            removed.id,
            before - self.recipes.len(),
            self.cascade
        );
        Ok(DELETED)
    }

    /// Rename an ingredient. Name uniqueness is not re-checked.
    pub fn update_ingredient(&mut self, name: &str, new_name: &str) -> Result<&'static str> {
        let ingredient = self
            .ingredients
            .iter_mut()
            .find(|i| i.name == name)
            .ok_or_else(|| Error::not_found(EntityKind::Ingredient, name))?;

        ingredient.name = new_name.to_string();
        tracing::debug!("Updated ingredient {} ({})", ingredient.name, ingredient.id);
        Ok(UPDATED)
    }

    // ========== Stats ==========

    pub fn stats(&self) -> CatalogStats {
        CatalogStats {
            recipes: self.recipes.len(),
            authors: self.authors.len(),
            ingredients: self.ingredients.len(),
        }
    }
}

/// Record counts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CatalogStats {
    pub recipes: usize,
    pub authors: usize,
    pub ingredients: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded() -> Catalog {
        Catalog::seeded(CascadePolicy::Literal)
    }

    #[test]
    fn test_seed_contents() {
        let catalog = seeded();
        let stats = catalog.stats();
        assert_eq!(stats, CatalogStats { recipes: 1, authors: 1, ingredients: 2 });
        assert_eq!(catalog.recipes()[0].title, "Ensalada");
        assert!(Catalog::new(CascadePolicy::Literal).recipes().is_empty());
    }

    #[test]
    fn test_add_author() {
        let mut catalog = seeded();
        let ana = catalog.add_author("Ana", "a@x.com").unwrap();

        let matching: Vec<_> = catalog.authors().iter().filter(|a| a.name == "Ana").collect();
        assert_eq!(matching.len(), 1);
        assert!(!ana.id.is_empty());
        assert!(catalog.authors().iter().filter(|a| a.id == ana.id).count() == 1);
        assert_eq!(matching[0].mail, "a@x.com");
    }

    #[test]
    fn test_add_author_conflict() {
        let mut catalog = seeded();
        let err = catalog.add_author("Luis", "other@x.com").unwrap_err();
        assert!(matches!(err, Error::Conflict { entity: EntityKind::Author, .. }));
        assert_eq!(catalog.authors().len(), 1);
    }

    #[test]
    fn test_add_recipe() {
        let mut catalog = seeded();
        let recipe = catalog
            .add_recipe("Gazpacho", "Sopa fria", "lfresnog@gmail.com", vec!["1".into(), "99".into()])
            .unwrap();

        assert_eq!(recipe.author, "1");
        assert_eq!(recipe.ingredients, vec!["1".to_string(), "99".to_string()]);
        let listed = catalog.recipes().last().unwrap();
        assert_eq!(listed, &recipe);
        assert!(catalog.recipes().iter().filter(|r| r.id == recipe.id).count() == 1);
    }

    #[test]
    fn test_add_recipe_duplicate_title() {
        let mut catalog = seeded();
        let err = catalog
            .add_recipe("Ensalada", "otra", "lfresnog@gmail.com", vec![])
            .unwrap_err();
        assert!(matches!(err, Error::Conflict { entity: EntityKind::Recipe, .. }));
        assert_eq!(catalog.recipes().len(), 1);
    }

    #[test]
    fn test_add_recipe_unknown_mail() {
        let mut catalog = seeded();
        let err = catalog
            .add_recipe("Gazpacho", "Sopa fria", "nobody@x.com", vec![])
            .unwrap_err();
        assert!(matches!(err, Error::NotFound { entity: EntityKind::Author, .. }));
        assert_eq!(err.to_string(), "author 'nobody@x.com' not found");
        assert_eq!(catalog.recipes().len(), 1);
    }

    #[test]
    fn test_delete_recipe() {
        let mut catalog = seeded();
        assert_eq!(catalog.delete_recipe("Ensalada").unwrap(), DELETED);
        assert!(catalog.recipes().is_empty());
        assert!(catalog.delete_recipe("Ensalada").is_err());
    }

    #[test]
    fn test_delete_ingredient_literal_keeps_recipes() {
        let mut catalog = seeded();
        catalog.delete_ingredient("Tomate").unwrap();

        assert!(catalog.find_ingredient_by_name("Tomate").is_none());
        assert_eq!(catalog.recipes().len(), 1);
    }

    #[test]
    fn test_delete_ingredient_resolve_name_cascades() {
        let mut catalog = Catalog::seeded(CascadePolicy::ResolveName);
        catalog.add_recipe("Pan", "Pan con nada", "lfresnog@gmail.com", vec![]).unwrap();
        catalog.delete_ingredient("Tomate").unwrap();

        assert!(catalog.find_ingredient_by_name("Tomate").is_none());
        assert_eq!(catalog.recipes().len(), 1);
        assert_eq!(catalog.recipes()[0].title, "Pan");
    }

    #[test]
    fn test_delete_author_cascade_policies() {
        let mut literal = seeded();
        literal.delete_author("Luis").unwrap();
        assert!(literal.authors().is_empty());
        assert_eq!(literal.recipes().len(), 1);

        let mut resolved = Catalog::seeded(CascadePolicy::ResolveName);
        resolved.delete_author("Luis").unwrap();
        assert!(resolved.authors().is_empty());
        assert!(resolved.recipes().is_empty());
    }

    #[test]
    fn test_delete_ingredient_literal_removes_adjacent_matches() {
        let mut catalog = seeded();
        catalog
            .add_recipe("Tostada", "Pan con tomate", "lfresnog@gmail.com", vec!["Tomate".into()])
            .unwrap();
        catalog
            .add_recipe("Salmorejo", "Crema fria", "lfresnog@gmail.com", vec!["Tomate".into()])
            .unwrap();

        catalog.delete_ingredient("Tomate").unwrap();

        let titles: Vec<_> = catalog.recipes().iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["Ensalada"]);
    }

    #[test]
    fn test_delete_author_resolve_name_removes_every_recipe() {
        let mut catalog = Catalog::seeded(CascadePolicy::ResolveName);
        catalog.add_recipe("Pisto", "Verduras", "lfresnog@gmail.com", vec![]).unwrap();
        catalog.add_recipe("Tortilla", "Huevo y patata", "lfresnog@gmail.com", vec![]).unwrap();
        catalog.add_author("Ana", "a@x.com").unwrap();
        catalog.add_recipe("Flan", "Postre", "a@x.com", vec![]).unwrap();

        catalog.delete_author("Luis").unwrap();

        let titles: Vec<_> = catalog.recipes().iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["Flan"]);
    }

    #[test]
    fn test_delete_missing_records() {
        let mut catalog = seeded();
        assert!(matches!(
            catalog.delete_author("Nadie"),
            Err(Error::NotFound { entity: EntityKind::Author, .. })
        ));
        assert!(matches!(
            catalog.delete_ingredient("Ajo"),
            Err(Error::NotFound { entity: EntityKind::Ingredient, .. })
        ));
    }

    #[test]
    fn test_update_author_partial() {
        let mut catalog = seeded();
        assert_eq!(catalog.update_author("Luis", None, Some("new@mail.com")).unwrap(), UPDATED);

        let luis = catalog.find_author_by_name("Luis").unwrap();
        assert_eq!(luis.mail, "new@mail.com");
        assert_eq!(luis.id, "1");

        catalog.update_author("Luis", Some("Luisa"), Some("")).unwrap();
        let luisa = catalog.find_author("1").unwrap();
        assert_eq!(luisa.name, "Luisa");
        assert_eq!(luisa.mail, "new@mail.com");
    }

    #[test]
    fn test_update_missing_author() {
        let mut catalog = seeded();
        let err = catalog.update_author("Nadie", Some("x"), None).unwrap_err();
        assert!(matches!(err, Error::NotFound { .. }));
    }

    #[test]
    fn test_update_ingredient() {
        let mut catalog = seeded();
        catalog.update_ingredient("Tomate", "Tomate cherry").unwrap();
        assert_eq!(catalog.ingredients()[0].name, "Tomate cherry");
        assert_eq!(catalog.ingredients()[0].id, "1");
        assert!(catalog.update_ingredient("Tomate", "x").is_err());
    }

    #[test]
    fn test_cascade_policy_parse() {
        assert_eq!("literal".parse::<CascadePolicy>().unwrap(), CascadePolicy::Literal);
        assert_eq!("resolve-name".parse::<CascadePolicy>().unwrap(), CascadePolicy::ResolveName);
        assert!("sideways".parse::<CascadePolicy>().is_err());
        assert!("by_id".parse::<CascadePolicy>().is_err());
    }
}
