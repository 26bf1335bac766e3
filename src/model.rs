//! Record types - the three entities held by the catalog
//!
//! Every record carries a generated identifier that never changes:
//! - `Recipe`: title, description, date, one author reference, ingredient references
//! - `Author`: name and mail
//! - `Ingredient`: name
//!
//! References between records are plain identifier strings resolved on read.

use serde::{Deserialize, Serialize};

/// Format used for recipe creation dates (`02/04/2014`)
pub const DATE_FORMAT: &str = "%d/%m/%Y";

/// The kinds of record held by the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Recipe,
    Author,
    Ingredient,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Recipe => "recipe",
            EntityKind::Author => "author",
            EntityKind::Ingredient => "ingredient",
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Generate a fresh record identifier
pub fn generate_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Today's local date in [`DATE_FORMAT`]
pub fn today() -> String {
    chrono::Local::now().format(DATE_FORMAT).to_string()
}

/// A recipe, referencing its author and ingredients by id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: String,
    /// Unique among recipes
    pub title: String,
    pub description: String,
    /// Creation date, `DD/MM/YYYY`
    pub date: String,
    /// Id of the author
    pub author: String,
    /// Ids of the ingredients, in the order given at creation
    pub ingredients: Vec<String>,
}

impl Recipe {
    /// Create a recipe with a generated id dated today
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        author: impl Into<String>,
        ingredients: Vec<String>,
    ) -> Self {
        Self {
            id: generate_id(),
            title: title.into(),
            description: description.into(),
            date: today(),
            author: author.into(),
            ingredients,
        }
    }

    /// Whether the ingredient list references `ingredient_id`
    pub fn uses_ingredient(&self, ingredient_id: &str) -> bool {
        self.ingredients.iter().any(|id| id == ingredient_id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub id: String,
    /// Unique among authors (checked on creation only)
    pub name: String,
    pub mail: String,
}

impl Author {
    pub fn new(name: impl Into<String>, mail: impl Into<String>) -> Self {
        Self {
            id: generate_id(),
            name: name.into(),
            mail: mail.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    pub id: String,
    /// Unique among ingredients (checked on creation only)
    pub name: String,
}

impl Ingredient {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: generate_id(),
            name: name.into(),
        }
    }
}
