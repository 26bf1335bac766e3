//! Query Layer - relationship resolution over the catalog

pub mod resolver;

pub use resolver::{AuthorView, IngredientView, RecipeView, Resolver};
