//! # Recipe Catalog
//!
//! In-memory recipe catalog served through a query/mutation API.
//!
//! Recipe Catalog provides:
//! - Three record kinds (recipes, authors, ingredients) linked by id
//! - An owned in-memory store with uniqueness checks and cascading deletes
//! - Relationship resolution in both directions
//! - A typed operation surface served over HTTP

pub mod model;
pub mod store;
pub mod query;
pub mod operation;
pub mod schema;
pub mod server;
pub mod config;
pub mod ui;

// Re-exports for convenient access
pub use model::{Author, EntityKind, Ingredient, Recipe};
pub use store::{CascadePolicy, Catalog};
pub use query::Resolver;
pub use operation::{Operation, Outcome};

/// Result type alias for catalog operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for catalog operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("{entity} '{key}' already exists")]
    Conflict { entity: EntityKind, key: String },

    #[error("{entity} '{key}' not found")]
    NotFound { entity: EntityKind, key: String },
}

impl Error {
    pub fn conflict(entity: EntityKind, key: impl Into<String>) -> Self {
        Error::Conflict { entity, key: key.into() }
    }

    pub fn not_found(entity: EntityKind, key: impl Into<String>) -> Self {
        Error::NotFound { entity, key: key.into() }
    }

    /// Error kind as reported to API clients
    pub fn kind(&self) -> &'static str {
        match self {
            Error::Conflict { .. } => "Conflict",
            Error::NotFound { .. } => "NotFound",
        }
    }
}
