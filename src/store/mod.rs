//! Store Layer - in-memory catalog
//!
//! The catalog owns three ordered collections:
//! - recipes(id, title, description, date, author, ingredients)
//! - authors(id, name, mail)
//! - ingredients(id, name)
//!
//! Lookups are linear scans in insertion order; the first match wins.

pub mod catalog;
pub mod seed;

pub use catalog::{CascadePolicy, Catalog, CatalogStats, DELETED, UPDATED};
