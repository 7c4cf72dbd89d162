//! # Catalog Core
//!
//! Shared logic for Catalog Search: the item model, the read-only catalog
//! store, the query resolver, and single-item and related-item lookups.
//!
//! This crate contains no tokio, axum, or filesystem I/O. Every operation is
//! a synchronous, pure read over an immutable catalog.

pub mod error;
pub mod lookup;
pub mod models;
pub mod params;
pub mod search;
pub mod store;

pub use error::{CatalogError, CatalogResult};
pub use models::{Item, SortBy};
pub use store::memory::InMemoryCatalog;
pub use store::Catalog;
