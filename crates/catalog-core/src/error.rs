//! Error type shared by the store, the query resolver, and the lookups.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    /// No item in the catalog has this id.
    #[error("item not found: {id}")]
    NotFound { id: i64 },

    /// A request parameter is malformed or out of range.
    #[error("{message}")]
    Validation { message: String },

    /// Catalog data violates the item invariants. Only raised while loading.
    #[error("invalid catalog: {message}")]
    InvalidCatalog { message: String },
}

impl CatalogError {
    pub fn validation(message: impl Into<String>) -> Self {
        CatalogError::Validation {
            message: message.into(),
        }
    }

    pub fn invalid_catalog(message: impl Into<String>) -> Self {
        CatalogError::InvalidCatalog {
            message: message.into(),
        }
    }
}

pub type CatalogResult<T> = Result<T, CatalogError>;
