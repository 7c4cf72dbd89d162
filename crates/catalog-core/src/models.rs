//! Core data models for Catalog Search.
//!
//! These types flow through every layer: the store owns [`Item`]s, the
//! query resolver consumes a [`SortBy`], and the HTTP layer serializes both
//! straight onto the wire.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// One product-like record in the catalog.
///
/// Field names are the wire contract; do not rename them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Positive identifier, unique across the catalog.
    pub id: i64,
    pub name: String,
    pub description: String,
    /// Label from an open set; compared case-sensitively by the category filter.
    pub category: String,
    pub price: f64,
    /// Opaque image reference, never fetched or validated.
    pub image_url: String,
}

/// Ordering applied to search results.
///
/// All modes sort stably, so items that compare equal keep their catalog order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortBy {
    /// Ascending lexicographic by name.
    #[default]
    Name,
    /// Ascending by price.
    PriceAsc,
    /// Descending by price.
    PriceDesc,
    /// Descending by id. Higher ids were added later.
    Newest,
}

impl SortBy {
    /// Every mode, in the order they are documented to clients.
    pub const ALL: [SortBy; 4] = [
        SortBy::Name,
        SortBy::PriceAsc,
        SortBy::PriceDesc,
        SortBy::Newest,
    ];

    /// The wire name of this mode (`name`, `price_asc`, ...).
    pub fn as_str(&self) -> &'static str {
        match self {
            SortBy::Name => "name",
            SortBy::PriceAsc => "price_asc",
            SortBy::PriceDesc => "price_desc",
            SortBy::Newest => "newest",
        }
    }
}

impl fmt::Display for SortBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortBy {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortBy::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| {
                CatalogError::validation(format!(
                    "invalid sort_by '{}': must be one of name, price_asc, price_desc, newest",
                    s
                ))
            })
    }
}
