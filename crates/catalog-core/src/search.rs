//! Query resolver: text filter, category filter, then sort.
//!
//! The resolver works entirely through the [`Catalog`] trait and performs no
//! validation of its own beyond ignoring blank input. Parameter bounds
//! (query length, `sort_by` spelling) are enforced by the caller, see
//! [`crate::params`].
//!
//! # Pipeline
//!
//! 1. Start from every item in catalog order.
//! 2. Text filter: keep items whose lower-cased name, description, or
//!    category contains the lower-cased query as a substring.
//! 3. Category filter: keep items whose category exactly equals one of the
//!    requested labels (case-sensitive).
//! 4. Stable sort by the requested [`SortBy`] mode.
//!
//! Both filters are set intersections, so their order does not change the
//! result.

use std::cmp::Ordering;

use crate::models::{Item, SortBy};
use crate::store::Catalog;

/// Bundles the inputs of a single search.
#[derive(Debug, Clone, Default)]
pub struct SearchRequest<'a> {
    /// Free-text query. Blank text is treated as absent.
    pub query: Option<&'a str>,
    /// Comma-separated category labels. No usable labels means no filter.
    pub categories: Option<&'a str>,
    pub sort_by: SortBy,
}

/// Run a search against a [`Catalog`] and return the matching items in order.
pub fn search<C: Catalog + ?Sized>(catalog: &C, req: &SearchRequest<'_>) -> Vec<Item> {
    let needle = req
        .query
        .map(str::trim)
        .filter(|q| !q.is_empty())
        .map(str::to_lowercase);
    let labels = req.categories.map(parse_categories).unwrap_or_default();

    let mut results: Vec<Item> = catalog
        .all()
        .iter()
        .filter(|item| match &needle {
            Some(needle) => matches_query(item, needle),
            None => true,
        })
        .filter(|item| labels.is_empty() || labels.contains(&item.category.as_str()))
        .cloned()
        .collect();

    sort_items(&mut results, req.sort_by);
    results
}

/// Split a comma-separated category list into trimmed, non-empty labels.
///
/// Order and duplicates are preserved; they do not affect filtering.
pub fn parse_categories(raw: &str) -> Vec<&str> {
    raw.split(',')
        .map(str::trim)
        .filter(|label| !label.is_empty())
        .collect()
}

/// Whether `needle` (already lower-cased) occurs in the item's name,
/// description, or category, ignoring case.
pub fn matches_query(item: &Item, needle: &str) -> bool {
    item.name.to_lowercase().contains(needle)
        || item.description.to_lowercase().contains(needle)
        || item.category.to_lowercase().contains(needle)
}

/// Sort in place. `slice::sort_by` is stable, so ties keep their current order.
pub fn sort_items(items: &mut [Item], sort_by: SortBy) {
    let compare: fn(&Item, &Item) -> Ordering = match sort_by {
        SortBy::Name => |a: &Item, b: &Item| a.name.cmp(&b.name),
        SortBy::PriceAsc => |a: &Item, b: &Item| a.price.total_cmp(&b.price),
        SortBy::PriceDesc => |a: &Item, b: &Item| b.price.total_cmp(&a.price),
        SortBy::Newest => |a: &Item, b: &Item| b.id.cmp(&a.id),
    };
    items.sort_by(compare);
}
