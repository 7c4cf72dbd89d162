//! Single-item lookup and category-scoped relations.

use std::collections::BTreeSet;

use crate::error::{CatalogError, CatalogResult};
use crate::models::Item;
use crate::store::Catalog;

/// Find the item with `id`, or [`CatalogError::NotFound`].
pub fn get_by_id<C: Catalog + ?Sized>(catalog: &C, id: i64) -> CatalogResult<&Item> {
    catalog
        .all()
        .iter()
        .find(|item| item.id == id)
        .ok_or(CatalogError::NotFound { id })
}

/// Up to `limit` items sharing the anchor's category, in catalog order,
/// never including the anchor itself.
///
/// `NotFound` from the anchor lookup propagates unchanged. `limit` is
/// assumed to be already bounded by the caller.
pub fn related<C: Catalog + ?Sized>(catalog: &C, id: i64, limit: usize) -> CatalogResult<Vec<Item>> {
    let anchor = get_by_id(catalog, id)?;
    Ok(catalog
        .all()
        .iter()
        .filter(|item| item.category == anchor.category && item.id != anchor.id)
        .take(limit)
        .cloned()
        .collect())
}

/// Every category label in the catalog, deduplicated and sorted ascending.
pub fn distinct_categories<C: Catalog + ?Sized>(catalog: &C) -> Vec<String> {
    catalog
        .all()
        .iter()
        .map(|item| item.category.as_str())
        .collect::<BTreeSet<&str>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}
