//! In-memory [`Catalog`] implementation.
//!
//! Holds the item sequence in a plain `Vec`. Construction validates every
//! item invariant up front, so a constructed catalog never needs checking
//! again and reads are lock-free.

use std::collections::HashSet;

use crate::error::{CatalogError, CatalogResult};
use crate::models::Item;

use super::seed::builtin_items;
use super::Catalog;

/// Immutable, load-once catalog.
#[derive(Debug, Clone)]
pub struct InMemoryCatalog {
    items: Vec<Item>,
}

impl InMemoryCatalog {
    /// Build a catalog from `items`, keeping their order.
    ///
    /// Fails with [`CatalogError::InvalidCatalog`] when the sequence is empty,
    /// an id is not positive or repeats, a name or category is blank, or a
    /// price is negative or not finite.
    pub fn new(items: Vec<Item>) -> CatalogResult<Self> {
        validate_items(&items)?;
        Ok(Self { items })
    }

    /// The built-in twelve-item dataset.
    pub fn builtin() -> Self {
        Self {
            items: builtin_items(),
        }
    }

    /// Parse a JSON array of items (the wire shape) and validate it.
    pub fn from_json(json: &str) -> CatalogResult<Self> {
        let items: Vec<Item> = serde_json::from_str(json)
            .map_err(|e| CatalogError::invalid_catalog(format!("malformed JSON: {}", e)))?;
        Self::new(items)
    }
}

impl Default for InMemoryCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Catalog for InMemoryCatalog {
    fn all(&self) -> &[Item] {
        &self.items
    }
}

fn validate_items(items: &[Item]) -> CatalogResult<()> {
    if items.is_empty() {
        return Err(CatalogError::invalid_catalog("catalog has no items"));
    }

    let mut seen = HashSet::with_capacity(items.len());
    for item in items {
        if item.id <= 0 {
            return Err(CatalogError::invalid_catalog(format!(
                "item {}: id must be positive",
                item.id
            )));
        }
        if !seen.insert(item.id) {
            return Err(CatalogError::invalid_catalog(format!(
                "item {}: duplicate id",
                item.id
            )));
        }
        if item.name.trim().is_empty() {
            return Err(CatalogError::invalid_catalog(format!(
                "item {}: name must not be empty",
                item.id
            )));
        }
        if item.category.trim().is_empty() {
            return Err(CatalogError::invalid_catalog(format!(
                "item {}: category must not be empty",
                item.id
            )));
        }
        if !item.price.is_finite() || item.price < 0.0 {
            return Err(CatalogError::invalid_catalog(format!(
                "item {}: price must be a non-negative number",
                item.id
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_item(id: i64, name: &str, category: &str, price: f64) -> Item {
        Item {
            id,
            name: name.to_string(),
            description: String::new(),
            category: category.to_string(),
            price,
            image_url: String::new(),
        }
    }

    fn invalid_message(result: CatalogResult<InMemoryCatalog>) -> String {
        match result {
            Err(CatalogError::InvalidCatalog { message }) => message,
            other => panic!("expected InvalidCatalog, got {:?}", other),
        }
    }

    #[test]
    fn test_builtin_is_valid() {
        let builtin = InMemoryCatalog::builtin();
        assert_eq!(builtin.len(), 12);
        assert!(InMemoryCatalog::new(builtin.all().to_vec()).is_ok());
    }

    #[test]
    fn test_builtin_ids_in_order() {
        let ids: Vec<i64> = InMemoryCatalog::builtin()
            .all()
            .iter()
            .map(|i| i.id)
            .collect();
        assert_eq!(ids, (1..=12).collect::<Vec<i64>>());
    }

    #[test]
    fn test_all_is_stable_across_calls() {
        let catalog = InMemoryCatalog::builtin();
        assert_eq!(catalog.all(), catalog.all());
    }

    #[test]
    fn test_new_keeps_order() {
        let catalog = InMemoryCatalog::new(vec![
            make_item(3, "c", "X", 1.0),
            make_item(1, "a", "X", 1.0),
            make_item(2, "b", "Y", 1.0),
        ])
        .unwrap();
        let ids: Vec<i64> = catalog.all().iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn test_rejects_empty() {
        let msg = invalid_message(InMemoryCatalog::new(Vec::new()));
        assert!(msg.contains("no items"));
    }

    #[test]
    fn test_rejects_duplicate_id() {
        let msg = invalid_message(InMemoryCatalog::new(vec![
            make_item(1, "a", "X", 1.0),
            make_item(1, "b", "X", 2.0),
        ]));
        assert!(msg.contains("duplicate id"), "{msg}");
    }

    #[test]
    fn test_rejects_non_positive_id() {
        let msg = invalid_message(InMemoryCatalog::new(vec![make_item(0, "a", "X", 1.0)]));
        assert!(msg.contains("positive"), "{msg}");
    }

    #[test]
    fn test_rejects_blank_name_and_category() {
        let msg = invalid_message(InMemoryCatalog::new(vec![make_item(1, "  ", "X", 1.0)]));
        assert!(msg.contains("name"), "{msg}");
        let msg = invalid_message(InMemoryCatalog::new(vec![make_item(1, "a", "", 1.0)]));
        assert!(msg.contains("category"), "{msg}");
    }

    #[test]
    fn test_rejects_bad_price() {
        let msg = invalid_message(InMemoryCatalog::new(vec![make_item(1, "a", "X", -0.5)]));
        assert!(msg.contains("price"), "{msg}");
        let msg = invalid_message(InMemoryCatalog::new(vec![make_item(1, "a", "X", f64::NAN)]));
        assert!(msg.contains("price"), "{msg}");
    }

    #[test]
    fn test_zero_price_is_allowed() {
        assert!(InMemoryCatalog::new(vec![make_item(1, "free", "X", 0.0)]).is_ok());
    }

    #[test]
    fn test_from_json() {
        let json = r#"[
            {"id": 5, "name": "Mug", "description": "Stoneware", "category": "Kitchen",
             "price": 12.5, "image_url": "https://example.com/mug.jpg"}
        ]"#;
        let catalog = InMemoryCatalog::from_json(json).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.all()[0].name, "Mug");
        assert_eq!(catalog.all()[0].price, 12.5);
    }

    #[test]
    fn test_from_json_malformed() {
        let msg = invalid_message(InMemoryCatalog::from_json("{\"id\": 1}"));
        assert!(msg.contains("malformed JSON"), "{msg}");
    }
}
