//! Item retrieval by id, and related items.
//!
//! Used by the `catalog get` and `catalog related` commands. The HTTP
//! equivalents live in [`crate::server`].

use anyhow::Result;
use catalog_core::lookup::{get_by_id, related};

use crate::catalog::load_catalog;
use crate::config::Config;
use crate::search::print_items;

/// CLI entry point: print one item. A missing id is returned as an error.
pub fn run_get(config: &Config, id: i64, json: bool) -> Result<()> {
    let catalog = load_catalog(config)?;
    let item = get_by_id(&catalog, id)?;

    if json {
        println!("{}", serde_json::to_string_pretty(item)?);
        return Ok(());
    }

    println!("--- Item ---");
    println!("id:           {}", item.id);
    println!("name:         {}", item.name);
    println!("category:     {}", item.category);
    println!("price:        ${:.2}", item.price);
    println!("image_url:    {}", item.image_url);
    println!();
    println!("--- Description ---");
    println!("{}", item.description);

    Ok(())
}

/// CLI entry point: print up to `limit` items in the same category as `id`.
pub fn run_related(config: &Config, id: i64, limit: Option<i64>, json: bool) -> Result<()> {
    let limit = config.query.limits().related_limit(limit)?;
    let catalog = load_catalog(config)?;
    let items = related(&catalog, id, limit)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&items)?);
        return Ok(());
    }

    if items.is_empty() {
        println!("No related items.");
        return Ok(());
    }

    println!("{} related item(s) for [{}]", items.len(), id);
    print_items(&items);
    Ok(())
}
