//! `catalog search`: run the query resolver from the command line.

use anyhow::Result;
use catalog_core::search::{search, SearchRequest};
use catalog_core::Item;

use crate::catalog::load_catalog;
use crate::config::Config;

/// CLI entry point: validates the raw arguments the same way the HTTP layer
/// does, searches, and prints the results to stdout.
pub fn run_search(
    config: &Config,
    query: Option<&str>,
    sort_by: Option<&str>,
    categories: Option<&str>,
    json: bool,
) -> Result<()> {
    let limits = config.query.limits();
    let req = SearchRequest {
        query: limits.query(query)?,
        categories,
        sort_by: limits.sort_by(sort_by)?,
    };

    let catalog = load_catalog(config)?;
    let results = search(&catalog, &req);
    tracing::debug!(results = results.len(), sort_by = %req.sort_by, "search complete");

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    if results.is_empty() {
        println!("No results.");
        return Ok(());
    }

    println!("{} result(s), sorted by {}", results.len(), req.sort_by);
    print_items(&results);
    Ok(())
}

/// One line per item: id, price, name, and category.
pub fn print_items(items: &[Item]) {
    for item in items {
        println!(
            "  [{:>3}] {:>9}  {}  ({})",
            item.id,
            format!("${:.2}", item.price),
            item.name,
            item.category
        );
    }
}
