//! `catalog categories`: list the distinct category labels.

use anyhow::Result;
use catalog_core::lookup::distinct_categories;

use crate::catalog::load_catalog;
use crate::config::Config;

pub fn run_categories(config: &Config, json: bool) -> Result<()> {
    let catalog = load_catalog(config)?;
    let categories = distinct_categories(&catalog);

    if json {
        let body = serde_json::json!({ "categories": categories });
        println!("{}", serde_json::to_string_pretty(&body)?);
    } else {
        for category in &categories {
            println!("{}", category);
        }
    }
    Ok(())
}
