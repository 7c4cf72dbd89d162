//! Catalog loading.
//!
//! The catalog is built exactly once, before any command or request reads
//! from it: either the built-in dataset or a JSON file named by
//! `[catalog].path`.

use anyhow::{Context, Result};
use catalog_core::{Catalog, InMemoryCatalog};

use crate::config::Config;

pub fn load_catalog(config: &Config) -> Result<InMemoryCatalog> {
    let catalog = match &config.catalog.path {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read catalog file: {}", path.display()))?;
            let catalog = InMemoryCatalog::from_json(&json)
                .with_context(|| format!("Failed to load catalog file: {}", path.display()))?;
            tracing::info!(path = %path.display(), items = catalog.len(), "loaded catalog file");
            catalog
        }
        None => {
            let catalog = InMemoryCatalog::builtin();
            tracing::debug!(items = catalog.len(), "using built-in catalog");
            catalog
        }
    };
    Ok(catalog)
}
