use anyhow::{Context, Result};
use catalog_core::params::{QueryLimits, DEFAULT_RELATED_LIMIT, MAX_QUERY_LEN, MAX_RELATED_LIMIT};
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub query: QueryConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
    /// Allowed CORS origins. Empty allows any origin.
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            cors_origins: Vec::new(),
        }
    }
}

fn default_bind() -> String {
    "127.0.0.1:8000".to_string()
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct CatalogConfig {
    /// JSON file holding an array of items. Unset serves the built-in dataset.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct QueryConfig {
    #[serde(default = "default_max_query_len")]
    pub max_query_len: usize,
    #[serde(default = "default_related_limit")]
    pub default_related_limit: usize,
    #[serde(default = "default_max_related_limit")]
    pub max_related_limit: usize,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            max_query_len: MAX_QUERY_LEN,
            default_related_limit: DEFAULT_RELATED_LIMIT,
            max_related_limit: MAX_RELATED_LIMIT,
        }
    }
}

fn default_max_query_len() -> usize {
    MAX_QUERY_LEN
}
fn default_related_limit() -> usize {
    DEFAULT_RELATED_LIMIT
}
fn default_max_related_limit() -> usize {
    MAX_RELATED_LIMIT
}

impl QueryConfig {
    pub fn limits(&self) -> QueryLimits {
        QueryLimits {
            max_query_len: self.max_query_len,
            default_related_limit: self.default_related_limit,
            max_related_limit: self.max_related_limit,
        }
    }
}

impl Config {
    /// Built-in defaults, used when no config file exists.
    pub fn minimal() -> Self {
        Self::default()
    }
}

pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let mut config: Config =
        toml::from_str(&content).with_context(|| "Failed to parse config file")?;

    // Relative catalog paths are resolved against the config file's directory
    if let Some(catalog_path) = &config.catalog.path {
        if catalog_path.is_relative() {
            if let Some(dir) = path.parent() {
                config.catalog.path = Some(dir.join(catalog_path));
            }
        }
    }

    validate(&config)?;
    Ok(config)
}

fn validate(config: &Config) -> Result<()> {
    if config.server.bind.trim().is_empty() {
        anyhow::bail!("server.bind must not be empty");
    }

    let query = &config.query;
    if query.max_query_len == 0 {
        anyhow::bail!("query.max_query_len must be >= 1");
    }
    if query.max_related_limit == 0 {
        anyhow::bail!("query.max_related_limit must be >= 1");
    }
    if query.default_related_limit == 0 || query.default_related_limit > query.max_related_limit {
        anyhow::bail!(
            "query.default_related_limit must be in [1, {}]",
            query.max_related_limit
        );
    }

    Ok(())
}
