//! # Catalog Search CLI (`catalog`)
//!
//! The `catalog` binary starts the HTTP service and runs the same queries
//! from the command line.
//!
//! ## Usage
//!
//! ```bash
//! catalog --config ./config/catalog.toml <command>
//! ```
//!
//! ## Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `catalog serve` | Start the HTTP server |
//! | `catalog search [QUERY]` | Search, filter, and sort items |
//! | `catalog get <id>` | Show one item |
//! | `catalog related <id>` | Show items in the same category |
//! | `catalog categories` | List distinct categories |

use catalog_search::{categories, config, get, logging, search, server};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

const DEFAULT_CONFIG_PATH: &str = "./config/catalog.toml";

/// Catalog Search CLI: a read-only product catalog with search, filters,
/// sorting, and related items.
#[derive(Parser)]
#[command(
    name = "catalog",
    about = "Catalog Search: a read-only product catalog served over HTTP and the command line",
    version
)]
struct Cli {
    /// Path to configuration file (TOML).
    ///
    /// Defaults to `./config/catalog.toml`. If the default file does not
    /// exist, built-in defaults are used.
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Log level (trace, debug, info, warn, error). `RUST_LOG` overrides it.
    #[arg(
        long,
        global = true,
        default_value = "info",
        value_parser = ["trace", "debug", "info", "warn", "error"]
    )]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level CLI commands.
#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server.
    ///
    /// Binds to `[server].bind` (default `127.0.0.1:8000`) unless `--bind`
    /// is given.
    Serve {
        /// Address to bind, overriding the config file.
        #[arg(long)]
        bind: Option<String>,
    },

    /// Search items.
    ///
    /// Matches the query case-insensitively against name, description, and
    /// category, then filters by category and sorts.
    Search {
        /// Search text (1-100 characters after trimming). Omit to list everything.
        query: Option<String>,

        /// Sort mode: `name`, `price_asc`, `price_desc`, or `newest`.
        #[arg(long)]
        sort_by: Option<String>,

        /// Comma-separated category labels (exact, case-sensitive).
        #[arg(long)]
        categories: Option<String>,

        /// Print the JSON response body instead of a table.
        #[arg(long)]
        json: bool,
    },

    /// Show a single item by id.
    Get {
        /// Item id.
        id: i64,

        /// Print the JSON response body.
        #[arg(long)]
        json: bool,
    },

    /// Show items in the same category as the given item.
    Related {
        /// Anchor item id.
        id: i64,

        /// Maximum number of items (1-10, default 3).
        #[arg(long, allow_hyphen_values = true)]
        limit: Option<i64>,

        /// Print the JSON response body.
        #[arg(long)]
        json: bool,
    },

    /// List the distinct category labels, sorted.
    Categories {
        /// Print the JSON response body.
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init_logging(&cli.log_level);

    let cfg = if cli.config == PathBuf::from(DEFAULT_CONFIG_PATH) && !cli.config.exists() {
        tracing::debug!("no config file at {}, using defaults", DEFAULT_CONFIG_PATH);
        config::Config::minimal()
    } else {
        config::load_config(&cli.config)?
    };

    match cli.command {
        Commands::Serve { bind } => {
            server::run_server(&cfg, bind.as_deref()).await?;
        }
        Commands::Search {
            query,
            sort_by,
            categories,
            json,
        } => {
            search::run_search(
                &cfg,
                query.as_deref(),
                sort_by.as_deref(),
                categories.as_deref(),
                json,
            )?;
        }
        Commands::Get { id, json } => {
            get::run_get(&cfg, id, json)?;
        }
        Commands::Related { id, limit, json } => {
            get::run_related(&cfg, id, limit, json)?;
        }
        Commands::Categories { json } => {
            categories::run_categories(&cfg, json)?;
        }
    }

    Ok(())
}
