//! Tracing subscriber setup.
//!
//! `RUST_LOG` takes precedence over the `--log-level` flag. Output is a
//! compact single-line format on stderr so stdout stays clean for CLI
//! results.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "catalog_search={level},catalog_core={level},tower_http={level},warn"
        ))
    });

    // A second init (e.g. from tests) keeps the first subscriber.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .try_init();
}
