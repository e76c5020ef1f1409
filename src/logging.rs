//! Tracing subscriber setup

use crate::config::LoggingConfig;
use anyhow::{Result, anyhow};
use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over the configured level.
pub fn init(config: &LoggingConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("meteotrend={0},tower_http={0}", config.level)));

    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_target(true);

    match config.format.as_str() {
        "json" => builder
            .json()
            .try_init()
            .map_err(|e| anyhow!("Failed to install tracing subscriber: {e}")),
        _ => builder
            .pretty()
            .try_init()
            .map_err(|e| anyhow!("Failed to install tracing subscriber: {e}")),
    }
}
