use std::env;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use meteotrend::{AppConfig, ReportService, logging, web};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let config_path = env::var_os("METEOTREND_CONFIG").map(PathBuf::from);
    let config = AppConfig::load_from_path(config_path)?;

    logging::init(&config.logging)?;
    info!(
        "Starting meteotrend {} (history window: {} days)",
        meteotrend::VERSION,
        config.archive.history_days
    );

    let service = ReportService::from_config(&config).context("Failed to build report service")?;

    web::run(Arc::new(service), &config.server).await
}
