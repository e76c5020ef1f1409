//! Weather report assembly
//!
//! Runs geocoding, history retrieval and analysis in sequence for one city.

use crate::analyzer::analyze;
use crate::config::AppConfig;
use crate::geocoder::{Geocoder, OpenMeteoGeocoder};
use crate::models::{Analysis, DailySeries};
use crate::weather::{OpenMeteoArchiveFetcher, WeatherFetcher};
use crate::{MeteoError, Result};
use serde::Serialize;
use std::sync::Arc;
use tracing::{info, instrument};

/// Everything the client needs to render one city
#[derive(Debug, Clone, Serialize)]
pub struct WeatherReport {
    /// Resolved display name
    pub city_name: String,
    /// Country name, empty when unknown
    pub country: String,
    /// Per-day rows for charting
    pub weather_data: DailySeries,
    pub analysis: Analysis,
}

/// Composes the geocoder, the fetcher and the analyzer
pub struct ReportService {
    geocoder: Arc<dyn Geocoder>,
    fetcher: Arc<dyn WeatherFetcher>,
    history_days: u32,
}

impl ReportService {
    /// Create a service from explicit collaborators
    pub fn new(
        geocoder: Arc<dyn Geocoder>,
        fetcher: Arc<dyn WeatherFetcher>,
        history_days: u32,
    ) -> Self {
        Self {
            geocoder,
            fetcher,
            history_days,
        }
    }

    /// Create a service talking to the configured `OpenMeteo` endpoints
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let geocoder = OpenMeteoGeocoder::new(config.geocoding.clone())?;
        let fetcher = OpenMeteoArchiveFetcher::new(config.archive.clone())?;
        Ok(Self::new(
            Arc::new(geocoder),
            Arc::new(fetcher),
            config.archive.history_days,
        ))
    }

    /// Build the report for `city`.
    ///
    /// A blank name fails before any outbound call; a failed lookup never
    /// reaches the fetcher.
    #[instrument(skip(self))]
    pub async fn build_report(&self, city: &str) -> Result<WeatherReport> {
        let city = city.trim();
        if city.is_empty() {
            return Err(MeteoError::validation("City name cannot be empty"));
        }

        let location = self.geocoder.resolve(city).await?;

        let series = self
            .fetcher
            .fetch(location.latitude, location.longitude, self.history_days)
            .await?;

        let analysis = analyze(&series);
        info!(
            "Analysed {} days for {}: {} by {:.1}°C",
            analysis.days_analyzed, location.name, analysis.trend, analysis.trend_value
        );

        Ok(WeatherReport {
            country: location.country_or_empty().to_string(),
            city_name: location.name,
            weather_data: series,
            analysis,
        })
    }
}

impl std::fmt::Debug for ReportService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReportService")
            .field("history_days", &self.history_days)
            .finish_non_exhaustive()
    }
}
