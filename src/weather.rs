//! Historical weather retrieval from the `OpenMeteo` archive API

use crate::config::ArchiveConfig;
use crate::models::DailySeries;
use crate::openmeteo::{self, ArchiveResponse};
use crate::{MeteoError, Result};
use async_trait::async_trait;
use chrono::{Days, Local, NaiveDate};
use reqwest::Client;
use std::time::Instant;
use tracing::{debug, info, instrument, warn};

/// Daily metrics requested from the archive
pub const DAILY_METRICS: &str = "temperature_2m_max,temperature_2m_min,precipitation_sum";

/// Retrieves a window of daily observations for a coordinate
#[async_trait]
pub trait WeatherFetcher: Send + Sync {
    /// Fetch the `days` days up to and including today (local calendar).
    async fn fetch(&self, latitude: f64, longitude: f64, days: u32) -> Result<DailySeries>;
}

/// The `[today - days, today]` window, both ends inclusive
#[must_use]
pub fn history_window(today: NaiveDate, days: u32) -> (NaiveDate, NaiveDate) {
    let start = today
        .checked_sub_days(Days::new(days.into()))
        .unwrap_or(NaiveDate::MIN);
    (start, today)
}

/// Fetcher backed by the `OpenMeteo` archive endpoint
#[derive(Debug)]
pub struct OpenMeteoArchiveFetcher {
    client: Client,
    config: ArchiveConfig,
}

impl OpenMeteoArchiveFetcher {
    /// Create a new fetcher from its configuration
    pub fn new(config: ArchiveConfig) -> Result<Self> {
        let client = openmeteo::build_client(config.timeout_seconds)?;
        Ok(Self { client, config })
    }

    fn archive_url(&self, latitude: f64, longitude: f64, start: NaiveDate, end: NaiveDate) -> String {
        format!(
            "{}/archive?latitude={}&longitude={}&start_date={}&end_date={}&daily={}&timezone=auto",
            self.config.base_url.trim_end_matches('/'),
            latitude,
            longitude,
            start.format("%Y-%m-%d"),
            end.format("%Y-%m-%d"),
            DAILY_METRICS
        )
    }

    /// Fetch an explicit inclusive date range
    #[instrument(skip(self))]
    pub async fn fetch_range(
        &self,
        latitude: f64,
        longitude: f64,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<DailySeries> {
        info!(
            "Getting daily history for {:.4}, {:.4} from {} to {}",
            latitude, longitude, start, end
        );
        let start_time = Instant::now();

        let url = self.archive_url(latitude, longitude, start, end);
        debug!("Archive request URL: {}", url);

        let response: ArchiveResponse = openmeteo::get_json(&self.client, &url)
            .await
            .map_err(|e| MeteoError::weather_unavailable(e.to_string()))?;

        let daily = response
            .daily
            .ok_or_else(|| MeteoError::weather_unavailable("No daily data in archive response"))?;

        let series = DailySeries::from_columns(
            &daily.time,
            &daily.temperature_max,
            &daily.temperature_min,
            &daily.precipitation,
        )?;

        let skipped = daily.time.len() - series.len();
        if skipped > 0 {
            warn!("Skipped {} incomplete days in archive response", skipped);
        }

        info!(
            "Retrieved {} days in {:.3}s (timezone: {})",
            series.len(),
            start_time.elapsed().as_secs_f64(),
            response.timezone.as_deref().unwrap_or("unknown")
        );

        Ok(series)
    }
}

#[async_trait]
impl WeatherFetcher for OpenMeteoArchiveFetcher {
    async fn fetch(&self, latitude: f64, longitude: f64, days: u32) -> Result<DailySeries> {
        let (start, end) = history_window(Local::now().date_naive(), days);
        self.fetch_range(latitude, longitude, start, end).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_history_window_spans_days_plus_today() {
        let (start, end) = history_window(date(2024, 3, 15), 30);
        assert_eq!(start, date(2024, 2, 14));
        assert_eq!(end, date(2024, 3, 15));
        assert_eq!((end - start).num_days(), 30);
    }

    #[test]
    fn test_history_window_crosses_year() {
        let (start, _) = history_window(date(2024, 1, 3), 7);
        assert_eq!(start, date(2023, 12, 27));
    }

    #[test]
    fn test_archive_url() {
        let fetcher = OpenMeteoArchiveFetcher::new(ArchiveConfig::default()).unwrap();
        let url = fetcher.archive_url(55.75, 37.62, date(2024, 2, 14), date(2024, 3, 15));

        assert!(url.starts_with("https://archive-api.open-meteo.com/v1/archive?"));
        assert!(url.contains("latitude=55.75"));
        assert!(url.contains("longitude=37.62"));
        assert!(url.contains("start_date=2024-02-14"));
        assert!(url.contains("end_date=2024-03-15"));
        assert!(url.contains("daily=temperature_2m_max,temperature_2m_min,precipitation_sum"));
        assert!(url.ends_with("timezone=auto"));
    }
}
