//! `OpenMeteo` API response structures and the shared request helper

use crate::models::Location;
use crate::{MeteoError, Result};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::{debug, warn};

const USER_AGENT: &str = concat!("meteotrend/", env!("CARGO_PKG_VERSION"));

/// Failure modes of a single GET against an `OpenMeteo` endpoint
#[derive(Debug, Error)]
pub enum RequestError {
    /// Connection, TLS or timeout failure
    #[error("request failed: {0}")]
    Transport(String),

    /// The server answered with a non-success status
    #[error("unexpected HTTP status {0}")]
    Status(StatusCode),

    /// The body was not the JSON we expected
    #[error("invalid response body: {0}")]
    Decode(String),
}

/// Build an HTTP client with the given per-call timeout
pub fn build_client(timeout_seconds: u32) -> Result<Client> {
    Client::builder()
        .timeout(Duration::from_secs(timeout_seconds.into()))
        .user_agent(USER_AGENT)
        .build()
        .map_err(|e| MeteoError::config(format!("Failed to create HTTP client: {e}")))
}

/// GET `url` and decode the JSON body. No retries.
pub async fn get_json<T: DeserializeOwned>(
    client: &Client,
    url: &str,
) -> std::result::Result<T, RequestError> {
    let start_time = Instant::now();

    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| RequestError::Transport(e.to_string()))?;

    let status = response.status();
    debug!(
        "HTTP response received: {} in {:.3}s",
        status,
        start_time.elapsed().as_secs_f64()
    );

    if !status.is_success() {
        warn!("OpenMeteo request failed with status {}", status);
        return Err(RequestError::Status(status));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| RequestError::Decode(e.to_string()))
}

/// Geocoding response from `OpenMeteo`
#[derive(Debug, Deserialize)]
pub struct GeocodingResponse {
    /// Absent entirely when nothing matched
    pub results: Option<Vec<GeocodingResult>>,
}

#[derive(Debug, Deserialize)]
pub struct GeocodingResult {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub country: Option<String>,
}

impl From<GeocodingResult> for Location {
    fn from(result: GeocodingResult) -> Self {
        match result.country {
            Some(country) => {
                Location::with_country(result.latitude, result.longitude, result.name, country)
            }
            None => Location::new(result.latitude, result.longitude, result.name),
        }
    }
}

/// Historical weather response from the archive API
#[derive(Debug, Deserialize)]
pub struct ArchiveResponse {
    pub timezone: Option<String>,
    pub daily: Option<DailyData>,
}

/// Daily columns; the archive reports `null` for days it has not ingested yet
#[derive(Debug, Deserialize)]
pub struct DailyData {
    pub time: Vec<String>,
    #[serde(rename = "temperature_2m_max")]
    pub temperature_max: Vec<Option<f64>>,
    #[serde(rename = "temperature_2m_min")]
    pub temperature_min: Vec<Option<f64>>,
    #[serde(rename = "precipitation_sum")]
    pub precipitation: Vec<Option<f64>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geocoding_result_to_location() {
        let json = r#"{
            "results": [{
                "id": 524901,
                "name": "Москва",
                "latitude": 55.75222,
                "longitude": 37.61556,
                "country_code": "RU",
                "country": "Россия",
                "admin1": "Москва",
                "timezone": "Europe/Moscow"
            }],
            "generationtime_ms": 0.8
        }"#;

        let response: GeocodingResponse = serde_json::from_str(json).unwrap();
        let result = response.results.unwrap().into_iter().next().unwrap();
        let location: Location = result.into();
        assert_eq!(location.name, "Москва");
        assert_eq!(location.latitude, 55.75222);
        assert_eq!(location.country.as_deref(), Some("Россия"));
    }

    #[test]
    fn test_geocoding_without_results_field() {
        let response: GeocodingResponse =
            serde_json::from_str(r#"{"generationtime_ms": 0.3}"#).unwrap();
        assert!(response.results.is_none());
    }

    #[test]
    fn test_geocoding_result_without_country() {
        let result: GeocodingResult = serde_json::from_str(
            r#"{"name": "Nowhere", "latitude": 1.0, "longitude": 2.0}"#,
        )
        .unwrap();
        let location: Location = result.into();
        assert!(location.country.is_none());
    }

    #[test]
    fn test_archive_response_with_nulls() {
        let json = r#"{
            "latitude": 55.75,
            "longitude": 37.625,
            "timezone": "Europe/Moscow",
            "daily": {
                "time": ["2024-05-01", "2024-05-02"],
                "temperature_2m_max": [14.2, null],
                "temperature_2m_min": [5.1, null],
                "precipitation_sum": [0.0, null]
            }
        }"#;

        let response: ArchiveResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.timezone.as_deref(), Some("Europe/Moscow"));
        let daily = response.daily.unwrap();
        assert_eq!(daily.time.len(), 2);
        assert_eq!(daily.temperature_max, vec![Some(14.2), None]);
    }

    #[test]
    fn test_archive_response_without_daily() {
        let response: ArchiveResponse =
            serde_json::from_str(r#"{"error": true, "reason": "Parameter 'latitude' is out of range"}"#)
                .unwrap();
        assert!(response.daily.is_none());
    }

    #[test]
    fn test_build_client() {
        assert!(build_client(5).is_ok());
    }
}
