//! Location Resolution Module
//!
//! Resolves a free-text place name into a `Location` via the `OpenMeteo`
//! geocoding API, keeping only the single best match.

use crate::config::GeocodingConfig;
use crate::models::Location;
use crate::openmeteo::{self, GeocodingResponse};
use crate::{MeteoError, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Instant;
use tracing::{debug, info, instrument, warn};

/// Turns a place name into coordinates
#[async_trait]
pub trait Geocoder: Send + Sync {
    /// Resolve `query` to its best match.
    ///
    /// Returns `LocationNotFound` when nothing matched and
    /// `GeocoderUnreachable` when the service could not answer.
    async fn resolve(&self, query: &str) -> Result<Location>;
}

/// Geocoder backed by the `OpenMeteo` search endpoint
#[derive(Debug)]
pub struct OpenMeteoGeocoder {
    client: Client,
    config: GeocodingConfig,
}

impl OpenMeteoGeocoder {
    /// Create a new geocoder from its configuration
    pub fn new(config: GeocodingConfig) -> Result<Self> {
        let client = openmeteo::build_client(config.timeout_seconds)?;
        Ok(Self { client, config })
    }

    fn search_url(&self, query: &str) -> String {
        format!(
            "{}/search?name={}&count=1&language={}&format=json",
            self.config.base_url.trim_end_matches('/'),
            urlencoding::encode(query),
            urlencoding::encode(&self.config.language)
        )
    }
}

#[async_trait]
impl Geocoder for OpenMeteoGeocoder {
    #[instrument(skip(self))]
    async fn resolve(&self, query: &str) -> Result<Location> {
        info!("Geocoding location: '{}'", query);
        let start_time = Instant::now();

        let url = self.search_url(query);
        debug!("Geocoding request URL: {}", url);

        let response: GeocodingResponse = openmeteo::get_json(&self.client, &url)
            .await
            .map_err(|e| {
                warn!("Geocoding request for '{}' failed: {}", query, e);
                MeteoError::geocoder_unreachable(query, e.to_string())
            })?;

        let Some(best) = response.results.unwrap_or_default().into_iter().next() else {
            warn!("No results found for location '{}'", query);
            return Err(MeteoError::location_not_found(query));
        };

        let location = Location::from(best);
        info!(
            "Found location: {} ({}) in {:.3}s",
            location.name,
            location.format_coordinates(),
            start_time.elapsed().as_secs_f64()
        );

        Ok(location)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn geocoder(base_url: &str) -> OpenMeteoGeocoder {
        OpenMeteoGeocoder::new(GeocodingConfig {
            base_url: base_url.to_string(),
            ..GeocodingConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn test_search_url_encodes_query() {
        let url = geocoder("https://geocoding-api.open-meteo.com/v1/").search_url("Нижний Новгород");
        assert!(url.starts_with("https://geocoding-api.open-meteo.com/v1/search?name="));
        assert!(url.contains("%D0%9D"));
        assert!(!url.contains(' '));
        assert!(url.contains("count=1"));
        assert!(url.contains("language=ru"));
        assert!(url.ends_with("format=json"));
    }

    #[test]
    fn test_search_url_uses_configured_language() {
        let geocoder = OpenMeteoGeocoder::new(GeocodingConfig {
            language: "en".to_string(),
            ..GeocodingConfig::default()
        })
        .unwrap();
        assert!(geocoder.search_url("Paris").contains("language=en"));
    }
}
