//! Location model for resolved places

use serde::{Deserialize, Serialize};

/// A place resolved by the geocoder
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Location {
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
    /// Display name in the requested language
    pub name: String,
    /// Country, when the geocoder knows it
    pub country: Option<String>,
}

impl Location {
    /// Create a new location
    #[must_use]
    pub fn new(latitude: f64, longitude: f64, name: String) -> Self {
        Self {
            latitude,
            longitude,
            name,
            country: None,
        }
    }

    /// Create location with country
    #[must_use]
    pub fn with_country(latitude: f64, longitude: f64, name: String, country: String) -> Self {
        Self {
            latitude,
            longitude,
            name,
            country: Some(country),
        }
    }

    /// Country for display; empty when unknown
    #[must_use]
    pub fn country_or_empty(&self) -> &str {
        self.country.as_deref().unwrap_or_default()
    }

    /// Format location as coordinates string
    #[must_use]
    pub fn format_coordinates(&self) -> String {
        format!("{:.4}, {:.4}", self.latitude, self.longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_country_or_empty() {
        let bare = Location::new(55.7522, 37.6156, "Москва".to_string());
        assert_eq!(bare.country_or_empty(), "");

        let full = Location::with_country(
            55.7522,
            37.6156,
            "Москва".to_string(),
            "Россия".to_string(),
        );
        assert_eq!(full.country_or_empty(), "Россия");
    }

    #[test]
    fn test_format_coordinates() {
        let location = Location::new(46.818_234, 8.227_456, "Test".to_string());
        assert_eq!(location.format_coordinates(), "46.8182, 8.2275");
    }
}
