//! `meteotrend` - historical weather lookup with a naive trend forecast
//!
//! Resolves a city name, pulls the last month of daily observations from
//! `OpenMeteo` and derives summary statistics plus a next-day estimate.

pub mod analyzer;
pub mod api;
pub mod config;
pub mod error;
pub mod geocoder;
pub mod logging;
pub mod models;
pub mod openmeteo;
pub mod report;
pub mod weather;
pub mod web;

// Re-export core types for public API
pub use analyzer::analyze;
pub use config::AppConfig;
pub use error::{ErrorKind, MeteoError};
pub use geocoder::{Geocoder, OpenMeteoGeocoder};
pub use models::{Analysis, DailyObservation, DailySeries, Location, TrendDirection};
pub use report::{ReportService, WeatherReport};
pub use weather::{OpenMeteoArchiveFetcher, WeatherFetcher};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, MeteoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
