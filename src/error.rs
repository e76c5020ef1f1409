//! Error types and handling for the `meteotrend` service

use thiserror::Error;

/// Main error type for the `meteotrend` service
#[derive(Error, Debug)]
pub enum MeteoError {
    /// Input validation errors (blank city name and similar)
    #[error("Invalid input: {message}")]
    Validation { message: String },

    /// The geocoder answered but had no match for the query
    #[error("Location not found: {query}")]
    LocationNotFound { query: String },

    /// The geocoder could not be reached or answered garbage
    #[error("Geocoding failed for '{query}': {message}")]
    GeocoderUnreachable { query: String, message: String },

    /// Weather archive transport failure or unexpected response shape
    #[error("Weather data unavailable: {message}")]
    WeatherUnavailable { message: String },

    /// Daily columns from the archive cannot form a valid series
    #[error("Malformed daily series: {message}")]
    MisalignedSeries { message: String },

    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

/// How an error surfaces to the caller of the public API
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The request itself was unusable
    Input,
    /// The requested place could not be resolved
    NotFound,
    /// Something on our side or upstream failed
    Server,
}

impl MeteoError {
    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a new location-not-found error
    pub fn location_not_found<S: Into<String>>(query: S) -> Self {
        Self::LocationNotFound {
            query: query.into(),
        }
    }

    /// Create a new geocoder transport error
    pub fn geocoder_unreachable<Q: Into<String>, S: Into<String>>(query: Q, message: S) -> Self {
        Self::GeocoderUnreachable {
            query: query.into(),
            message: message.into(),
        }
    }

    /// Create a new weather-unavailable error
    pub fn weather_unavailable<S: Into<String>>(message: S) -> Self {
        Self::WeatherUnavailable {
            message: message.into(),
        }
    }

    /// Create a new misaligned-series error
    pub fn misaligned<S: Into<String>>(message: S) -> Self {
        Self::MisalignedSeries {
            message: message.into(),
        }
    }

    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Classify the error for the API boundary.
    ///
    /// Both geocoding failure modes collapse into `NotFound`.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            MeteoError::Validation { .. } => ErrorKind::Input,
            MeteoError::LocationNotFound { .. } | MeteoError::GeocoderUnreachable { .. } => {
                ErrorKind::NotFound
            }
            MeteoError::WeatherUnavailable { .. }
            | MeteoError::MisalignedSeries { .. }
            | MeteoError::Config { .. }
            | MeteoError::Io { .. } => ErrorKind::Server,
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            MeteoError::Validation { .. } => "Введите название города".to_string(),
            MeteoError::LocationNotFound { query }
            | MeteoError::GeocoderUnreachable { query, .. } => {
                format!("Город \"{query}\" не найден")
            }
            MeteoError::WeatherUnavailable { .. } | MeteoError::MisalignedSeries { .. } => {
                "Не удалось получить данные о погоде".to_string()
            }
            MeteoError::Config { .. } | MeteoError::Io { .. } => {
                "Внутренняя ошибка сервера".to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = MeteoError::validation("city is blank");
        assert!(matches!(err, MeteoError::Validation { .. }));

        let err = MeteoError::location_not_found("Atlantis");
        assert!(matches!(err, MeteoError::LocationNotFound { .. }));

        let err = MeteoError::geocoder_unreachable("Paris", "connection refused");
        assert!(matches!(err, MeteoError::GeocoderUnreachable { .. }));

        let err = MeteoError::weather_unavailable("no daily block");
        assert!(matches!(err, MeteoError::WeatherUnavailable { .. }));
    }

    #[test]
    fn test_geocoding_failures_share_external_surface() {
        let missing = MeteoError::location_not_found("Atlantis");
        let offline = MeteoError::geocoder_unreachable("Atlantis", "timeout");

        assert_eq!(missing.kind(), ErrorKind::NotFound);
        assert_eq!(offline.kind(), ErrorKind::NotFound);
        assert_eq!(missing.user_message(), offline.user_message());
        assert_ne!(missing.to_string(), offline.to_string());
    }

    #[test]
    fn test_kinds() {
        assert_eq!(MeteoError::validation("x").kind(), ErrorKind::Input);
        assert_eq!(MeteoError::weather_unavailable("x").kind(), ErrorKind::Server);
        assert_eq!(MeteoError::misaligned("x").kind(), ErrorKind::Server);
        assert_eq!(MeteoError::config("x").kind(), ErrorKind::Server);
    }

    #[test]
    fn test_user_messages() {
        assert_eq!(
            MeteoError::validation("blank").user_message(),
            "Введите название города"
        );
        assert!(MeteoError::location_not_found("Atlantis")
            .user_message()
            .contains("Atlantis"));
        assert_eq!(
            MeteoError::misaligned("lengths differ").user_message(),
            MeteoError::weather_unavailable("timeout").user_message()
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: MeteoError = io_err.into();
        assert!(matches!(err, MeteoError::Io { .. }));
        assert_eq!(err.kind(), ErrorKind::Server);
    }
}
