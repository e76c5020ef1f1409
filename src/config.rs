//! Configuration management for `meteotrend`
//!
//! Handles loading configuration from files and environment variables and
//! validates the result before any client is built from it.

use crate::MeteoError;
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,
    /// Geocoding API settings
    #[serde(default)]
    pub geocoding: GeocodingConfig,
    /// Historical weather API settings
    #[serde(default)]
    pub archive: ArchiveConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Address to bind to
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,
    /// Directory with static assets served as fallback (optional)
    #[serde(default)]
    pub static_dir: Option<String>,
    /// Upper bound for handling one request, in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout_seconds: u32,
}

/// Geocoding API settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeocodingConfig {
    /// Base URL for the geocoding API
    #[serde(default = "default_geocoding_base_url")]
    pub base_url: String,
    /// Language of the resolved place names
    #[serde(default = "default_language")]
    pub language: String,
    /// Request timeout in seconds
    #[serde(default = "default_call_timeout")]
    pub timeout_seconds: u32,
}

/// Historical weather API settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArchiveConfig {
    /// Base URL for the archive API
    #[serde(default = "default_archive_base_url")]
    pub base_url: String,
    /// Number of days to look back from today
    #[serde(default = "default_history_days")]
    pub history_days: u32,
    /// Request timeout in seconds
    #[serde(default = "default_call_timeout")]
    pub timeout_seconds: u32,
}

/// Logging configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log format (pretty or json)
    #[serde(default = "default_log_format")]
    pub format: String,
}

// Default value functions
fn default_bind_address() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_request_timeout() -> u32 {
    30
}

fn default_geocoding_base_url() -> String {
    "https://geocoding-api.open-meteo.com/v1".to_string()
}

fn default_language() -> String {
    "ru".to_string()
}

fn default_call_timeout() -> u32 {
    10
}

fn default_archive_base_url() -> String {
    "https://archive-api.open-meteo.com/v1".to_string()
}

fn default_history_days() -> u32 {
    30
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
            port: default_port(),
            static_dir: None,
            request_timeout_seconds: default_request_timeout(),
        }
    }
}

impl Default for GeocodingConfig {
    fn default() -> Self {
        Self {
            base_url: default_geocoding_base_url(),
            language: default_language(),
            timeout_seconds: default_call_timeout(),
        }
    }
}

impl Default for ArchiveConfig {
    fn default() -> Self {
        Self {
            base_url: default_archive_base_url(),
            history_days: default_history_days(),
            timeout_seconds: default_call_timeout(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl AppConfig {
    /// Load configuration from `config_path`, or the default file location
    /// when none is given, with environment overrides on top
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let mut builder = Config::builder();

        let config_file = config_path.unwrap_or_else(|| {
            Self::get_config_path()
                .filter(|path| path.exists())
                .unwrap_or_else(|| PathBuf::from("config.toml"))
        });

        if config_file.exists() {
            builder = builder.add_source(
                File::from(config_file.clone())
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        // METEOTREND_ARCHIVE__HISTORY_DAYS=14 and friends
        builder = builder.add_source(
            Environment::with_prefix("METEOTREND")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let mut config: AppConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        config.apply_defaults();
        config.validate()?;

        Ok(config)
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("meteotrend").join("config.toml"))
    }

    /// Replace empty or zero values with defaults
    pub fn apply_defaults(&mut self) {
        if self.server.bind_address.is_empty() {
            self.server.bind_address = default_bind_address();
        }
        if self.server.request_timeout_seconds == 0 {
            self.server.request_timeout_seconds = default_request_timeout();
        }
        if self.geocoding.base_url.is_empty() {
            self.geocoding.base_url = default_geocoding_base_url();
        }
        if self.geocoding.language.is_empty() {
            self.geocoding.language = default_language();
        }
        if self.geocoding.timeout_seconds == 0 {
            self.geocoding.timeout_seconds = default_call_timeout();
        }
        if self.archive.base_url.is_empty() {
            self.archive.base_url = default_archive_base_url();
        }
        if self.archive.history_days == 0 {
            self.archive.history_days = default_history_days();
        }
        if self.archive.timeout_seconds == 0 {
            self.archive.timeout_seconds = default_call_timeout();
        }
        if self.logging.level.is_empty() {
            self.logging.level = default_log_level();
        }
        if self.logging.format.is_empty() {
            self.logging.format = default_log_format();
        }
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        self.validate_numeric_ranges()?;
        self.validate_string_values()?;
        Ok(())
    }

    fn validate_numeric_ranges(&self) -> Result<()> {
        if self.geocoding.timeout_seconds > 300 || self.archive.timeout_seconds > 300 {
            return Err(MeteoError::config("API timeout cannot exceed 300 seconds").into());
        }

        if self.server.request_timeout_seconds > 600 {
            return Err(MeteoError::config("Request timeout cannot exceed 600 seconds").into());
        }

        if self.archive.history_days > 366 {
            return Err(MeteoError::config("History window cannot exceed 366 days").into());
        }

        Ok(())
    }

    fn validate_string_values(&self) -> Result<()> {
        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(MeteoError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            ))
            .into());
        }

        let valid_log_formats = ["pretty", "json"];
        if !valid_log_formats.contains(&self.logging.format.as_str()) {
            return Err(MeteoError::config(format!(
                "Invalid log format '{}'. Must be one of: {}",
                self.logging.format,
                valid_log_formats.join(", ")
            ))
            .into());
        }

        for (name, url) in [
            ("Geocoding", &self.geocoding.base_url),
            ("Archive", &self.archive.base_url),
        ] {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(MeteoError::config(format!(
                    "{name} API base URL must be a valid HTTP or HTTPS URL"
                ))
                .into());
            }
        }

        Ok(())
    }
}
