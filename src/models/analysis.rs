//! Analysis result model

use serde::{Deserialize, Serialize};
use std::fmt;

/// Direction of the temperature trend over the analysed window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrendDirection {
    /// Second half of the window is warmer
    #[serde(rename = "потепление")]
    Warming,
    /// Second half is cooler or equal
    #[serde(rename = "похолодание")]
    Cooling,
}

impl fmt::Display for TrendDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrendDirection::Warming => write!(f, "warming"),
            TrendDirection::Cooling => write!(f, "cooling"),
        }
    }
}

/// Summary statistics and next-day estimate for a daily series.
///
/// Every floating value is rounded to one decimal place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    /// Mean of daily maximum temperatures, °C
    pub avg_temp_all: f64,
    /// Highest daily maximum, °C
    pub max_temp: f64,
    /// Lowest daily minimum, °C
    pub min_temp: f64,
    pub trend: TrendDirection,
    /// Absolute difference between half-window means of the maximum, °C
    pub trend_value: f64,
    pub forecast_tomorrow_max: f64,
    pub forecast_tomorrow_min: f64,
    pub forecast_tomorrow_avg: f64,
    /// Expected precipitation for tomorrow, mm
    pub forecast_precipitation: f64,
    /// Days with any precipitation
    pub rainy_days: usize,
    /// Precipitation over the whole window, mm
    pub total_precipitation: f64,
    pub days_analyzed: usize,
}
