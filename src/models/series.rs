//! Daily weather series
//!
//! A `DailySeries` can only be built through constructors that check its
//! invariants: at least one day, dates strictly increasing, and every day
//! carrying all three metrics.

use crate::{MeteoError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One day of observations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyObservation {
    /// Calendar date in the location's timezone
    pub date: NaiveDate,
    /// Maximum temperature at 2 m, °C
    pub temp_max: f64,
    /// Minimum temperature at 2 m, °C
    pub temp_min: f64,
    /// Precipitation sum, mm
    pub precipitation: f64,
}

/// Ordered, date-unique run of daily observations
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct DailySeries {
    days: Vec<DailyObservation>,
}

impl DailySeries {
    /// Build a series from observations that are already ordered.
    pub fn new(days: Vec<DailyObservation>) -> Result<Self> {
        if days.is_empty() {
            return Err(MeteoError::misaligned("series contains no days"));
        }

        if let Some(pair) = days.windows(2).find(|pair| pair[0].date >= pair[1].date) {
            return Err(MeteoError::misaligned(format!(
                "dates are not strictly increasing: {} followed by {}",
                pair[0].date, pair[1].date
            )));
        }

        Ok(Self { days })
    }

    /// Build a series from the column layout used by the archive API.
    ///
    /// All columns must have the same length. Rows where any metric is
    /// missing are skipped; if none survive the data is treated as
    /// unavailable rather than malformed.
    pub fn from_columns(
        time: &[String],
        temp_max: &[Option<f64>],
        temp_min: &[Option<f64>],
        precipitation: &[Option<f64>],
    ) -> Result<Self> {
        let n = time.len();
        if temp_max.len() != n || temp_min.len() != n || precipitation.len() != n {
            return Err(MeteoError::misaligned(format!(
                "column lengths differ: time={}, temperature_2m_max={}, temperature_2m_min={}, precipitation_sum={}",
                n,
                temp_max.len(),
                temp_min.len(),
                precipitation.len()
            )));
        }

        let mut days = Vec::with_capacity(n);
        for (i, raw_date) in time.iter().enumerate() {
            let date = NaiveDate::parse_from_str(raw_date, "%Y-%m-%d").map_err(|e| {
                MeteoError::misaligned(format!("invalid date '{raw_date}': {e}"))
            })?;

            if let (Some(temp_max), Some(temp_min), Some(precipitation)) =
                (temp_max[i], temp_min[i], precipitation[i])
            {
                days.push(DailyObservation {
                    date,
                    temp_max,
                    temp_min,
                    precipitation,
                });
            }
        }

        if days.is_empty() {
            return Err(MeteoError::weather_unavailable(format!(
                "none of the {n} returned days has complete data"
            )));
        }

        Self::new(days)
    }

    /// All observations, oldest first
    #[must_use]
    pub fn days(&self) -> &[DailyObservation] {
        &self.days
    }

    /// Number of days in the series
    #[must_use]
    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// Always false for a constructed series
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    #[must_use]
    pub fn temps_max(&self) -> Vec<f64> {
        self.days.iter().map(|d| d.temp_max).collect()
    }

    #[must_use]
    pub fn temps_min(&self) -> Vec<f64> {
        self.days.iter().map(|d| d.temp_min).collect()
    }

    #[must_use]
    pub fn precipitation(&self) -> Vec<f64> {
        self.days.iter().map(|d| d.precipitation).collect()
    }
}
