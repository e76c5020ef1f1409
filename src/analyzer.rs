//! Trend analysis over a daily series
//!
//! Produces descriptive statistics over the whole window plus a next-day
//! estimate. The estimate is momentum extrapolation: the average of the last
//! week nudged by a fraction of the half-window trend. It is not a weather
//! model and makes no attempt at accuracy beyond that.

use crate::models::{Analysis, DailySeries, TrendDirection};

/// Days at the end of the window used for the next-day estimate
pub const FORECAST_WINDOW_DAYS: usize = 7;

/// Share of the trend magnitude carried into the estimate
pub const MOMENTUM_FACTOR: f64 = 0.3;

/// Analyse a series. Pure and infallible for any constructed series.
#[must_use]
pub fn analyze(series: &DailySeries) -> Analysis {
    let temps_max = series.temps_max();
    let temps_min = series.temps_min();
    let precipitation = series.precipitation();

    let avg_temp_all = mean(&temps_max).unwrap_or_default();
    let max_temp = temps_max.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let min_temp = temps_min.iter().copied().fold(f64::INFINITY, f64::min);

    let half = temps_max.len() / 2;
    let (first_max, second_max) = half_means(&temps_max, half);
    let (first_min, second_min) = half_means(&temps_min, half);

    // ties go to cooling
    let (trend, trend_max, trend_min) = if second_max > first_max {
        (
            TrendDirection::Warming,
            second_max - first_max,
            second_min - first_min,
        )
    } else {
        (
            TrendDirection::Cooling,
            first_max - second_max,
            first_min - second_min,
        )
    };

    let forecast_max = mean(last_week(&temps_max)).unwrap_or_default() + MOMENTUM_FACTOR * trend_max;
    let forecast_min = mean(last_week(&temps_min)).unwrap_or_default() + MOMENTUM_FACTOR * trend_min;
    let forecast_avg = (forecast_max + forecast_min) / 2.0;

    let forecast_precipitation = mean(last_week(&precipitation)).unwrap_or(0.0).max(0.0);

    let rainy_days = precipitation.iter().filter(|&&p| p > 0.0).count();
    let total_precipitation: f64 = precipitation.iter().sum();

    Analysis {
        avg_temp_all: round1(avg_temp_all),
        max_temp: round1(max_temp),
        min_temp: round1(min_temp),
        trend,
        trend_value: round1(trend_max),
        forecast_tomorrow_max: round1(forecast_max),
        forecast_tomorrow_min: round1(forecast_min),
        forecast_tomorrow_avg: round1(forecast_avg),
        forecast_precipitation: round1(forecast_precipitation),
        rainy_days,
        total_precipitation: round1(total_precipitation),
        days_analyzed: series.len(),
    }
}

/// Round to one decimal place, halves away from zero.
#[must_use]
pub fn round1(value: f64) -> f64 {
    // adding 0.0 turns -0.0 into 0.0
    (value * 10.0).round() / 10.0 + 0.0
}

fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}

/// Means of `[0, half)` and `[half, n)`. An empty first half takes the
/// second half's mean so a one-day series has zero trend.
fn half_means(values: &[f64], half: usize) -> (f64, f64) {
    let (first, second) = values.split_at(half);
    let second_mean = mean(second).unwrap_or_default();
    let first_mean = mean(first).unwrap_or(second_mean);
    (first_mean, second_mean)
}

fn last_week(values: &[f64]) -> &[f64] {
    &values[values.len().saturating_sub(FORECAST_WINDOW_DAYS)..]
}
