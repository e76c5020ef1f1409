//! Data models for `meteotrend`
//!
//! - Location: a place resolved by the geocoder
//! - Series: validated daily observations
//! - Analysis: statistics derived from a series

pub mod analysis;
pub mod location;
pub mod series;

pub use analysis::{Analysis, TrendDirection};
pub use location::Location;
pub use series::{DailyObservation, DailySeries};
