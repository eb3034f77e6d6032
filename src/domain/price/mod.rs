//! Price domain — current quotes and historical series.

pub mod wire;

#[cfg(feature = "http")]
pub mod client;

use chrono::{DateTime, Local};
use rust_decimal::Decimal;
use serde::Serialize;

/// One sample of the historical price series.
///
/// Samples keep the provider's order and are never re-sorted; the timestamp
/// is local wall-clock time for direct display on the chart's time axis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PricePoint {
    pub time: DateTime<Local>,
    pub price: Decimal,
}
