//! Append-only synthetic price history
//!
//! Holds the time-ordered sequence of price observations the chart is
//! drawn from. Timestamps are Unix nanoseconds and must be non-decreasing;
//! duplicates are appended as-is. Points are never deleted.

use serde::{Deserialize, Serialize};
use types::errors::MarketError;
use types::numeric::Price;

/// A single `(timestamp, price)` observation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricePoint {
    /// Unix nanoseconds.
    pub timestamp: i64,
    pub price: Price,
}

/// Append-only, time-ordered price series.
///
/// The series only ever grows; there is no retention policy.
#[derive(Debug, Clone, Default)]
pub struct PriceSeries {
    points: Vec<PricePoint>,
}

impl PriceSeries {
    /// Create an empty series.
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    /// Append a price observation.
    ///
    /// Rejects a timestamp strictly earlier than the last recorded one
    /// with [`MarketError::OutOfOrder`]; a rejected append leaves the
    /// series unchanged. `Price` is non-negative by construction, so no
    /// further price validation is needed here.
    pub fn append(&mut self, point: PricePoint) -> Result<(), MarketError> {
        if let Some(last) = self.points.last() {
            if point.timestamp < last.timestamp {
                return Err(MarketError::OutOfOrder {
                    timestamp: point.timestamp,
                    last: last.timestamp,
                });
            }
        }
        self.points.push(point);
        Ok(())
    }

    /// Full ordered copy of the series.
    pub fn snapshot(&self) -> Vec<PricePoint> {
        self.points.clone()
    }

    /// The most recent observation, if any.
    pub fn last(&self) -> Option<PricePoint> {
        self.points.last().copied()
    }

    /// Number of recorded observations.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
