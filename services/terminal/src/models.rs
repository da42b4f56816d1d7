//! Wire models for the HTTP surface
//!
//! The protocol carries plain `f64` values; conversion from the decimal
//! core happens here and nowhere else.

use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

use crate::market::{OrderLevel, PricePoint};

/// One row of the flat order-book read.
///
/// The flat list is bids in descending price order followed by asks in
/// ascending price order, each side best price first. Rows carry no
/// side tag; the ordering convention is the contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookEntry {
    pub price: f64,
    pub quantity: f64,
    pub total: f64,
}

impl From<&OrderLevel> for BookEntry {
    fn from(level: &OrderLevel) -> Self {
        Self {
            price: level.price.to_f64(),
            quantity: level.quantity.to_f64(),
            total: level.total.to_f64().unwrap_or_default(),
        }
    }
}

/// One `(timestamp, price)` observation on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceEntry {
    /// Unix nanoseconds.
    pub timestamp: i64,
    pub price: f64,
}

impl From<&PricePoint> for PriceEntry {
    fn from(point: &PricePoint) -> Self {
        Self {
            timestamp: point.timestamp,
            price: point.price.to_f64(),
        }
    }
}

/// Request body for a mock order submission.
#[derive(Debug, Clone, Deserialize)]
pub struct PlaceOrderRequest {
    pub price: f64,
    pub quantity: f64,
    pub is_buy: bool,
}

/// Health probe response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub service: String,
    pub version: String,
}
