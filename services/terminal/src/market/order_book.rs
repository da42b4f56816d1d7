//! In-memory aggregated order book
//!
//! Maintains one sorted level collection per side, keyed by price.
//! Uses `BTreeMap` for deterministic sorted iteration; all arithmetic
//! uses `Decimal`.
//!
//! Submitted orders only accumulate resting liquidity: an order never
//! crosses the spread or consumes opposite-side levels. That is the
//! observed product behavior, not a placeholder.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use types::errors::MarketError;
use types::numeric::{Price, Quantity};

/// A single aggregated price level on one side of the book.
///
/// `total` is always `price * quantity`; it is recomputed on every
/// mutation and never stored independently of its derivation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLevel {
    pub price: Price,
    pub quantity: Quantity,
    pub total: Decimal,
}

impl OrderLevel {
    fn new(price: Price, quantity: Quantity) -> Self {
        Self {
            price,
            quantity,
            total: price.as_decimal() * quantity.as_decimal(),
        }
    }

    /// Add quantity to this level, recomputing the notional total.
    fn accumulate(&mut self, quantity: Quantity) {
        self.quantity = Quantity::try_new(self.quantity.as_decimal() + quantity.as_decimal())
            .unwrap_or_else(Quantity::zero);
        self.total = self.price.as_decimal() * self.quantity.as_decimal();
    }

    fn is_empty(&self) -> bool {
        self.quantity.is_zero()
    }
}

/// A client-submitted order request.
///
/// Consumed to produce one book mutation; not persisted afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockOrder {
    pub price: Price,
    pub quantity: Quantity,
    pub is_buy: bool,
}

/// Aggregated two-sided order book.
///
/// Bids read out in descending price order (best bid first), asks in
/// ascending price order (best ask first).
#[derive(Debug, Clone, Default)]
pub struct OrderBook {
    /// Bid levels: price → level (BTreeMap sorts ascending, reversed on read).
    bids: BTreeMap<Decimal, OrderLevel>,
    /// Ask levels: price → level (ascending = best ask first).
    asks: BTreeMap<Decimal, OrderLevel>,
}

impl OrderBook {
    /// Create an empty book.
    pub fn new() -> Self {
        Self {
            bids: BTreeMap::new(),
            asks: BTreeMap::new(),
        }
    }

    /// Apply a mock order to the book.
    ///
    /// Validates before any state change: a zero price or zero quantity
    /// is rejected with [`MarketError::InvalidInput`] and the book is
    /// left untouched. A valid order upserts the level at its price on
    /// the selected side, summing quantities and recomputing the total.
    pub fn apply_order(&mut self, order: MockOrder) -> Result<(), MarketError> {
        if order.price.is_zero() {
            return Err(MarketError::InvalidInput(
                "order price must be positive".to_string(),
            ));
        }
        if order.quantity.is_zero() {
            return Err(MarketError::InvalidInput(
                "order quantity must be positive".to_string(),
            ));
        }

        let side = if order.is_buy {
            &mut self.bids
        } else {
            &mut self.asks
        };

        side.entry(order.price.as_decimal())
            .and_modify(|level| level.accumulate(order.quantity))
            .or_insert_with(|| OrderLevel::new(order.price, order.quantity));

        self.compress_empty_levels();
        Ok(())
    }

    /// Bid levels in descending price order (best bid first).
    pub fn bid_levels(&self) -> Vec<OrderLevel> {
        self.bids.values().rev().cloned().collect()
    }

    /// Ask levels in ascending price order (best ask first).
    pub fn ask_levels(&self) -> Vec<OrderLevel> {
        self.asks.values().cloned().collect()
    }

    /// Current best bid price.
    pub fn best_bid(&self) -> Option<Price> {
        // BTreeMap iterates ascending; highest bid is last.
        self.bids.values().next_back().map(|level| level.price)
    }

    /// Current best ask price.
    pub fn best_ask(&self) -> Option<Price> {
        self.asks.values().next().map(|level| level.price)
    }

    /// Mid-market price (average of best bid and best ask).
    pub fn mid_price(&self) -> Option<Decimal> {
        match (self.best_bid(), self.best_ask()) {
            (Some(bid), Some(ask)) => {
                Some((bid.as_decimal() + ask.as_decimal()) / Decimal::from(2))
            }
            _ => None,
        }
    }

    /// Spread between best ask and best bid.
    pub fn spread(&self) -> Option<Decimal> {
        match (self.best_bid(), self.best_ask()) {
            (Some(bid), Some(ask)) => Some(ask.as_decimal() - bid.as_decimal()),
            _ => None,
        }
    }

    /// Remove levels drained to zero quantity.
    pub fn compress_empty_levels(&mut self) {
        self.bids.retain(|_, level| !level.is_empty());
        self.asks.retain(|_, level| !level.is_empty());
    }

    /// Number of bid price levels.
    pub fn bid_depth(&self) -> usize {
        self.bids.len()
    }

    /// Number of ask price levels.
    pub fn ask_depth(&self) -> usize {
        self.asks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bids.is_empty() && self.asks.is_empty()
    }
}
