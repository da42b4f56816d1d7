//! Simulated trading terminal backend
//!
//! An in-memory market-state holder behind three remote operations:
//! read the price history, read an order-book depth snapshot, and
//! submit a mock order. Orders accumulate resting liquidity only; there
//! is no matching, persistence, or accounting.
//!
//! # Architecture
//!
//! ```text
//!           HTTP (axum)
//!               │
//!        ┌──────▼──────┐
//!        │  handlers   │  ← wire f64 ⇄ Decimal at the models boundary
//!        └──────┬──────┘
//!               │
//!      Arc<RwLock<MarketState>>   ← concurrent reads, serialized writes
//!          ┌────┴────┐
//!     PriceSeries  OrderBook
//!          ▲
//!          │ appends
//!     synthetic ticker (seeded RNG)
//! ```

pub mod config;
pub mod error;
pub mod handlers;
pub mod market;
pub mod models;
pub mod router;
pub mod state;
pub mod ticker;
