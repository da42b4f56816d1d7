//! Market core: price history, order book, and their single owner.

pub mod order_book;
pub mod price_series;
pub mod state;

pub use order_book::{MockOrder, OrderBook, OrderLevel};
pub use price_series::{PricePoint, PriceSeries};
pub use state::{MarketState, SeedParams};
