//! Authoritative market state
//!
//! Single owner of the price series and the order book. All reads hand
//! out owned snapshots; all mutations validate before touching state, so
//! a rejected call is all-or-nothing.
//!
//! `MarketState` itself is not synchronized; the service wraps one
//! instance in an `Arc<RwLock>` so reads run concurrently and writes are
//! serialized (see `state::AppState`).

use rust_decimal::Decimal;
use types::errors::MarketError;
use types::numeric::{Price, Quantity};

use super::order_book::{MockOrder, OrderBook, OrderLevel};
use super::price_series::{PricePoint, PriceSeries};

/// Parameters for seeding a fresh market at startup.
///
/// Produces a book shaped like the terminal's stock mockup: `levels`
/// bids below the initial price and `levels` asks above it, one tick
/// apart, all carrying the same quantity, plus one initial price point.
#[derive(Debug, Clone)]
pub struct SeedParams {
    pub initial_price: Decimal,
    pub tick: Decimal,
    pub levels_per_side: u32,
    pub level_quantity: Decimal,
    pub timestamp: i64,
}

/// In-memory market state: one price series, one order book.
#[derive(Debug, Clone, Default)]
pub struct MarketState {
    series: PriceSeries,
    book: OrderBook,
}

impl MarketState {
    /// Create an empty, uninitialized market.
    pub fn new() -> Self {
        Self {
            series: PriceSeries::new(),
            book: OrderBook::new(),
        }
    }

    /// Create a market pre-populated with synthetic depth and an initial
    /// price observation.
    pub fn seeded(params: &SeedParams) -> Result<Self, MarketError> {
        let mut market = Self::new();

        if params.initial_price <= Decimal::ZERO {
            return Err(MarketError::InvalidInput(
                "seed price must be positive".to_string(),
            ));
        }

        for i in 1..=params.levels_per_side {
            let offset = params.tick * Decimal::from(i);
            let bid = params.initial_price - offset;
            if bid > Decimal::ZERO {
                market.place_mock_order(bid, params.level_quantity, true)?;
            }
            market.place_mock_order(params.initial_price + offset, params.level_quantity, false)?;
        }

        market.append_price(PricePoint {
            timestamp: params.timestamp,
            price: Price::try_new(params.initial_price).ok_or_else(|| {
                MarketError::InvalidInput("seed price must be non-negative".to_string())
            })?,
        })?;

        Ok(market)
    }

    /// Ordered copy of the full price history. Empty when uninitialized.
    pub fn price_data(&self) -> Vec<PricePoint> {
        self.series.snapshot()
    }

    /// Flat order-book snapshot.
    ///
    /// Fixed read convention: bid levels in descending price order
    /// first, then ask levels in ascending price order (each side best
    /// price first). Empty when uninitialized.
    pub fn order_book(&self) -> Vec<OrderLevel> {
        let mut levels = self.book.bid_levels();
        levels.extend(self.book.ask_levels());
        levels
    }

    /// Validate and apply a mock order.
    ///
    /// Raw decimals are taken here so every rejection path, including
    /// negative inputs, is decided before any state changes.
    pub fn place_mock_order(
        &mut self,
        price: Decimal,
        quantity: Decimal,
        is_buy: bool,
    ) -> Result<(), MarketError> {
        let price = Price::try_new(price)
            .ok_or_else(|| MarketError::InvalidInput("order price must be positive".to_string()))?;
        let quantity = Quantity::try_new(quantity).ok_or_else(|| {
            MarketError::InvalidInput("order quantity must be positive".to_string())
        })?;

        self.book.apply_order(MockOrder {
            price,
            quantity,
            is_buy,
        })
    }

    /// Append a price observation to the series.
    pub fn append_price(&mut self, point: PricePoint) -> Result<(), MarketError> {
        self.series.append(point)
    }

    /// The most recent price observation, if any.
    pub fn last_price(&self) -> Option<PricePoint> {
        self.series.last()
    }

    /// Mid-market price derived from the book, if both sides are present.
    pub fn mid_price(&self) -> Option<Decimal> {
        self.book.mid_price()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_uninitialized_reads_are_empty() {
        let market = MarketState::new();
        assert!(market.price_data().is_empty());
        assert!(market.order_book().is_empty());
    }

    #[test]
    fn test_end_to_end_from_empty() {
        let mut market = MarketState::new();

        market
            .append_price(PricePoint {
                timestamp: 1,
                price: Price::try_new(dec("3.65")).unwrap(),
            })
            .unwrap();
        let prices = market.price_data();
        assert_eq!(prices.len(), 1);
        assert_eq!(prices[0].timestamp, 1);
        assert_eq!(prices[0].price.as_decimal(), dec("3.65"));

        market.place_mock_order(dec("3.62"), dec("1000"), true).unwrap();
        let book = market.order_book();
        assert_eq!(book.len(), 1);
        assert_eq!(book[0].price.as_decimal(), dec("3.62"));
        assert_eq!(book[0].quantity.as_decimal(), dec("1000"));
        assert_eq!(book[0].total, dec("3620.00"));
    }

    #[test]
    fn test_flat_snapshot_bids_then_asks() {
        let mut market = MarketState::new();
        market.place_mock_order(dec("3.58"), dec("10"), true).unwrap();
        market.place_mock_order(dec("3.60"), dec("10"), true).unwrap();
        market.place_mock_order(dec("3.64"), dec("10"), false).unwrap();
        market.place_mock_order(dec("3.62"), dec("10"), false).unwrap();

        let prices: Vec<Decimal> = market
            .order_book()
            .iter()
            .map(|l| l.price.as_decimal())
            .collect();
        // Bids descending, then asks ascending.
        assert_eq!(
            prices,
            vec![dec("3.60"), dec("3.58"), dec("3.62"), dec("3.64")]
        );
    }

    #[test]
    fn test_invalid_order_rejected_without_mutation() {
        let mut market = MarketState::new();
        market.place_mock_order(dec("3.55"), dec("100"), true).unwrap();

        assert!(market.place_mock_order(dec("-1"), dec("100"), true).is_err());
        assert!(market.place_mock_order(dec("3.55"), dec("-5"), true).is_err());
        assert!(market.place_mock_order(dec("0"), dec("100"), true).is_err());
        assert!(market.place_mock_order(dec("3.55"), dec("0"), true).is_err());

        let book = market.order_book();
        assert_eq!(book.len(), 1);
        assert_eq!(book[0].quantity.as_decimal(), dec("100"));
    }

    #[test]
    fn test_seeded_market_shape() {
        let params = SeedParams {
            initial_price: dec("3.59"),
            tick: dec("0.01"),
            levels_per_side: 4,
            level_quantity: dec("1000"),
            timestamp: 100,
        };
        let market = MarketState::seeded(&params).unwrap();

        let book = market.order_book();
        assert_eq!(book.len(), 8);
        // Best bid one tick below, best ask one tick above the seed price.
        assert_eq!(book[0].price.as_decimal(), dec("3.58"));
        assert_eq!(book[4].price.as_decimal(), dec("3.60"));
        assert!(book.iter().all(|l| l.quantity.as_decimal() == dec("1000")));

        assert_eq!(market.last_price().unwrap().price.as_decimal(), dec("3.59"));
        assert_eq!(market.mid_price().unwrap(), dec("3.59"));
    }

    #[test]
    fn test_seeded_rejects_non_positive_price() {
        let params = SeedParams {
            initial_price: dec("0"),
            tick: dec("0.01"),
            levels_per_side: 2,
            level_quantity: dec("10"),
            timestamp: 0,
        };
        assert!(MarketState::seeded(&params).is_err());
    }
}
