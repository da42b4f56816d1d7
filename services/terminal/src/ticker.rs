//! Synthetic price tick generator
//!
//! A background task that appends a random-walk price observation on a
//! fixed interval, driven by a deterministic seeded RNG so a given seed
//! replays the same walk. Each step moves the last observed price by up
//! to ±50 basis points and clamps at zero.

use std::time::Duration;

use chrono::Utc;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rust_decimal::Decimal;
use types::numeric::Price;

use crate::market::PricePoint;
use crate::state::AppState;

/// Maximum per-tick move, in basis points.
const MAX_STEP_BPS: i64 = 50;

/// Current Unix time in nanoseconds. Falls back to 0 outside the
/// nanosecond-representable range (year 2262), where the series would
/// reject the point as out of order.
pub fn now_nanos() -> i64 {
    Utc::now().timestamp_nanos_opt().unwrap_or_default()
}

/// Run the tick loop forever.
///
/// `fallback_price` anchors the walk when the series is empty and the
/// book has no mid price to derive a starting point from.
pub async fn run(state: AppState, interval: Duration, seed: u64, fallback_price: Decimal) {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut ticker = tokio::time::interval(interval);
    // The first tick fires immediately; skip it so the seeded initial
    // price stands alone for at least one interval.
    ticker.tick().await;

    tracing::info!(?interval, seed, "synthetic ticker started");

    loop {
        ticker.tick().await;

        let last = {
            let market = state.market.read().await;
            market
                .last_price()
                .map(|point| point.price.as_decimal())
                .or_else(|| market.mid_price())
        }
        .unwrap_or(fallback_price);

        let next = step(&mut rng, last);
        let point = PricePoint {
            timestamp: now_nanos(),
            price: Price::try_new(next).unwrap_or_else(Price::zero),
        };

        let appended = {
            let mut market = state.market.write().await;
            market.append_price(point)
        };

        match appended {
            Ok(()) => tracing::debug!(price = %point.price, "synthetic tick appended"),
            Err(err) => tracing::warn!(%err, "synthetic tick rejected"),
        }
    }
}

/// One random-walk step from `last`, clamped at zero.
fn step<R: Rng>(rng: &mut R, last: Decimal) -> Decimal {
    let bps = rng.gen_range(-MAX_STEP_BPS..=MAX_STEP_BPS);
    let next = last + last * Decimal::new(bps, 4);
    if next < Decimal::ZERO {
        Decimal::ZERO
    } else {
        next.round_dp(4)
    }
}
