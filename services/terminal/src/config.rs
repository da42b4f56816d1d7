//! Environment-driven service configuration
//!
//! Every knob has a default so the service runs with no environment at
//! all; anything set must parse or startup fails.

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::{Context, Result};
use rust_decimal::Decimal;

/// Runtime configuration for the terminal service.
#[derive(Debug, Clone)]
pub struct Config {
    /// Socket the HTTP server binds to.
    pub bind: SocketAddr,
    /// Interval between synthetic price ticks.
    pub tick_interval: Duration,
    /// Seed for the deterministic tick RNG.
    pub tick_seed: u64,
    /// Mid price the market is seeded around.
    pub initial_price: Decimal,
    /// Price step between seeded book levels.
    pub tick_size: Decimal,
    /// Seeded levels per side; 0 starts the market empty.
    pub seed_levels: u32,
    /// Quantity on every seeded level.
    pub seed_quantity: Decimal,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(([0, 0, 0, 0], 8080)),
            tick_interval: Duration::from_secs(1),
            tick_seed: 42,
            initial_price: Decimal::new(359, 2),
            tick_size: Decimal::new(1, 2),
            seed_levels: 4,
            seed_quantity: Decimal::from(1000),
        }
    }
}

impl Config {
    /// Load configuration from `TERMINAL_*` environment variables,
    /// falling back to defaults for anything unset.
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        Ok(Self {
            bind: parse_var("TERMINAL_BIND", defaults.bind)?,
            tick_interval: parse_var("TERMINAL_TICK_INTERVAL_MS", defaults.tick_interval.as_millis() as u64)
                .map(Duration::from_millis)?,
            tick_seed: parse_var("TERMINAL_TICK_SEED", defaults.tick_seed)?,
            initial_price: parse_var("TERMINAL_INITIAL_PRICE", defaults.initial_price)?,
            tick_size: parse_var("TERMINAL_TICK_SIZE", defaults.tick_size)?,
            seed_levels: parse_var("TERMINAL_SEED_LEVELS", defaults.seed_levels)?,
            seed_quantity: parse_var("TERMINAL_SEED_QUANTITY", defaults.seed_quantity)?,
        })
    }
}

fn parse_var<T>(name: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(name) {
        Ok(raw) => raw
            .parse()
            .with_context(|| format!("invalid value for {name}")),
        Err(_) => Ok(default),
    }
}
