//! Shared application state
//!
//! One `MarketState` behind an `Arc<RwLock>`: unlimited concurrent
//! readers, serialized writers. Readers clone snapshots out under the
//! read guard and release it immediately, so a concurrent write observes
//! either the pre- or post-mutation state, never a torn one.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::market::MarketState;

#[derive(Clone)]
pub struct AppState {
    pub market: Arc<RwLock<MarketState>>,
}

impl AppState {
    pub fn new(market: MarketState) -> Self {
        Self {
            market: Arc::new(RwLock::new(market)),
        }
    }
}
