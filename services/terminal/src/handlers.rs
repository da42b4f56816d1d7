//! Request handlers for the three terminal operations plus health.

use axum::{extract::State, http::StatusCode, Json};
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;

use crate::error::AppError;
use crate::models::{BookEntry, HealthResponse, PlaceOrderRequest, PriceEntry};
use crate::state::AppState;

/// `GET /v1/orderbook` — flat depth snapshot, bids descending then asks
/// ascending. Always succeeds; an uninitialized book reads as `[]`.
pub async fn get_order_book(State(state): State<AppState>) -> Json<Vec<BookEntry>> {
    let levels = {
        let market = state.market.read().await;
        market.order_book()
    };
    Json(levels.iter().map(BookEntry::from).collect())
}

/// `GET /v1/prices` — full price history in append order. Always
/// succeeds; an uninitialized series reads as `[]`.
pub async fn get_price_data(State(state): State<AppState>) -> Json<Vec<PriceEntry>> {
    let points = {
        let market = state.market.read().await;
        market.price_data()
    };
    Json(points.iter().map(PriceEntry::from).collect())
}

/// `POST /v1/orders` — validate and apply a mock order.
///
/// All-or-nothing: a rejected order surfaces as a failed call (400) and
/// leaves the book untouched. Success carries no payload, matching the
/// fire-and-forget client.
pub async fn place_order(
    State(state): State<AppState>,
    Json(payload): Json<PlaceOrderRequest>,
) -> Result<StatusCode, AppError> {
    let price = Decimal::from_f64(payload.price)
        .ok_or_else(|| AppError::BadRequest("order price must be a finite number".into()))?;
    let quantity = Decimal::from_f64(payload.quantity)
        .ok_or_else(|| AppError::BadRequest("order quantity must be a finite number".into()))?;

    {
        let mut market = state.market.write().await;
        market.place_mock_order(price, quantity, payload.is_buy)?;
    }

    tracing::info!(
        price = payload.price,
        quantity = payload.quantity,
        is_buy = payload.is_buy,
        "mock order accepted"
    );

    Ok(StatusCode::NO_CONTENT)
}

/// `GET /health` — liveness probe.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        service: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
