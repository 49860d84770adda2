use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use cupcake_catalog::PriceBreakdown;
use cupcake_order::{Order, OrderUpdate, PlacedOrder};
use cupcake_shared::models::events::OrderPlacedEvent;
use cupcake_shared::Masked;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::AppError;
use crate::state::AppState;

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Serialize, Deserialize)]
pub struct OrderView {
    pub flavor: u32,
    pub flavor_name: Option<String>,
    pub quantity: u32,
    pub special_request_enabled: bool,
    pub extra_frosting: bool,
    pub add_sprinkles: bool,
    pub name: String,
    pub street_address: String,
    pub city: String,
    pub zip: String,
    pub has_valid_address: bool,
    pub breakdown: PriceBreakdown,
    pub total_cost: Decimal,
}

impl OrderView {
    /// Derived values are recomputed on every read, never stored.
    fn build(order: &Order, state: &AppState) -> Self {
        let breakdown = order.quote(&state.pricing);
        Self {
            flavor: order.flavor,
            flavor_name: state.catalog.name(order.flavor).map(str::to_string),
            quantity: order.quantity,
            special_request_enabled: order.special_request_enabled(),
            extra_frosting: order.extra_frosting(),
            add_sprinkles: order.add_sprinkles(),
            name: order.name.clone(),
            street_address: order.street_address.clone(),
            city: order.city.clone(),
            zip: order.zip.clone(),
            has_valid_address: order.has_valid_address(),
            total_cost: breakdown.total,
            breakdown,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CheckoutSessionResponse {
    pub session_id: Uuid,
    pub order: OrderView,
}

// ============================================================================
// Handlers
// ============================================================================

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/v1/checkout", post(open_checkout))
        .route(
            "/v1/checkout/{id}",
            get(get_checkout)
                .patch(update_checkout)
                .delete(abandon_checkout),
        )
        .route("/v1/checkout/{id}/place", post(place_order))
}

/// POST /v1/checkout
/// Open a checkout session holding a freshly defaulted order
async fn open_checkout(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<CheckoutSessionResponse>), AppError> {
    let order = Order::new();
    let session_id = state.sessions.open(order.clone()).await;

    tracing::info!("checkout session {} opened", session_id);

    Ok((
        StatusCode::CREATED,
        Json(CheckoutSessionResponse {
            session_id,
            order: OrderView::build(&order, &state),
        }),
    ))
}

/// GET /v1/checkout/{id}
/// Current order with its derived values
async fn get_checkout(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<OrderView>, AppError> {
    let order = state
        .sessions
        .get(id)
        .await
        .map_err(|e| AppError::NotFoundError(e.to_string()))?;

    Ok(Json(OrderView::build(&order, &state)))
}

/// PATCH /v1/checkout/{id}
/// Apply a batch of field writes to the session's order
async fn update_checkout(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(update): Json<OrderUpdate>,
) -> Result<Json<OrderView>, AppError> {
    let order = state
        .sessions
        .apply(id, update)
        .await
        .map_err(|e| AppError::NotFoundError(e.to_string()))?;

    Ok(Json(OrderView::build(&order, &state)))
}

/// POST /v1/checkout/{id}/place
/// Place the order: mint a receipt, close the session, broadcast the event
async fn place_order(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<(StatusCode, Json<PlacedOrder>), AppError> {
    let order = state
        .sessions
        .get(id)
        .await
        .map_err(|e| AppError::NotFoundError(e.to_string()))?;

    let receipt = order
        .place(&state.catalog, &state.pricing)
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    state
        .sessions
        .close(id)
        .await
        .map_err(|e| AppError::NotFoundError(e.to_string()))?;

    // Subscribers may be absent; a failed send only means nobody is listening.
    let _ = state.events_tx.send(OrderPlacedEvent {
        order_id: receipt.id,
        customer_name: Masked(receipt.name.clone()),
        flavor: receipt.flavor.clone(),
        quantity: receipt.quantity,
        total: receipt.total,
        timestamp: chrono::Utc::now().timestamp(),
    });

    tracing::info!("order {} placed from session {}", receipt.id, id);

    Ok((StatusCode::CREATED, Json(receipt)))
}

/// DELETE /v1/checkout/{id}
/// Abandon the flow and discard the order
async fn abandon_checkout(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state
        .sessions
        .close(id)
        .await
        .map_err(|e| AppError::NotFoundError(e.to_string()))?;

    tracing::info!("checkout session {} abandoned", id);

    Ok(StatusCode::NO_CONTENT)
}
