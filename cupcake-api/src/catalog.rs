use axum::{extract::State, routing::get, Json, Router};
use cupcake_catalog::{Flavor, PricingConfig};
use cupcake_order::{QUANTITY_MAX, QUANTITY_MIN};
use serde::{Deserialize, Serialize};

use crate::state::AppState;

#[derive(Debug, Serialize, Deserialize)]
pub struct CatalogResponse {
    pub flavors: Vec<Flavor>,
    pub quantity: QuantityRange,
    pub pricing: PricingConfig,
}

/// Advisory bounds for order forms; the server never rejects writes
/// outside them.
#[derive(Debug, Serialize, Deserialize)]
pub struct QuantityRange {
    pub min: u32,
    pub max: u32,
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/v1/catalog", get(get_catalog))
}

/// GET /v1/catalog
/// Everything an order form needs: flavors, quantity bounds, pricing
async fn get_catalog(State(state): State<AppState>) -> Json<CatalogResponse> {
    Json(CatalogResponse {
        flavors: state.catalog.iter().cloned().collect(),
        quantity: QuantityRange {
            min: QUANTITY_MIN,
            max: QUANTITY_MAX,
        },
        pricing: state.pricing.config().clone(),
    })
}
