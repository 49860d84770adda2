use cupcake_catalog::{FlavorCatalog, PricingEngine};
use cupcake_shared::models::events::OrderPlacedEvent;
use cupcake_store::SessionRepository;
use std::sync::Arc;
use tokio::sync::broadcast;

#[derive(Clone)]
pub struct AppState {
    pub sessions: Arc<dyn SessionRepository>,
    pub catalog: Arc<FlavorCatalog>,
    pub pricing: PricingEngine,
    pub events_tx: broadcast::Sender<OrderPlacedEvent>,
}
