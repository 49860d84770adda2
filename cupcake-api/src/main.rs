use cupcake_api::{app, AppState};
use cupcake_catalog::{FlavorCatalog, PricingEngine};
use cupcake_store::InMemorySessionStore;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cupcake_api=debug,tower_http=debug,axum::rejection=trace".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = cupcake_store::app_config::Config::load().expect("Failed to load config");
    tracing::info!("Starting Cupcake Corner API on port {}", config.server.port);

    let catalog = FlavorCatalog::new(config.catalog.flavors.clone());
    let pricing = PricingEngine::new(config.pricing.clone());

    // Order-placed broadcast channel backing the SSE stream
    let (events_tx, _) = tokio::sync::broadcast::channel(config.events.channel_capacity);

    let app_state = AppState {
        sessions: Arc::new(InMemorySessionStore::new()),
        catalog: Arc::new(catalog),
        pricing,
        events_tx,
    };

    let app = app(app_state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
