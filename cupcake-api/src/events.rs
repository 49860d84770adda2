use axum::{
    extract::State,
    response::sse::{Event, KeepAlive, Sse},
    routing::get,
    Router,
};
use std::convert::Infallible;
use tokio_stream::{wrappers::BroadcastStream, Stream, StreamExt};

use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/v1/events/orders", get(order_events))
}

/// GET /v1/events/orders
/// Server-sent stream of order_placed events
async fn order_events(
    State(state): State<AppState>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let rx = state.events_tx.subscribe();

    let stream = BroadcastStream::new(rx).filter_map(|result| match result {
        Ok(event) => Some(Ok(Event::default()
            .event("order_placed")
            .data(serde_json::to_string(&event).unwrap_or_default()))),
        // A lagged subscriber skips whatever the channel already dropped.
        Err(_) => None,
    });

    Sse::new(stream).keep_alive(KeepAlive::default())
}
