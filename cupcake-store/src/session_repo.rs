use async_trait::async_trait;
use cupcake_order::{Order, OrderUpdate};
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Checkout-session access. One open order per session id; a session lives
/// from flow start until it is closed by placement or abandonment.
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Start a checkout flow. The returned id keys every later call.
    async fn open(&self, order: Order) -> Uuid;

    /// Snapshot of the session's current order.
    async fn get(&self, id: Uuid) -> Result<Order, StoreError>;

    /// Mutate the session's order in place, returning the updated snapshot.
    async fn apply(&self, id: Uuid, update: OrderUpdate) -> Result<Order, StoreError>;

    /// End the flow: remove the session and hand back its final order.
    async fn close(&self, id: Uuid) -> Result<Order, StoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("checkout session not found: {0}")]
    SessionNotFound(Uuid),
}

/// Process-local session store. Nothing survives a restart; orders are
/// discarded with their sessions.
#[derive(Default)]
pub struct InMemorySessionStore {
    sessions: RwLock<HashMap<Uuid, Order>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionRepository for InMemorySessionStore {
    async fn open(&self, order: Order) -> Uuid {
        let id = Uuid::new_v4();
        self.sessions.write().await.insert(id, order);
        tracing::debug!("opened checkout session {}", id);
        id
    }

    async fn get(&self, id: Uuid) -> Result<Order, StoreError> {
        self.sessions
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or(StoreError::SessionNotFound(id))
    }

    async fn apply(&self, id: Uuid, update: OrderUpdate) -> Result<Order, StoreError> {
        let mut sessions = self.sessions.write().await;
        let order = sessions.get_mut(&id).ok_or(StoreError::SessionNotFound(id))?;
        order.apply(update);
        Ok(order.clone())
    }

    async fn close(&self, id: Uuid) -> Result<Order, StoreError> {
        let order = self
            .sessions
            .write()
            .await
            .remove(&id)
            .ok_or(StoreError::SessionNotFound(id))?;
        tracing::debug!("closed checkout session {}", id);
        Ok(order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn open_then_get_round_trips_the_order() {
        let store = InMemorySessionStore::new();

        let id = store.open(Order::new()).await;

        assert_eq!(store.get(id).await.unwrap(), Order::new());
    }

    #[tokio::test]
    async fn apply_mutates_the_stored_order() {
        let store = InMemorySessionStore::new();
        let id = store.open(Order::new()).await;

        let updated = store
            .apply(
                id,
                OrderUpdate {
                    quantity: Some(12),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.quantity, 12);
        assert_eq!(store.get(id).await.unwrap().quantity, 12);
    }

    #[tokio::test]
    async fn close_removes_the_session() {
        let store = InMemorySessionStore::new();
        let id = store.open(Order::new()).await;

        store.close(id).await.unwrap();

        assert!(matches!(
            store.get(id).await,
            Err(StoreError::SessionNotFound(missing)) if missing == id
        ));
    }

    #[tokio::test]
    async fn unknown_session_errors() {
        let store = InMemorySessionStore::new();

        let id = Uuid::new_v4();
        assert!(matches!(
            store.apply(id, OrderUpdate::default()).await,
            Err(StoreError::SessionNotFound(_))
        ));
        assert!(matches!(
            store.close(id).await,
            Err(StoreError::SessionNotFound(_))
        ));
    }
}
