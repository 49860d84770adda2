use crate::pii::Masked;
use rust_decimal::Decimal;
use uuid::Uuid;

/// Emitted once per completed checkout, when a session's order is placed.
#[derive(Debug, serde::Serialize, serde::Deserialize, Clone)]
pub struct OrderPlacedEvent {
    pub order_id: Uuid,
    pub customer_name: Masked<String>,
    pub flavor: String,
    pub quantity: u32,
    pub total: Decimal,
    pub timestamp: i64,
}
