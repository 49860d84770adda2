pub mod models;

pub use models::{Order, OrderUpdate, PlaceError, PlacedOrder, QUANTITY_MAX, QUANTITY_MIN};
