pub mod app_config;
pub mod session_repo;

pub use session_repo::{InMemorySessionStore, SessionRepository, StoreError};
