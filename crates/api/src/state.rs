use std::sync::Arc;

use itemboard_db::store::DynItemStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Item persistence (PostgreSQL or in-memory).
    pub store: DynItemStore,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
