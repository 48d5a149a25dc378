use std::sync::Arc;

use egot_resolver::CelebrityService;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: egot_db::DbPool,
    pub config: Arc<ServerConfig>,
    /// Cache-aside celebrity lookups.
    pub celebrities: CelebrityService,
}
