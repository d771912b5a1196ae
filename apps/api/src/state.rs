//! Application state.

use std::sync::Arc;

use kasir_db::Database;

use crate::config::ApiConfig;

/// Application state shared across handlers.
///
/// `Database` is already a cheap pool handle; the config is shared behind an
/// `Arc` so cloning the state per request stays cheap.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The store.
    pub db: Database,

    /// Service configuration.
    pub config: Arc<ApiConfig>,
}

impl AppState {
    /// Create a new application state.
    pub fn new(db: Database, config: ApiConfig) -> Self {
        Self {
            db,
            config: Arc::new(config),
        }
    }
}
