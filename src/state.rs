use std::sync::Arc;

use crate::catalog::Catalog;
use crate::config::AppConfig;

/// The shared application state.
///
/// Everything in here is built during startup and read-only afterwards; the
/// absence of writes after startup is the concurrency invariant, so handlers
/// need no locking. Cloning clones the `Arc`s, never the data.
#[derive(Clone)]
pub struct AppState {
    /// The finalized asset catalog and its pre-rendered public document.
    pub catalog: Arc<Catalog>,
    /// The application configuration.
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(catalog: Catalog, config: AppConfig) -> Self {
        Self { catalog: Arc::new(catalog), config: Arc::new(config) }
    }
}
