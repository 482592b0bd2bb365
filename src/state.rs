use std::sync::Arc;

use crate::{config::PaginationConfig, queries::store::Storage};

/// Application state shared across all HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Repositories for every entity
    pub storage: Arc<dyn Storage>,
    /// List defaults applied to every `GET /{entity}` request
    pub pagination: PaginationConfig,
}

impl AppState {
    /// Create a new AppState instance
    ///
    /// # Arguments
    /// * `storage` - Storage backend, PostgreSQL in production
    /// * `pagination` - Default and maximum page sizes
    pub fn new(storage: Arc<dyn Storage>, pagination: PaginationConfig) -> Self {
        Self {
            storage,
            pagination,
        }
    }
}
