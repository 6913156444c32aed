//! Application state shared across all handlers.

use std::sync::Arc;

use itemhub_service::ItemService;

/// Application state passed to every Axum handler via `State<AppState>`.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Item use cases.
    pub item_service: Arc<ItemService>,
}

impl AppState {
    /// Creates the handler state.
    pub fn new(item_service: Arc<ItemService>) -> Self {
        Self { item_service }
    }
}
