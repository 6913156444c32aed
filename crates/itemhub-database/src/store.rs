//! The item store trait implemented by every persistence backend.

use async_trait::async_trait;

use itemhub_core::result::AppResult;
use itemhub_entity::Item;

/// Persistence gateway for items.
///
/// Each operation maps to exactly one statement against the backing store;
/// no operation spans a transaction. Backends own their connection
/// lifecycle.
#[async_trait]
pub trait ItemStore: Send + Sync + std::fmt::Debug + 'static {
    /// Insert a row and return it with its generated id.
    async fn insert(&self, name: &str, description: &str) -> AppResult<Item>;

    /// Return every row, ordered by id.
    async fn find_all(&self) -> AppResult<Vec<Item>>;

    /// Replace the name and description of the row with `id`.
    /// Returns `None` when no row matched.
    async fn update(&self, id: i32, name: &str, description: &str) -> AppResult<Option<Item>>;

    /// Remove the row with `id` and return it. Returns `None` when no row matched.
    async fn delete(&self, id: i32) -> AppResult<Option<Item>>;

    /// Check that the store is reachable.
    async fn ping(&self) -> AppResult<()>;
}
