//! Item repository implementation.

use async_trait::async_trait;
use itemhub_core::error::{AppError, ErrorKind};
use itemhub_core::result::AppResult;
use itemhub_entity::Item;

use crate::connection::DatabasePool;
use crate::store::ItemStore;

/// PostgreSQL-backed item store. One parameterized statement per operation.
#[derive(Debug, Clone)]
pub struct ItemRepository {
    db: DatabasePool,
}

impl ItemRepository {
    /// Create a new item repository.
    pub fn new(db: DatabasePool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ItemStore for ItemRepository {
    async fn insert(&self, name: &str, description: &str) -> AppResult<Item> {
        sqlx::query_as::<_, Item>(
            "INSERT INTO items (name, description) VALUES ($1, $2) RETURNING id, name, description",
        )
        .bind(name)
        .bind(description)
        .fetch_one(self.db.pool())
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create item", e))
    }

    async fn find_all(&self) -> AppResult<Vec<Item>> {
        sqlx::query_as::<_, Item>("SELECT id, name, description FROM items ORDER BY id")
            .fetch_all(self.db.pool())
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list items", e))
    }

    async fn update(&self, id: i32, name: &str, description: &str) -> AppResult<Option<Item>> {
        sqlx::query_as::<_, Item>(
            "UPDATE items SET name = $1, description = $2 WHERE id = $3 \
             RETURNING id, name, description",
        )
        .bind(name)
        .bind(description)
        .bind(id)
        .fetch_optional(self.db.pool())
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update item", e))
    }

    async fn delete(&self, id: i32) -> AppResult<Option<Item>> {
        sqlx::query_as::<_, Item>("DELETE FROM items WHERE id = $1 RETURNING id, name, description")
            .bind(id)
            .fetch_optional(self.db.pool())
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete item", e))
    }

    async fn ping(&self) -> AppResult<()> {
        self.db.health_check().await
    }
}
