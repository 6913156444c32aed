//! In-process item store.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use itemhub_core::error::AppError;
use itemhub_core::result::AppResult;
use itemhub_entity::Item;

use crate::store::ItemStore;

#[derive(Debug)]
struct MemoryState {
    next_id: i64,
    rows: BTreeMap<i32, Item>,
}

/// Item store kept in process memory.
///
/// Mirrors the PostgreSQL semantics: ids start at 1, grow monotonically and
/// are never handed out again after a delete; listing is ordered by id.
#[derive(Debug)]
pub struct MemoryItemStore {
    state: RwLock<MemoryState>,
}

impl MemoryItemStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            state: RwLock::new(MemoryState {
                next_id: 1,
                rows: BTreeMap::new(),
            }),
        }
    }
}

impl Default for MemoryItemStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ItemStore for MemoryItemStore {
    async fn insert(&self, name: &str, description: &str) -> AppResult<Item> {
        let mut state = self.state.write().await;
        let id = i32::try_from(state.next_id)
            .map_err(|_| AppError::database("Item id sequence exhausted"))?;
        state.next_id += 1;

        let item = Item {
            id,
            name: name.to_string(),
            description: description.to_string(),
        };
        state.rows.insert(id, item.clone());
        debug!(id, "Inserted item");
        Ok(item)
    }

    async fn find_all(&self) -> AppResult<Vec<Item>> {
        Ok(self.state.read().await.rows.values().cloned().collect())
    }

    async fn update(&self, id: i32, name: &str, description: &str) -> AppResult<Option<Item>> {
        let mut state = self.state.write().await;
        Ok(state.rows.get_mut(&id).map(|row| {
            row.name = name.to_string();
            row.description = description.to_string();
            row.clone()
        }))
    }

    async fn delete(&self, id: i32) -> AppResult<Option<Item>> {
        Ok(self.state.write().await.rows.remove(&id))
    }

    async fn ping(&self) -> AppResult<()> {
        Ok(())
    }
}
