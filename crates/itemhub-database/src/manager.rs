//! Store manager that dispatches to the configured backend.

use std::sync::Arc;

use tracing::info;

use itemhub_core::config::DatabaseConfig;
use itemhub_core::error::AppError;
use itemhub_core::result::AppResult;

use crate::connection::DatabasePool;
use crate::memory::MemoryItemStore;
use crate::migration::run_migrations;
use crate::repositories::ItemRepository;
use crate::store::ItemStore;

/// Owns the selected item store backend and, for PostgreSQL, its pool.
///
/// The backend is selected at construction time based on configuration.
#[derive(Debug, Clone)]
pub struct ItemStoreManager {
    inner: Arc<dyn ItemStore>,
    pool: Option<DatabasePool>,
}

impl ItemStoreManager {
    /// Build the backend named by `config.provider`.
    pub async fn connect(config: &DatabaseConfig) -> AppResult<Self> {
        match config.provider.as_str() {
            "postgres" => {
                let pool = DatabasePool::connect(config).await?;
                if config.run_migrations {
                    run_migrations(pool.pool()).await?;
                }
                info!("Using PostgreSQL item store");
                Ok(Self {
                    inner: Arc::new(ItemRepository::new(pool.clone())),
                    pool: Some(pool),
                })
            }
            "memory" => {
                info!("Using in-memory item store; data is lost on restart");
                Ok(Self::from_store(Arc::new(MemoryItemStore::new())))
            }
            other => Err(AppError::configuration(format!(
                "Unknown database provider: '{other}'. Supported: postgres, memory"
            ))),
        }
    }

    /// Wrap an existing store (for testing).
    pub fn from_store(store: Arc<dyn ItemStore>) -> Self {
        Self {
            inner: store,
            pool: None,
        }
    }

    /// Shared handle to the selected store.
    pub fn store(&self) -> Arc<dyn ItemStore> {
        Arc::clone(&self.inner)
    }

    /// Release pooled connections, if any.
    pub async fn close(&self) {
        if let Some(pool) = &self.pool {
            pool.close().await;
        }
    }
}
