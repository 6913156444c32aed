//! # itemhub-database
//!
//! The persistence gateway for ItemHub: the [`ItemStore`] trait, its
//! PostgreSQL and in-memory implementations, connection pool management,
//! and the embedded migration runner.

pub mod connection;
pub mod manager;
pub mod memory;
pub mod migration;
pub mod repositories;
pub mod store;

pub use connection::DatabasePool;
pub use manager::ItemStoreManager;
pub use memory::MemoryItemStore;
pub use repositories::ItemRepository;
pub use store::ItemStore;
