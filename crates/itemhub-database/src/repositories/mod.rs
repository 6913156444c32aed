//! PostgreSQL repository implementations.

pub mod item;

pub use item::ItemRepository;
