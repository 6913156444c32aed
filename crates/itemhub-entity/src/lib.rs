//! # itemhub-entity
//!
//! Domain entity models for ItemHub. The item row derives `sqlx::FromRow`
//! so the PostgreSQL repository can map result rows directly.

pub mod item;

pub use item::{Item, ItemAction, ItemDraft, ItemInput};
