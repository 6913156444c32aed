//! # itemhub-service
//!
//! Business logic for ItemHub. [`ItemService`] validates input, runs the
//! single store statement each operation needs, then reports the change
//! through the configured [`Notifier`](itemhub_notifier::Notifier).
//!
//! Services follow constructor injection: dependencies are provided at
//! construction time via `Arc` references.

pub mod item;

pub use item::ItemService;
