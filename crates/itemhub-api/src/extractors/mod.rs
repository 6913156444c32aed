//! Custom Axum extractors.

pub mod item_body;
pub mod item_id;

pub use item_body::ItemBody;
pub use item_id::ItemId;
