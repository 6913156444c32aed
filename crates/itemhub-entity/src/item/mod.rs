//! Item domain entities.

pub mod action;
pub mod input;
pub mod model;

pub use action::ItemAction;
pub use input::{ItemDraft, ItemInput, REQUIRED_FIELDS_MESSAGE};
pub use model::Item;
