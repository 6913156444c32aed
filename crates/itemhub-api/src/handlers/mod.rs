//! Request handlers organized by domain.

pub mod health;
pub mod items;
pub mod root;
