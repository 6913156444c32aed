//! Item entity model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row of the `items` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Item {
    /// Store-assigned identifier. Never reused after deletion.
    pub id: i32,
    /// Item name.
    pub name: String,
    /// Item description.
    pub description: String,
}

impl Item {
    /// Compact JSON rendering used in notification bodies.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| format!("{self:?}"))
    }
}
