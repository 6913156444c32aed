//! Mutating actions that trigger a notification.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind of change applied to an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ItemAction {
    /// A new item was inserted.
    Create,
    /// An existing item's fields were replaced.
    Update,
    /// An item was removed.
    Delete,
}

impl ItemAction {
    /// Return the action tag as an uppercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Create => "CREATE",
            Self::Update => "UPDATE",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for ItemAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
