//! Email subject and body for item notifications.

use itemhub_entity::{Item, ItemAction};

/// A rendered notification email.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailMessage {
    /// Subject line.
    pub subject: String,
    /// HTML body.
    pub html_content: String,
}

impl EmailMessage {
    /// Render the email announcing `action` on `item`.
    ///
    /// A missing item renders as the JSON literal `null`.
    pub fn for_item(action: ItemAction, item: Option<&Item>) -> Self {
        let rendered = item.map_or_else(|| "null".to_string(), Item::to_json);
        Self {
            subject: format!("CRUD Action: {action}"),
            html_content: format!("<p>Action {action} occurred on item: {rendered}</p>"),
        }
    }
}
