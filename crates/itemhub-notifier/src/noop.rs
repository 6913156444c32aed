//! Notifier that only logs.

use async_trait::async_trait;
use tracing::debug;

use itemhub_entity::{Item, ItemAction};

use crate::notifier::Notifier;

/// Drops every notification. Used when email delivery is disabled.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopNotifier;

#[async_trait]
impl Notifier for NoopNotifier {
    async fn notify(&self, action: ItemAction, item: Option<&Item>) {
        debug!(action = %action, item_id = ?item.map(|i| i.id), "Notification skipped (disabled)");
    }
}
