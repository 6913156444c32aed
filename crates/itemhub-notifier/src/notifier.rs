//! The notification capability used by the item service.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use itemhub_core::config::NotificationConfig;
use itemhub_core::result::AppResult;
use itemhub_entity::{Item, ItemAction};

use crate::brevo::BrevoNotifier;
use crate::noop::NoopNotifier;

/// Announces a completed item mutation.
///
/// Implementations must not fail outward: any delivery problem is handled
/// (logged) inside `notify`, and the caller proceeds unaffected.
#[async_trait]
pub trait Notifier: Send + Sync + std::fmt::Debug + 'static {
    /// Report that `action` was applied to `item`.
    ///
    /// `item` is `None` when an update or delete matched no row; the
    /// announcement still goes out and describes the item as `null`.
    async fn notify(&self, action: ItemAction, item: Option<&Item>);
}

/// Build the notifier selected by configuration.
pub fn build_notifier(config: &NotificationConfig) -> AppResult<Arc<dyn Notifier>> {
    if config.enabled {
        info!(endpoint = %config.endpoint, "Email notifications enabled");
        Ok(Arc::new(BrevoNotifier::new(config)?))
    } else {
        info!("Email notifications disabled");
        Ok(Arc::new(NoopNotifier))
    }
}
