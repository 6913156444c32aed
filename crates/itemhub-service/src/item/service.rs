//! Create, list, update and delete items.

use std::sync::Arc;

use tracing::{debug, info};

use itemhub_core::error::AppError;
use itemhub_database::ItemStore;
use itemhub_entity::{Item, ItemAction, ItemInput};
use itemhub_notifier::Notifier;

/// Orchestrates the item store and the notifier.
///
/// Every operation runs validate, persist, notify in that order. Validation
/// failures return before the store is touched; store failures return
/// before the notifier is called. Update and delete announce their action
/// even when no row matched. The notifier cannot fail, so a persisted
/// change is never reported as an error.
#[derive(Debug, Clone)]
pub struct ItemService {
    store: Arc<dyn ItemStore>,
    notifier: Arc<dyn Notifier>,
}

impl ItemService {
    /// Creates a new item service.
    pub fn new(store: Arc<dyn ItemStore>, notifier: Arc<dyn Notifier>) -> Self {
        Self { store, notifier }
    }

    /// Inserts a new item and announces it.
    pub async fn create(&self, input: ItemInput) -> Result<Item, AppError> {
        let draft = input.into_draft()?;
        let item = self.store.insert(&draft.name, &draft.description).await?;
        info!(item_id = item.id, "Item created");

        self.notifier.notify(ItemAction::Create, Some(&item)).await;
        Ok(item)
    }

    /// Lists every item in store order.
    pub async fn list(&self) -> Result<Vec<Item>, AppError> {
        self.store.find_all().await
    }

    /// Replaces the name and description of item `id`.
    ///
    /// Returns `Ok(None)` when no item has that id; the update is announced
    /// regardless.
    pub async fn update(&self, id: i32, input: ItemInput) -> Result<Option<Item>, AppError> {
        let draft = input.into_draft()?;
        let updated = self
            .store
            .update(id, &draft.name, &draft.description)
            .await?;

        match &updated {
            Some(item) => info!(item_id = item.id, "Item updated"),
            None => debug!(item_id = id, "Update matched no item"),
        }
        self.notifier
            .notify(ItemAction::Update, updated.as_ref())
            .await;
        Ok(updated)
    }

    /// Removes item `id` and returns it.
    ///
    /// Returns `Ok(None)` when no item has that id; the delete is announced
    /// regardless.
    pub async fn delete(&self, id: i32) -> Result<Option<Item>, AppError> {
        let deleted = self.store.delete(id).await?;

        match &deleted {
            Some(item) => info!(item_id = item.id, "Item deleted"),
            None => debug!(item_id = id, "Delete matched no item"),
        }
        self.notifier
            .notify(ItemAction::Delete, deleted.as_ref())
            .await;
        Ok(deleted)
    }

    /// Checks that the item store is reachable.
    pub async fn health(&self) -> Result<(), AppError> {
        self.store.ping().await
    }
}
