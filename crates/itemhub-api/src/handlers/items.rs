//! Item CRUD handlers.
//!
//! Update and delete answer `200` with a JSON `null` body when no item has
//! the requested id.

use axum::Json;
use axum::extract::State;

use itemhub_entity::Item;

use crate::error::ApiError;
use crate::extractors::{ItemBody, ItemId};
use crate::state::AppState;

/// POST /items
pub async fn create_item(
    State(state): State<AppState>,
    ItemBody(input): ItemBody,
) -> Result<Json<Item>, ApiError> {
    let item = state.item_service.create(input).await?;
    Ok(Json(item))
}

/// GET /items
pub async fn list_items(State(state): State<AppState>) -> Result<Json<Vec<Item>>, ApiError> {
    let items = state.item_service.list().await?;
    Ok(Json(items))
}

/// PUT /items/{id}
pub async fn update_item(
    State(state): State<AppState>,
    ItemId(id): ItemId,
    ItemBody(input): ItemBody,
) -> Result<Json<Option<Item>>, ApiError> {
    let item = state.item_service.update(id, input).await?;
    Ok(Json(item))
}

/// DELETE /items/{id}
pub async fn delete_item(
    State(state): State<AppState>,
    ItemId(id): ItemId,
) -> Result<Json<Option<Item>>, ApiError> {
    let item = state.item_service.delete(id).await?;
    Ok(Json(item))
}
