//! Handlers for the `/items` resource.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use itemboard_core::item::{item_not_found, parse_item_id, Item, ItemChanges, ItemInput, NewItem};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Body returned by a successful delete.
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub message: &'static str,
    pub item: Item,
}

/// POST /api/items
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<ItemInput>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Item>)> {
    let Json(input) = payload?;
    let fields = NewItem::try_from(input)?;
    let item = state
        .store
        .create(&fields)
        .await
        .map_err(AppError::store("Error creating item"))?;
    tracing::info!(item_id = %item.id, "Item created");
    Ok((StatusCode::CREATED, Json(item)))
}

/// GET /api/items
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Item>>> {
    let items = state
        .store
        .list()
        .await
        .map_err(AppError::store("Error fetching items"))?;
    Ok(Json(items))
}

/// GET /api/items/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Item>> {
    let id = parse_item_id(&id)?;
    let item = state
        .store
        .find_by_id(id)
        .await
        .map_err(AppError::store("Error fetching item"))?
        .ok_or_else(|| item_not_found(id))?;
    Ok(Json(item))
}

/// PUT /api/items/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<ItemInput>, JsonRejection>,
) -> AppResult<Json<Item>> {
    let id = parse_item_id(&id)?;
    let Json(input) = payload?;
    let changes = ItemChanges::try_from(input)?;
    let item = state
        .store
        .update(id, &changes)
        .await
        .map_err(AppError::store("Error updating item"))?
        .ok_or_else(|| item_not_found(id))?;
    tracing::info!(item_id = %item.id, "Item updated");
    Ok(Json(item))
}

/// DELETE /api/items/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<DeleteResponse>> {
    let id = parse_item_id(&id)?;
    let item = state
        .store
        .delete(id)
        .await
        .map_err(AppError::store("Error deleting item"))?
        .ok_or_else(|| item_not_found(id))?;
    tracing::info!(item_id = %item.id, "Item deleted");
    Ok(Json(DeleteResponse {
        message: "Item deleted successfully",
        item,
    }))
}
