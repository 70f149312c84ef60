//! Item endpoints
//!
//! The list id in item paths is accepted but not checked against the
//! item's owner; items are addressed by their own id.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use super::lists::SuccessResponse;
use crate::http::error::ApiError;
use crate::http::extractors::{JsonBody, PathIds};
use crate::http::server::AppState;
use crate::models::{ItemDescription, ItemId, ListId, Todo, ValidationError};

/// Create item request
#[derive(Deserialize)]
pub struct CreateItemRequest {
    pub description: Option<String>,
}

/// Created item response
#[derive(Serialize)]
pub struct ItemResponse {
    pub id: ItemId,
    pub description: String,
}

impl From<Todo> for ItemResponse {
    fn from(item: Todo) -> Self {
        Self {
            id: item.id,
            description: item.description,
        }
    }
}

/// Update completion request
#[derive(Deserialize)]
pub struct UpdateItemRequest {
    pub completed: Option<bool>,
}

/// Completion state after an update
#[derive(Serialize)]
pub struct CompletedResponse {
    pub completed: bool,
}

/// POST /todos/{todolist_id} - add an item to a list
pub async fn create_item(
    State(state): State<Arc<AppState>>,
    PathIds(list_id): PathIds<ListId>,
    JsonBody(req): JsonBody<CreateItemRequest>,
) -> Result<Json<ItemResponse>, ApiError> {
    let description = ItemDescription::from_field(req.description.as_deref())?;
    let item = state.store.create_item(list_id, description).await?;
    Ok(Json(ItemResponse::from(item)))
}

/// PATCH /todos/{list_id}/{todo_id} - set an item's completion flag
pub async fn update_item(
    State(state): State<Arc<AppState>>,
    PathIds((_list_id, item_id)): PathIds<(ListId, ItemId)>,
    JsonBody(req): JsonBody<UpdateItemRequest>,
) -> Result<Json<CompletedResponse>, ApiError> {
    let completed = req
        .completed
        .ok_or(ValidationError::Missing { field: "completed" })?;
    let item = state.store.set_item_completed(item_id, completed).await?;
    Ok(Json(CompletedResponse {
        completed: item.completed,
    }))
}

/// DELETE /todos/{list_id}/{todo_id} - delete one item
pub async fn delete_item(
    State(state): State<Arc<AppState>>,
    PathIds((_list_id, item_id)): PathIds<(ListId, ItemId)>,
) -> Result<Json<SuccessResponse>, ApiError> {
    state.store.delete_item(item_id).await?;
    Ok(SuccessResponse::ok())
}
