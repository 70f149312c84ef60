//! List endpoints

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::http::error::ApiError;
use crate::http::extractors::{JsonBody, PathIds};
use crate::http::server::AppState;
use crate::models::{ListId, ListName, TodoList};

/// Create list request
#[derive(Deserialize)]
pub struct CreateListRequest {
    pub name: Option<String>,
}

/// List response
#[derive(Serialize)]
pub struct ListResponse {
    pub id: ListId,
    pub name: String,
}

impl From<TodoList> for ListResponse {
    fn from(list: TodoList) -> Self {
        Self {
            id: list.id,
            name: list.name,
        }
    }
}

/// Outcome of a bulk update or delete
#[derive(Serialize)]
pub struct SuccessResponse {
    pub successful: bool,
}

impl SuccessResponse {
    pub fn ok() -> Json<Self> {
        Json(Self { successful: true })
    }
}

/// POST /todos - create a new list
pub async fn create_list(
    State(state): State<Arc<AppState>>,
    JsonBody(req): JsonBody<CreateListRequest>,
) -> Result<Json<ListResponse>, ApiError> {
    let name = ListName::from_field(req.name.as_deref())?;
    let list = state.store.create_list(name).await?;
    Ok(Json(ListResponse::from(list)))
}

/// PUT /todos/{list_id} - mark every item of the list completed
///
/// An unknown list has no items, so this still succeeds.
pub async fn complete_all(
    State(state): State<Arc<AppState>>,
    PathIds(list_id): PathIds<ListId>,
) -> Result<Json<SuccessResponse>, ApiError> {
    let count = state.store.complete_all(list_id).await?;
    tracing::info!(list_id, count, "marked list complete");
    Ok(SuccessResponse::ok())
}

/// DELETE /todos/{list_id} - delete a list and its items
pub async fn delete_list(
    State(state): State<Arc<AppState>>,
    PathIds(list_id): PathIds<ListId>,
) -> Result<Json<SuccessResponse>, ApiError> {
    state.store.delete_list(list_id).await?;
    Ok(SuccessResponse::ok())
}
