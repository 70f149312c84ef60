//! Rendered list page and the landing redirect
//!
//! The page is composed from two independent store reads: the list's items
//! and the sidebar of all lists.

use std::sync::Arc;

use axum::extract::State;
use axum::response::{Html, Redirect};
use once_cell::sync::Lazy;
use tera::{Context, Tera};

use crate::http::error::ApiError;
use crate::http::extractors::PathIds;
use crate::http::server::AppState;
use crate::models::ListId;

/// List id the landing page redirects to when no lists exist
pub const NO_LISTS_ID: ListId = 0;

const INDEX_TEMPLATE: &str = include_str!("../templates/index.html");

static TEMPLATES: Lazy<Tera> = Lazy::new(|| {
    let mut tera = Tera::default();
    tera.add_raw_template("index.html", INDEX_TEMPLATE)
        .expect("invalid index template");
    tera
});

/// Path of the rendered page for a list
pub fn list_path(list_id: ListId) -> String {
    format!("/todos/{}", list_id)
}

/// GET /todos/{list_id} - render one list with the sidebar of all lists
pub async fn show_list(
    State(state): State<Arc<AppState>>,
    PathIds(list_id): PathIds<ListId>,
) -> Result<Html<String>, ApiError> {
    let list = state.store.get_list(list_id).await?;
    let items = state.store.list_items(list_id).await?;
    let lists = state.store.all_lists().await?;

    let mut context = Context::new();
    context.insert("list_id", &list_id);
    context.insert("list_name", &list.name);
    context.insert("items", &items);
    context.insert("lists", &lists);

    let html = TEMPLATES
        .render("index.html", &context)
        .map_err(|e| ApiError::Internal {
            message: format!("template rendering failed: {}", e),
        })?;

    Ok(Html(html))
}

/// GET / - redirect to the first list, or to the empty sentinel page
pub async fn index(State(state): State<Arc<AppState>>) -> Result<Redirect, ApiError> {
    let target = state
        .store
        .first_list()
        .await?
        .map_or(NO_LISTS_ID, |list| list.id);
    Ok(Redirect::to(&list_path(target)))
}
