//! Route handlers organized by resource
//!
//! `/todos/{list_id}` serves four methods from three modules, so the
//! routing table lives here in one place.

pub mod health;
pub mod items;
pub mod lists;
pub mod views;

use std::sync::Arc;

use axum::routing::{get, patch, post};
use axum::Router;

use super::server::AppState;

/// All application routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(views::index))
        .route("/todos", post(lists::create_list))
        .route(
            "/todos/{list_id}",
            get(views::show_list)
                .post(items::create_item)
                .put(lists::complete_all)
                .delete(lists::delete_list),
        )
        .route(
            "/todos/{list_id}/{todo_id}",
            patch(items::update_item).delete(items::delete_item),
        )
        .merge(health::router())
}
