//! Storage contract shared by the HTTP layer
//!
//! Handlers hold an `Arc<dyn TodoStore>`; the concrete backend is chosen at
//! startup and injected through `AppState`.

use async_trait::async_trait;
use sqlx::PgPool;

use super::repos::{ItemRepo, ListRepo};
use super::DbError;
use crate::models::{ItemDescription, ItemId, ListId, ListName, Todo, TodoList};

/// Lists and items with referential integrity.
///
/// Every mutating call is atomic. `list_items` and `complete_all` are
/// permissive: an unknown list behaves like an empty one.
#[async_trait]
pub trait TodoStore: Send + Sync {
    async fn create_list(&self, name: ListName) -> Result<TodoList, DbError>;

    /// Fails with `DbError::Integrity` when `list_id` names no list.
    async fn create_item(
        &self,
        list_id: ListId,
        description: ItemDescription,
    ) -> Result<Todo, DbError>;

    async fn get_list(&self, list_id: ListId) -> Result<TodoList, DbError>;

    async fn get_item(&self, item_id: ItemId) -> Result<Todo, DbError>;

    /// Items ordered by id; empty for an unknown list.
    async fn list_items(&self, list_id: ListId) -> Result<Vec<Todo>, DbError>;

    async fn set_item_completed(&self, item_id: ItemId, completed: bool)
        -> Result<Todo, DbError>;

    /// Number of items marked; 0 for an unknown list.
    async fn complete_all(&self, list_id: ListId) -> Result<u64, DbError>;

    async fn delete_item(&self, item_id: ItemId) -> Result<(), DbError>;

    /// Removes the list and all of its items.
    async fn delete_list(&self, list_id: ListId) -> Result<(), DbError>;

    /// All lists ordered by id.
    async fn all_lists(&self) -> Result<Vec<TodoList>, DbError>;

    async fn first_list(&self) -> Result<Option<TodoList>, DbError>;

    /// Check the backend is reachable.
    async fn ping(&self) -> Result<(), DbError>;
}

/// PostgreSQL-backed store
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TodoStore for PgStore {
    async fn create_list(&self, name: ListName) -> Result<TodoList, DbError> {
        ListRepo::new(&self.pool).create(name).await
    }

    async fn create_item(
        &self,
        list_id: ListId,
        description: ItemDescription,
    ) -> Result<Todo, DbError> {
        ItemRepo::new(&self.pool).create(list_id, description).await
    }

    async fn get_list(&self, list_id: ListId) -> Result<TodoList, DbError> {
        ListRepo::new(&self.pool).get(list_id).await
    }

    async fn get_item(&self, item_id: ItemId) -> Result<Todo, DbError> {
        ItemRepo::new(&self.pool).get(item_id).await
    }

    async fn list_items(&self, list_id: ListId) -> Result<Vec<Todo>, DbError> {
        ItemRepo::new(&self.pool).list_for(list_id).await
    }

    async fn set_item_completed(
        &self,
        item_id: ItemId,
        completed: bool,
    ) -> Result<Todo, DbError> {
        ItemRepo::new(&self.pool).set_completed(item_id, completed).await
    }

    async fn complete_all(&self, list_id: ListId) -> Result<u64, DbError> {
        ItemRepo::new(&self.pool).complete_all(list_id).await
    }

    async fn delete_item(&self, item_id: ItemId) -> Result<(), DbError> {
        ItemRepo::new(&self.pool).delete(item_id).await
    }

    async fn delete_list(&self, list_id: ListId) -> Result<(), DbError> {
        ListRepo::new(&self.pool).delete(list_id).await
    }

    async fn all_lists(&self) -> Result<Vec<TodoList>, DbError> {
        ListRepo::new(&self.pool).all().await
    }

    async fn first_list(&self) -> Result<Option<TodoList>, DbError> {
        ListRepo::new(&self.pool).first().await
    }

    async fn ping(&self) -> Result<(), DbError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
