//! To-do item repository
//!
//! `list_for` and `complete_all` do not check that the list exists: an
//! unknown list simply has no items.

use sqlx::PgPool;

use crate::db::DbError;
use crate::models::{ItemDescription, ItemId, ListId, Todo};

const ITEM_COLUMNS: &str = "id, description, completed, todolist_id";

/// To-do item repository
pub struct ItemRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> ItemRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new, incomplete item under `list_id`.
    ///
    /// A `list_id` with no matching list fails the FK constraint and is
    /// reported as `DbError::Integrity`.
    pub async fn create(
        &self,
        list_id: ListId,
        description: ItemDescription,
    ) -> Result<Todo, DbError> {
        let mut tx = self.pool.begin().await?;

        let item: Todo = sqlx::query_as(&format!(
            r#"
            INSERT INTO todo (description, completed, todolist_id)
            VALUES ($1, FALSE, $2)
            RETURNING {ITEM_COLUMNS}
            "#
        ))
        .bind(description.as_str())
        .bind(list_id)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        tracing::debug!(list_id, item_id = item.id, "created todo item");
        Ok(item)
    }

    /// Get a single item by id.
    pub async fn get(&self, id: ItemId) -> Result<Todo, DbError> {
        sqlx::query_as(&format!("SELECT {ITEM_COLUMNS} FROM todo WHERE id = $1"))
            .bind(id)
            .fetch_optional(self.pool)
            .await?
            .ok_or_else(|| DbError::not_found("todo", id))
    }

    /// Items of a list ordered by id.
    pub async fn list_for(&self, list_id: ListId) -> Result<Vec<Todo>, DbError> {
        let items = sqlx::query_as(&format!(
            "SELECT {ITEM_COLUMNS} FROM todo WHERE todolist_id = $1 ORDER BY id ASC"
        ))
        .bind(list_id)
        .fetch_all(self.pool)
        .await?;
        Ok(items)
    }

    /// Set the completion flag on one item.
    pub async fn set_completed(&self, id: ItemId, completed: bool) -> Result<Todo, DbError> {
        let mut tx = self.pool.begin().await?;

        let item: Todo = sqlx::query_as(&format!(
            "UPDATE todo SET completed = $2 WHERE id = $1 RETURNING {ITEM_COLUMNS}"
        ))
        .bind(id)
        .bind(completed)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| DbError::not_found("todo", id))?;

        tx.commit().await?;
        Ok(item)
    }

    /// Mark every item of a list completed, returning how many rows matched.
    pub async fn complete_all(&self, list_id: ListId) -> Result<u64, DbError> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query("UPDATE todo SET completed = TRUE WHERE todolist_id = $1")
            .bind(list_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        tracing::debug!(list_id, count = result.rows_affected(), "completed all items");
        Ok(result.rows_affected())
    }

    /// Delete one item.
    pub async fn delete(&self, id: ItemId) -> Result<(), DbError> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query("DELETE FROM todo WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("todo", id));
        }

        tx.commit().await?;
        tracing::debug!(item_id = id, "deleted todo item");
        Ok(())
    }
}
