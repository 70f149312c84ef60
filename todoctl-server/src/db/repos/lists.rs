//! To-do list repository
//!
//! Deleting a list relies on `ON DELETE CASCADE` to remove its items in the
//! same statement.

use sqlx::PgPool;

use crate::db::DbError;
use crate::models::{ListId, ListName, TodoList};

/// To-do list repository
pub struct ListRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> ListRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new list and return it with its generated id.
    pub async fn create(&self, name: ListName) -> Result<TodoList, DbError> {
        let mut tx = self.pool.begin().await?;

        let list: TodoList = sqlx::query_as(
            r#"
            INSERT INTO todolist (name)
            VALUES ($1)
            RETURNING id, name
            "#,
        )
        .bind(name.as_str())
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        tracing::debug!(list_id = list.id, "created todo list");
        Ok(list)
    }

    /// Get a single list by id.
    pub async fn get(&self, id: ListId) -> Result<TodoList, DbError> {
        sqlx::query_as("SELECT id, name FROM todolist WHERE id = $1")
            .bind(id)
            .fetch_optional(self.pool)
            .await?
            .ok_or_else(|| DbError::not_found("todo list", id))
    }

    /// All lists, oldest first.
    pub async fn all(&self) -> Result<Vec<TodoList>, DbError> {
        let lists = sqlx::query_as("SELECT id, name FROM todolist ORDER BY id ASC")
            .fetch_all(self.pool)
            .await?;
        Ok(lists)
    }

    /// The list with the lowest id, if any exist.
    pub async fn first(&self) -> Result<Option<TodoList>, DbError> {
        let list = sqlx::query_as("SELECT id, name FROM todolist ORDER BY id ASC LIMIT 1")
            .fetch_optional(self.pool)
            .await?;
        Ok(list)
    }

    /// Delete a list and, through the FK cascade, all of its items.
    pub async fn delete(&self, id: ListId) -> Result<(), DbError> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query("DELETE FROM todolist WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("todo list", id));
        }

        tx.commit().await?;
        tracing::debug!(list_id = id, "deleted todo list");
        Ok(())
    }
}
