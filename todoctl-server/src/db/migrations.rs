//! Schema migrations for the list and item tables
//!
//! Every statement is idempotent, so running on each startup is safe.

use sqlx::PgPool;

use super::DbError;

/// Run all migrations
pub async fn run(pool: &PgPool) -> Result<(), DbError> {
    tracing::info!("Running todo migrations...");

    let mut tx = pool.begin().await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS todolist (
            id SERIAL PRIMARY KEY,
            name VARCHAR NOT NULL
        )
        "#,
    )
    .execute(&mut *tx)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS todo (
            id SERIAL PRIMARY KEY,
            description VARCHAR NOT NULL,
            completed BOOLEAN NOT NULL DEFAULT FALSE,
            todolist_id INTEGER NOT NULL REFERENCES todolist(id) ON DELETE CASCADE
        )
        "#,
    )
    .execute(&mut *tx)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_todo_todolist_id ON todo(todolist_id)")
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;

    tracing::info!("Todo migrations complete");
    Ok(())
}
