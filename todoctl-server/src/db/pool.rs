//! Database connection pool management
//!
//! Uses sqlx PgPool with explicit connection limits.

use std::time::Duration;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

/// Default maximum connections for the pool.
/// Kept low for single-user tooling.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Connections older than this are closed and replaced.
const POOL_RECYCLE: Duration = Duration::from_secs(30);

/// Create a PostgreSQL connection pool.
///
/// # Errors
///
/// Returns an error if the connection fails.
///
/// # Example
///
/// ```ignore
/// let pool = create_pool("postgres://localhost/todoapp").await?;
/// ```
pub async fn create_pool(database_url: &str) -> Result<PgPool, sqlx::Error> {
    create_pool_with_options(database_url, DEFAULT_MAX_CONNECTIONS).await
}

/// Create a PostgreSQL connection pool with custom options.
///
/// # Arguments
///
/// * `database_url` - PostgreSQL connection string
/// * `max_connections` - Maximum number of connections in the pool
pub async fn create_pool_with_options(
    database_url: &str,
    max_connections: u32,
) -> Result<PgPool, sqlx::Error> {
    pool_options(max_connections).connect(database_url).await
}

fn pool_options(max_connections: u32) -> PgPoolOptions {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .max_lifetime(POOL_RECYCLE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connections_are_recycled() {
        let options = pool_options(DEFAULT_MAX_CONNECTIONS);
        assert_eq!(options.get_max_lifetime(), Some(POOL_RECYCLE));
        assert_eq!(options.get_max_connections(), DEFAULT_MAX_CONNECTIONS);
    }

    // Run with: DATABASE_URL=postgres://... cargo test -p todoctl-server -- --ignored
    #[tokio::test]
    #[ignore = "requires database"]
    async fn created_pool_keeps_limits() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = create_pool_with_options(&url, 3)
            .await
            .expect("pool creation failed");

        assert_eq!(pool.options().get_max_lifetime(), Some(POOL_RECYCLE));
        assert_eq!(pool.options().get_max_connections(), 3);
        pool.close().await;
    }
}
