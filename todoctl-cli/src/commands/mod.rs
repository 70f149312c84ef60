//! Command implementations for the todoctl CLI

pub mod migrate;
pub mod serve;

pub use migrate::run_migrate;
pub use serve::run_serve;

use anyhow::{Context, Result};

/// Resolve the database URL from the flag (clap already folds in the
/// `DATABASE_URL` env var, including values loaded from `.env`).
fn require_database_url(arg: Option<String>) -> Result<String> {
    arg.filter(|url| !url.is_empty())
        .context("DATABASE_URL not set. Set via --database-url, DATABASE_URL env, or .env")
}
