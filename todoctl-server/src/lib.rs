//! todoctl-server: HTTP server for multi-list to-do tracking
//!
//! Lists own items; items carry a description and a completion flag.
//! Storage is PostgreSQL (or an in-memory store with the same contract),
//! exposed through a small JSON API and one rendered list page.

pub mod db;
pub mod http;
pub mod models;

pub use db::{DbError, MemoryStore, PgStore, TodoStore};
pub use http::{build_router, run_server, AppState, ServerConfig};
