//! Database layer - connection pool, migrations, and stores
//!
//! # Design Principles
//!
//! - Connection pool (max 5 connections by default, recycled every 30s)
//! - Referential integrity lives in the schema (FK + ON DELETE CASCADE)
//! - One transaction per mutating operation
//! - `TodoStore` is the seam the HTTP layer talks to; `PgStore` and
//!   `MemoryStore` implement the same contract

pub mod error;
pub mod memory;
pub mod migrations;
pub mod pool;
pub mod repos;
pub mod store;

pub use error::DbError;
pub use memory::MemoryStore;
pub use pool::{create_pool, create_pool_with_options};
pub use repos::{ItemRepo, ListRepo};
pub use store::{PgStore, TodoStore};
