//! PostgreSQL repositories
//!
//! Each repository follows these patterns:
//! - Writes run inside a transaction, committed only on success
//! - Existence checks come from `RETURNING` / `rows_affected`, never a
//!   separate SELECT
//! - Foreign-key failures surface as `DbError::Integrity`

pub mod items;
pub mod lists;

pub use items::ItemRepo;
pub use lists::ListRepo;
