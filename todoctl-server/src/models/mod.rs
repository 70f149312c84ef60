//! Domain models with validation at construction
//!
//! User input is validated when creating the newtypes here.
//! Invalid input returns ValidationError, not panic.

pub mod validation;
pub mod list;
pub mod item;

pub use validation::ValidationError;
pub use list::{ListId, ListName, TodoList};
pub use item::{ItemDescription, ItemId, Todo};
