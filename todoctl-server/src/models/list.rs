//! To-do list record and name validation

use serde::Serialize;
use sqlx::FromRow;

use super::validation::{require_text, ValidationError};

/// Primary key of the `todolist` table
pub type ListId = i32;

/// To-do list record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct TodoList {
    pub id: ListId,
    pub name: String,
}

/// Validated list name (non-empty)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ListName(String);

impl ListName {
    /// Create a list name, rejecting the empty string.
    ///
    /// # Example
    /// ```
    /// use todoctl_server::models::ListName;
    ///
    /// assert!(ListName::new("Groceries").is_ok());
    /// assert!(ListName::new("").is_err());
    /// ```
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        Self::from_field(Some(s))
    }

    /// Validate an optional request field; `None` means the field was missing.
    pub fn from_field(value: Option<&str>) -> Result<Self, ValidationError> {
        require_text("name", value).map(Self)
    }

    /// Get the list name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume and return the inner string.
    pub fn into_string(self) -> String {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_any_non_empty_text() {
        assert!(ListName::new("Groceries").is_ok());
        assert!(ListName::new("weekend errands!").is_ok());
        assert!(ListName::new("a").is_ok());
    }

    #[test]
    fn rejects_empty() {
        let err = ListName::new("").unwrap_err();
        assert!(matches!(err, ValidationError::Empty { field: "name" }));
    }

    #[test]
    fn missing_field() {
        let err = ListName::from_field(None).unwrap_err();
        assert!(matches!(err, ValidationError::Missing { field: "name" }));
    }
}
