//! To-do item record and description validation

use serde::Serialize;
use sqlx::FromRow;

use super::list::ListId;
use super::validation::{require_text, ValidationError};

/// Primary key of the `todo` table
pub type ItemId = i32;

/// To-do item record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct Todo {
    pub id: ItemId,
    pub description: String,
    pub completed: bool,
    pub todolist_id: ListId,
}

/// Validated item description (non-empty)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ItemDescription(String);

impl ItemDescription {
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        Self::from_field(Some(s))
    }

    /// Validate an optional request field; `None` means the field was missing.
    pub fn from_field(value: Option<&str>) -> Result<Self, ValidationError> {
        require_text("description", value).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_description() {
        let desc = ItemDescription::new("Milk").unwrap();
        assert_eq!(desc.as_str(), "Milk");
    }

    #[test]
    fn rejects_empty_and_missing() {
        assert!(matches!(
            ItemDescription::new("").unwrap_err(),
            ValidationError::Empty { field: "description" }
        ));
        assert!(matches!(
            ItemDescription::from_field(None).unwrap_err(),
            ValidationError::Missing { field: "description" }
        ));
    }
}
