//! Validation error types

use std::fmt;

/// Validation error for request input and domain models
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Required field absent from the request body
    Missing { field: &'static str },

    /// Field is empty when it shouldn't be
    Empty { field: &'static str },

    /// Body or field could not be parsed
    InvalidFormat { field: &'static str, reason: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing { field } => write!(f, "missing {}", field),
            Self::Empty { field } => write!(f, "{} cannot be empty", field),
            Self::InvalidFormat { field, reason } => write!(f, "{}: {}", field, reason),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Require a present, non-empty text field.
///
/// Whitespace is kept as-is; only the empty string is rejected.
pub(crate) fn require_text(
    field: &'static str,
    value: Option<&str>,
) -> Result<String, ValidationError> {
    match value {
        None => Err(ValidationError::Missing { field }),
        Some("") => Err(ValidationError::Empty { field }),
        Some(s) => Ok(s.to_owned()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ValidationError::Missing { field: "description" };
        assert_eq!(err.to_string(), "missing description");

        let err = ValidationError::Empty { field: "name" };
        assert_eq!(err.to_string(), "name cannot be empty");
    }

    #[test]
    fn require_text_cases() {
        assert_eq!(
            require_text("name", None),
            Err(ValidationError::Missing { field: "name" })
        );
        assert_eq!(
            require_text("name", Some("")),
            Err(ValidationError::Empty { field: "name" })
        );
        assert_eq!(require_text("name", Some(" x ")).as_deref(), Ok(" x "));
    }
}
