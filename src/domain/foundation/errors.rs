//! Error types for the domain layer.

use thiserror::Error;

/// Errors that occur while validating user-supplied values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField {
            field: field.into(),
        }
    }

    /// Creates an invalid format validation error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_field_names_the_field() {
        let err = ValidationError::empty_field("title");
        assert!(err.to_string().contains("title"));
        assert!(err.to_string().contains("cannot be empty"));
    }

    #[test]
    fn invalid_format_carries_reason() {
        let err = ValidationError::invalid_format("state_transition", "bad edge");
        assert!(err.to_string().contains("bad edge"));
    }
}
