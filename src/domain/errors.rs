//! Domain validation errors.
//!
//! This module defines the error types for value object validation using
//! `thiserror` for precise error handling.

use thiserror::Error;

/// Errors that can occur during domain value object validation.
///
/// "Not found" outcomes in lookups and removals are deliberately *not* part
/// of this enum; those are expressed as `Option`/`bool` by the callers.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided name is empty or all-whitespace.
    #[error("Name cannot be empty")]
    EmptyName,

    /// The provided phone number is invalid.
    #[error("Invalid phone number: {0}")]
    InvalidPhone(String),

    /// Generic validation error with context
    #[error("Validation error: {0}")]
    Other(String),
}

/// Convenience type alias for Results with ValidationError
pub type ValidationResult<T> = Result<T, ValidationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ValidationError::EmptyName;
        assert_eq!(err.to_string(), "Name cannot be empty");

        let err = ValidationError::InvalidPhone("must contain exactly 10 digits".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid phone number: must contain exactly 10 digits"
        );

        let err = ValidationError::Other("unexpected".to_string());
        assert_eq!(err.to_string(), "Validation error: unexpected");
    }
}
