//! Validation result types
//!
//! Defines the outcome returned by the validator.

use std::fmt;

/// Form field a validation error is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    EmailAddress,
    Password,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::EmailAddress => write!(f, "email address"),
            Field::Password => write!(f, "password"),
        }
    }
}

/// Result of validating a submitted snapshot.
///
/// At most one problem is reported: the first rule that fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    Invalid { field: Field, message: String },
    Valid { email_address: String, password: String },
}

impl ValidationResult {
    pub fn invalid(field: Field, message: impl Into<String>) -> Self {
        ValidationResult::Invalid {
            field,
            message: message.into(),
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid { .. })
    }

    /// Field the error belongs to, `None` when valid.
    pub fn field(&self) -> Option<Field> {
        match self {
            ValidationResult::Invalid { field, .. } => Some(*field),
            ValidationResult::Valid { .. } => None,
        }
    }

    /// Error message, `None` when valid.
    pub fn message(&self) -> Option<&str> {
        match self {
            ValidationResult::Invalid { message, .. } => Some(message),
            ValidationResult::Valid { .. } => None,
        }
    }
}
