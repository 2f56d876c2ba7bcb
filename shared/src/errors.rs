//! Error types for the Fitness Tracker
//!
//! Stores never fail; these errors are produced by the validation layer that
//! callers run before dispatching an action.

use thiserror::Error;

/// Input validation errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Invalid {field}: {message}")]
    Field {
        field: &'static str,
        message: String,
    },

    #[error("Validation failed: {0}")]
    Rules(#[from] validator::ValidationErrors),
}

impl ValidationError {
    /// Build a field-level error
    pub fn field(field: &'static str, message: impl Into<String>) -> Self {
        Self::Field {
            field,
            message: message.into(),
        }
    }

    /// Name of the offending field, when known
    pub fn field_name(&self) -> Option<&'static str> {
        match self {
            Self::Field { field, .. } => Some(field),
            Self::Rules(_) => None,
        }
    }
}
