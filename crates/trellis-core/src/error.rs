//! Error types for the goal store library.

use thiserror::Error;

use crate::models::GoalId;

/// Comprehensive error type for all goal store operations.
#[derive(Error, Debug)]
pub enum GoalError {
    /// Goal not found for the given ID
    #[error("Goal with ID {id} not found")]
    GoalNotFound { id: GoalId },
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    Validation { field: String, reason: String },
    /// Snapshot failed referential-integrity validation on load
    #[error("Corrupt snapshot: {message}")]
    Corrupt { message: String },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
}

/// Builder for creating input validation errors.
pub struct ValidationBuilder {
    field: String,
}

impl ValidationBuilder {
    /// Create a new validation error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> GoalError {
        GoalError::Validation {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl GoalError {
    /// Creates a builder for input validation errors.
    pub fn validation(field: impl Into<String>) -> ValidationBuilder {
        ValidationBuilder::new(field)
    }

    /// Creates a not-found error for the given goal ID.
    pub fn not_found(id: GoalId) -> Self {
        Self::GoalNotFound { id }
    }

    /// Creates a corrupt-snapshot error with a message.
    pub fn corrupt(message: impl Into<String>) -> Self {
        Self::Corrupt {
            message: message.into(),
        }
    }
}

/// Result type alias for goal store operations
pub type Result<T> = std::result::Result<T, GoalError>;
