//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    /// Draft context is below the minimum usable length
    #[error("Context too short: at least {minimum} characters required")]
    ContextTooShort { minimum: usize },

    /// Unknown tone name
    #[error("Invalid tone: {0}")]
    InvalidTone(String),

    /// Unknown relationship name
    #[error("Invalid relationship: {0}")]
    InvalidRelationship(String),

    /// Unknown length name
    #[error("Invalid length: {0}")]
    InvalidLength(String),

    /// Variation set has the wrong number of entries
    #[error("Expected {expected} email variations, got {actual}")]
    WrongVariationCount { expected: usize, actual: usize },

    /// A variation is missing a required field
    #[error("Email variation {position} is missing required field: {field}")]
    IncompleteVariation { position: usize, field: String },
}

impl DomainError {
    /// Create an incomplete-variation error for a 1-based position
    pub fn incomplete(position: usize, field: impl Into<String>) -> Self {
        Self::IncompleteVariation {
            position,
            field: field.into(),
        }
    }
}
