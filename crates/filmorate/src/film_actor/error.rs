//! Error types for the Film actor.

use thiserror::Error;

/// Errors that can occur during film operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum FilmError {
    /// The film data provided is missing a field or breaks a rule.
    #[error("Film validation error: {0}")]
    Validation(String),

    /// No film is stored under the requested id.
    #[error("Film not found: {0}")]
    NotFound(String),

    /// The film registry could not be reached.
    #[error("Actor communication error: {0}")]
    ActorCommunication(String),
}

impl FilmError {
    pub(crate) fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}
