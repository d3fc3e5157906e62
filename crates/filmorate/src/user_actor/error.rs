//! Error types for the User actor.

use thiserror::Error;

/// Errors that can occur during user operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum UserError {
    /// The user data provided is invalid, including an email already in use.
    #[error("User validation error: {0}")]
    Validation(String),

    /// No user is stored under the requested id.
    #[error("User not found: {0}")]
    NotFound(String),

    /// The user registry could not be reached.
    #[error("Actor communication error: {0}")]
    ActorCommunication(String),
}

impl UserError {
    pub(crate) fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}
