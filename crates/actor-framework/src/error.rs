//! # Framework Errors
//!
//! Errors produced by the actor plumbing itself, plus a wrapper carrying the
//! entity's own error type out of its lifecycle hooks.

/// Errors that can occur while talking to a `ResourceActor`.
///
/// `E` is the entity's error type ([`ActorEntity::Error`](crate::ActorEntity::Error)).
/// Keeping it generic lets resource clients recover the exact domain error
/// instead of downcasting a boxed trait object.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum FrameworkError<E> {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("No identifiers left to allocate")]
    IdsExhausted,
    #[error(transparent)]
    Entity(E),
}
