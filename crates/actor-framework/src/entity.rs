//! # ActorEntity Trait
//!
//! The `ActorEntity` trait is the contract every resource (Film, User, …) implements to be
//! managed by the generic `ResourceActor`. It names the id, the create/update DTOs, the
//! injected context and the error type, and provides the lifecycle hooks the actor calls.
//!
//! # Provided Methods (Hooks)
//! - [`ActorEntity::on_create`] defaults to `Ok(())`.
//!
//! [`ActorEntity::on_update`] has no default: every resource decides how an update
//! request merges into its stored state.

use crate::id::SequentialId;
use crate::peers::Peers;
use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any resource entity must implement to be managed by ResourceActor.
///
/// # Async & Context
/// Hooks are `#[async_trait]` and receive the `Context` handed to
/// [`ResourceActor::run`](crate::ResourceActor::run). Dependencies such as clocks or
/// other clients are bound late, when the actor starts, not when it is built.
///
/// # Peers
/// `on_create` and `on_update` also receive a [`Peers`] view of the store so
/// that collection-wide rules (uniqueness) are checked inside the actor task,
/// where no other request can interleave.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// The unique identifier for this entity, allocated as `max + 1`.
    type Id: SequentialId + Eq + Hash + Send + Sync + Display + Debug;

    /// The data required to create a new instance.
    type Create: Send + Sync + Debug;

    /// The data required to update an existing instance.
    type Update: Send + Sync + Debug;

    /// The runtime context (dependencies) injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// The error type for this entity.
    ///
    /// One enum per actor rather than one per message: clients deal with a
    /// single type and pattern-match on it.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Construct the full Entity from the allocated ID and the payload.
    /// This is called synchronously before `on_create`.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// Called after the entity is built and before it is stored.
    /// An error here discards the entity; nothing is inserted.
    async fn on_create(
        &mut self,
        _peers: Peers<'_, Self>,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Merges `update` into `self`.
    ///
    /// `self` is a copy of the stored entity. The actor only writes it back
    /// when this hook returns `Ok`, so a partial merge followed by an error
    /// leaves the store untouched.
    async fn on_update(
        &mut self,
        update: Self::Update,
        peers: Peers<'_, Self>,
        ctx: &Self::Context,
    ) -> Result<(), Self::Error>;
}
