//! # Generic Messages
//!
//! The message types exchanged between the `ResourceClient` and `ResourceActor`.

use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use tokio::sync::oneshot;

/// One-shot response channel used by actors to answer a request.
pub type Response<T, E> = oneshot::Sender<Result<T, FrameworkError<E>>>;

/// Shorthand for the response channel of entity `T` carrying a `V`.
pub type EntityResponse<T, V> = Response<V, <T as ActorEntity>::Error>;

/// Request sent to a `ResourceActor`.
///
/// # Resource-Oriented Architecture
/// Every registry speaks the same small vocabulary instead of ad-hoc
/// messages per resource:
///
/// - **List**: every stored entity, unordered.
/// - **Get**: one entity by id, `None` if absent.
/// - **Create**: build from [`ActorEntity::Create`], allocate an id, store, return the stored entity.
/// - **Update**: merge [`ActorEntity::Update`] into the stored entity, return the result.
///
/// There is no delete: entities live for as long as the actor does.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    List {
        respond_to: EntityResponse<T, Vec<T>>,
    },
    Get {
        id: T::Id,
        respond_to: EntityResponse<T, Option<T>>,
    },
    Create {
        params: T::Create,
        respond_to: EntityResponse<T, T>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: EntityResponse<T, T>,
    },
}
