//! # Peers
//!
//! Read-only view of the entities a `ResourceActor` currently stores. Hooks
//! receive it so they can enforce rules that span the whole collection, such
//! as "no two users share an email".

use crate::entity::ActorEntity;
use std::collections::HashMap;

/// Borrowed view over the actor's store.
///
/// During an update the view still holds the *previous* version of the entity
/// being updated; the candidate only replaces it once every hook succeeds.
pub struct Peers<'a, T: ActorEntity> {
    store: &'a HashMap<T::Id, T>,
}

impl<'a, T: ActorEntity> Peers<'a, T> {
    pub fn new(store: &'a HashMap<T::Id, T>) -> Self {
        Self { store }
    }

    /// Returns `true` if any stored entity satisfies `predicate`.
    pub fn any(&self, predicate: impl FnMut(&T) -> bool) -> bool {
        self.store.values().any(predicate)
    }
}

// Copy for any `T`, not only `T: Copy`.
impl<T: ActorEntity> Clone for Peers<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ActorEntity> Copy for Peers<'_, T> {}
