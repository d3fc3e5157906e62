//! # Generic Actor Server
//!
//! This module defines the `ResourceActor`, the component that owns a registry's
//! entities. It is the "Server" side of the Actor Model: requests are processed one at a
//! time, so the store needs no lock and id allocation cannot race.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::id::next_id;
use crate::message::ResourceRequest;
use crate::peers::Peers;
use std::collections::HashMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that manages a collection of entities.
///
/// It owns the state (`store`) and the receiver end of the channel. Each actor
/// runs in its own Tokio task and handles a single request at a time; this
/// sequential loop is the mutual-exclusion boundary around the store.
///
/// # Usage Pattern
///
/// 1.  **Create**: `ResourceActor::new()` returns the `actor` (server) and `client` (interface).
/// 2.  **Wire**: pass dependencies into `actor.run(context)`.
/// 3.  **Run**: spawn the run loop in a background task.
///
/// ```rust
/// use actor_framework::{ActorEntity, Peers, ResourceActor};
/// use async_trait::async_trait;
///
/// #[derive(Clone, Debug)] struct Tag { id: u32, label: String }
/// #[derive(Debug)] struct TagCreate { label: String }
/// #[derive(Debug)] struct TagUpdate { label: Option<String> }
/// #[derive(Debug, thiserror::Error)] #[error("tag error")] struct TagError;
///
/// #[async_trait]
/// impl ActorEntity for Tag {
///     type Id = u32;
///     type Create = TagCreate;
///     type Update = TagUpdate;
///     type Context = ();
///     type Error = TagError;
///
///     fn from_create_params(id: u32, params: TagCreate) -> Result<Self, TagError> {
///         Ok(Self { id, label: params.label })
///     }
///
///     async fn on_update(&mut self, update: TagUpdate, _: Peers<'_, Self>, _: &()) -> Result<(), TagError> {
///         if let Some(label) = update.label { self.label = label; }
///         Ok(())
///     }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = ResourceActor::<Tag>::new(10);
///     tokio::spawn(actor.run(()));
///
///     let tag = client.create(TagCreate { label: "noir".into() }).await.unwrap();
///     assert_eq!(tag.id, 1);
/// }
/// ```
///
/// # Operations
///
/// * **List**: clones every stored entity.
/// * **Get**: clones the entity with the given id, if any.
/// * **Create**:
///     1. Allocates `max(stored ids) + 1` (or the first id for an empty store);
///        `IdsExhausted` if the maximum has no successor.
///     2. Calls `T::from_create_params`, then `on_create` with a [`Peers`] view.
///     3. Inserts the entity and returns a copy of it.
/// * **Update**:
///     1. Clones the stored entity (`NotFound` if absent).
///     2. Calls `on_update` on the clone with a [`Peers`] view.
///     3. Writes the clone back only if the hook succeeded.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: HashMap<T::Id, T>,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` and its associated `ResourceClient`.
    ///
    /// `buffer_size` is the capacity of the request channel (at least 1); when
    /// it is full, client calls wait for room.
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size.max(1));
        let actor = Self {
            receiver,
            store: HashMap::new(),
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Runs the actor's event loop, processing messages until every client is dropped.
    ///
    /// `context` is lent to every entity hook for the lifetime of the loop.
    pub async fn run(mut self, context: T::Context) {
        let entity_type = entity_type::<T>();
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::List { respond_to } => {
                    let items: Vec<T> = self.store.values().cloned().collect();
                    debug!(entity_type, size = items.len(), "List");
                    let _ = respond_to.send(Ok(items));
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    debug!(entity_type, %id, found = item.is_some(), "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let result = self.create(params, &context).await;
                    if let Err(e) = &result {
                        warn!(entity_type, error = %e, "Create failed");
                    }
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?update, "Update");
                    let result = self.update(&id, update, &context).await;
                    match &result {
                        Ok(_) => info!(entity_type, %id, "Updated"),
                        Err(e) => warn!(entity_type, %id, error = %e, "Update failed"),
                    }
                    let _ = respond_to.send(result);
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }

    async fn create(
        &mut self,
        params: T::Create,
        context: &T::Context,
    ) -> Result<T, FrameworkError<T::Error>> {
        let id = next_id(self.store.keys().copied()).ok_or(FrameworkError::IdsExhausted)?;
        let mut item = T::from_create_params(id, params).map_err(FrameworkError::Entity)?;
        item.on_create(Peers::new(&self.store), context)
            .await
            .map_err(FrameworkError::Entity)?;
        self.store.insert(id, item.clone());
        info!(entity_type = entity_type::<T>(), %id, size = self.store.len(), "Created");
        Ok(item)
    }

    async fn update(
        &mut self,
        id: &T::Id,
        update: T::Update,
        context: &T::Context,
    ) -> Result<T, FrameworkError<T::Error>> {
        let Some(mut candidate) = self.store.get(id).cloned() else {
            return Err(FrameworkError::NotFound(id.to_string()));
        };
        candidate
            .on_update(update, Peers::new(&self.store), context)
            .await
            .map_err(FrameworkError::Entity)?;
        self.store.insert(*id, candidate.clone());
        Ok(candidate)
    }
}

/// Short type name used as the `entity_type` log field ("Film" rather than
/// "filmorate::model::film::Film").
fn entity_type<T>() -> &'static str {
    std::any::type_name::<T>()
        .rsplit("::")
        .next()
        .unwrap_or("Unknown")
}
