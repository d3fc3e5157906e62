//! # Actor Framework
//!
//! Building blocks for in-memory registries run as actors. Each registry is a
//! **Resource-Oriented** actor: a Tokio task that owns a keyed store of one entity type and
//! answers a fixed vocabulary of requests (list, get, create, update).
//!
//! ## Why ROA + Actor Model?
//!
//! ### Resource-Oriented Architecture (ROA)
//!
//! - The same operations on every resource
//! - Predictable lifecycle: created once, merged on update, never deleted
//!
//! ### Actor Model
//!
//! - Isolated state (no shared memory, no locks)
//! - Message-passing concurrency
//! - Sequential processing within each actor: id allocation (`max + 1`) and
//!   uniqueness checks see a consistent store
//!
//! ## Architecture Overview
//!
//! 1. **Entity Layer** ([`ActorEntity`]) - construction, validation and merge rules
//! 2. **Runtime Layer** ([`ResourceActor`]) - message loop, id allocation, the store
//! 3. **Interface Layer** ([`ResourceClient`], [`ActorClient`]) - typed async calls
//!
//! ## Core Abstractions
//!
//! ```rust
//! use actor_framework::{ActorEntity, Peers, ResourceActor};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug)]
//! struct Studio {
//!     id: u64,
//!     name: String,
//! }
//!
//! #[derive(Debug)] struct StudioCreate { name: String }
//! #[derive(Debug)] struct StudioUpdate { name: Option<String> }
//!
//! #[derive(Debug, thiserror::Error)]
//! enum StudioError {
//!     #[error("studio name already taken: {0}")]
//!     Duplicate(String),
//! }
//!
//! #[async_trait]
//! impl ActorEntity for Studio {
//!     type Id = u64;
//!     type Create = StudioCreate;
//!     type Update = StudioUpdate;
//!     type Context = ();
//!     type Error = StudioError;
//!
//!     fn from_create_params(id: u64, params: StudioCreate) -> Result<Self, StudioError> {
//!         Ok(Self { id, name: params.name })
//!     }
//!
//!     async fn on_create(&mut self, peers: Peers<'_, Self>, _: &()) -> Result<(), StudioError> {
//!         if peers.any(|s| s.name == self.name) {
//!             return Err(StudioError::Duplicate(self.name.clone()));
//!         }
//!         Ok(())
//!     }
//!
//!     async fn on_update(&mut self, update: StudioUpdate, _: Peers<'_, Self>, _: &()) -> Result<(), StudioError> {
//!         if let Some(name) = update.name { self.name = name; }
//!         Ok(())
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = ResourceActor::<Studio>::new(10);
//!     tokio::spawn(actor.run(()));
//!
//!     let first = client.create(StudioCreate { name: "Lenfilm".into() }).await.unwrap();
//!     assert_eq!(first.id, 1);
//!
//!     let again = client.create(StudioCreate { name: "Lenfilm".into() }).await;
//!     assert!(again.is_err());
//!
//!     assert_eq!(client.list().await.unwrap().len(), 1);
//! }
//! ```
//!
//! ## Context Injection
//!
//! Dependencies (a clock, other clients) are passed to `run()` rather than `new()`, and
//! every hook receives them as `&Self::Context`.
//!
//! ## Testing
//!
//! The [`mock`] module provides `MockClient`, a fake actor driven by expectations, for
//! testing the code that sits in front of a client.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod id;
pub mod message;
pub mod mock;
pub mod peers;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use id::SequentialId;
pub use message::{EntityResponse, ResourceRequest, Response};
pub use peers::Peers;
