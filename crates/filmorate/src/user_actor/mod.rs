//! # User Actor
//!
//! The user registry: a [`ResourceActor`] holding [`User`] entities.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](actor_framework::ActorEntity) implementation for [`User`]
//! - [`error`] - [`UserError`] type for type-safe error handling
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Context
//!
//! The actor runs with a [`UserContext`]: the clock that decides whether a
//! birthday lies in the future. Production code passes
//! [`mockable::DefaultClock`]; tests pin the date with their own clock.
//!
//! ```rust
//! use chrono::NaiveDate;
//! use filmorate::model::UserCreate;
//! use filmorate::user_actor::{self, UserContext};
//! use mockable::DefaultClock;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, client) = user_actor::new(32);
//!     let clock: UserContext = Arc::new(DefaultClock);
//!     tokio::spawn(actor.run(clock));
//!
//!     let user = client
//!         .create_user(UserCreate {
//!             email: Some("andrei@example.com".into()),
//!             login: Some("tarkovsky".into()),
//!             name: None,
//!             birthday: NaiveDate::from_ymd_opt(1932, 4, 4),
//!         })
//!         .await?;
//!     assert_eq!(user.name, "tarkovsky");
//!     Ok(())
//! }
//! ```

pub mod entity;
pub mod error;

pub use entity::UserContext;
pub use error::*;

use crate::clients::UserClient;
use crate::model::User;
use actor_framework::ResourceActor;

/// Creates a new User actor and its client.
pub fn new(mailbox_capacity: usize) -> (ResourceActor<User>, UserClient) {
    let (actor, generic_client) = ResourceActor::new(mailbox_capacity);
    (actor, UserClient::new(generic_client))
}
