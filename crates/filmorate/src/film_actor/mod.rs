//! # Film Actor
//!
//! The film registry: a [`ResourceActor`] holding [`Film`] entities.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](actor_framework::ActorEntity) implementation for [`Film`]
//!   with the validation rules
//! - [`error`] - [`FilmError`] type for type-safe error handling
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust
//! use chrono::NaiveDate;
//! use filmorate::film_actor;
//! use filmorate::model::FilmCreate;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, client) = film_actor::new(32);
//!
//!     // No dependencies, so context is ()
//!     tokio::spawn(actor.run(()));
//!
//!     let film = client
//!         .create_film(FilmCreate {
//!             name: Some("Stalker".into()),
//!             description: None,
//!             release_date: NaiveDate::from_ymd_opt(1979, 5, 25),
//!             duration: Some(161),
//!         })
//!         .await?;
//!     assert_eq!(film.id.0, 1);
//!     Ok(())
//! }
//! ```

pub mod entity;
pub mod error;

pub use entity::{min_release_date, MAX_DESCRIPTION_LENGTH};
pub use error::*;

use crate::clients::FilmClient;
use crate::model::Film;
use actor_framework::ResourceActor;

/// Creates a new Film actor and its client.
pub fn new(mailbox_capacity: usize) -> (ResourceActor<Film>, FilmClient) {
    let (actor, generic_client) = ResourceActor::new(mailbox_capacity);
    (actor, FilmClient::new(generic_client))
}
