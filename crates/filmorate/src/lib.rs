//! # Filmorate
//!
//! In-memory film and user registries, each owned by a
//! [`ResourceActor`](actor_framework::ResourceActor), with an HTTP + JSON
//! binding on top.
//!
//! - **[model]**: [`Film`](model::Film) and [`User`](model::User) with their create/update payloads.
//! - **[film_actor]** / **[user_actor]**: validation and merge rules for each registry.
//! - **[clients]**: typed handles ([`FilmClient`](clients::FilmClient), [`UserClient`](clients::UserClient)).
//! - **[lifecycle]**: [`RegistrySystem`](lifecycle::RegistrySystem) start-up and shutdown, tracing setup.
//! - **[http]**: actix-web handlers and error mapping.
//! - **[config]**: command-line and environment settings.

pub mod clients;
pub mod config;
pub mod film_actor;
pub mod http;
pub mod lifecycle;
pub mod model;
pub mod user_actor;
