//! Domain clients wrapping the generic [`ResourceClient`](actor_framework::ResourceClient).
//!
//! Each client adds the registry's named operations and maps
//! [`FrameworkError`](actor_framework::FrameworkError) into the registry's
//! own error type. `get` comes from [`ActorClient`](actor_framework::ActorClient).

pub mod film_client;
pub mod user_client;

pub use film_client::*;
pub use user_client::*;
