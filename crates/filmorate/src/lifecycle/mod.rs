//! # System Lifecycle
//!
//! Starts the two registries, hands out their clients and stops them again.
//!
//! Each registry is created first and then started with its context:
//!
//! - the film actor needs nothing (`Context = ()`)
//! - the user actor needs a [`UserContext`](crate::user_actor::UserContext) clock
//!
//! ## Shutdown
//!
//! 1. **Drop the clients** held by [`RegistrySystem`], closing the channel senders.
//! 2. **Actors drain** whatever is still queued, then `recv()` returns `None`.
//! 3. **Await the tasks**, up to a grace period.
//!
//! Clones handed to HTTP workers also keep a channel open, so the grace
//! period bounds how long shutdown waits for them.
//!
//! ## Tracing
//!
//! [`setup_tracing`] installs the subscriber once per process:
//!
//! ```bash
//! RUST_LOG=info filmorate     # lifecycle and outcomes
//! RUST_LOG=debug filmorate    # request payloads
//! ```

pub mod registry_system;
pub mod tracing;

pub use registry_system::*;
pub use self::tracing::setup_tracing;
