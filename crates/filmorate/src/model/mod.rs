//! Pure data structures (DTOs) implementing the [`ActorEntity`](actor_framework::ActorEntity) trait.
//!
//! Field names serialize in camelCase (`releaseDate`) and dates as `YYYY-MM-DD`.

pub mod film;
pub mod user;

pub use film::*;
pub use user::*;

/// Returns the value only if it has visible content.
///
/// Update requests treat a missing field and a whitespace-only field the same
/// way: both keep the stored value.
pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
