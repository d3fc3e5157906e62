//! # ActorClient Trait
//!
//! Common interface for resource-specific clients: default `list` and `get`
//! built on the wrapped `ResourceClient`, with framework errors mapped into
//! the resource's own error type.
use crate::{ActorEntity, FrameworkError, ResourceClient};
use async_trait::async_trait;

/// Trait for resource-specific clients to inherit the read operations.
///
/// # Example
///
/// ```rust
/// use actor_framework::{ActorClient, ActorEntity, FrameworkError, Peers, ResourceClient};
/// use async_trait::async_trait;
///
/// #[derive(Clone, Debug)] struct Genre { id: u32 }
/// #[derive(Debug)] struct GenreCreate;
/// #[derive(Debug)] struct GenreUpdate;
/// #[derive(Debug, thiserror::Error)]
/// enum GenreError {
///     #[error("not found: {0}")] NotFound(String),
///     #[error("unavailable: {0}")] Unavailable(String),
/// }
///
/// #[async_trait]
/// impl ActorEntity for Genre {
///     type Id = u32; type Create = GenreCreate; type Update = GenreUpdate;
///     type Context = (); type Error = GenreError;
///     fn from_create_params(id: u32, _: GenreCreate) -> Result<Self, GenreError> { Ok(Self { id }) }
///     async fn on_update(&mut self, _: GenreUpdate, _: Peers<'_, Self>, _: &()) -> Result<(), GenreError> { Ok(()) }
/// }
///
/// struct GenreClient { inner: ResourceClient<Genre> }
///
/// #[async_trait]
/// impl ActorClient<Genre> for GenreClient {
///     type Error = GenreError;
///
///     fn inner(&self) -> &ResourceClient<Genre> { &self.inner }
///
///     fn map_error(e: FrameworkError<GenreError>) -> GenreError {
///         match e {
///             FrameworkError::Entity(e) => e,
///             FrameworkError::NotFound(id) => GenreError::NotFound(id),
///             other => GenreError::Unavailable(other.to_string()),
///         }
///     }
/// }
///
/// async fn usage(client: GenreClient) {
///     // list() and get() are provided automatically.
///     let _ = client.list().await;
///     let _ = client.get(1).await;
/// }
/// ```
#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    /// The resource-specific error type.
    type Error: Send + Sync;

    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T>;

    /// Map framework errors to the specific resource error type.
    fn map_error(e: FrameworkError<T::Error>) -> Self::Error;

    /// Fetch every stored entity.
    #[tracing::instrument(skip(self))]
    async fn list(&self) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().list().await.map_err(Self::map_error)
    }

    /// Fetch an entity by ID.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }
}
