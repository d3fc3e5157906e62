//! # Film Client
//!
//! High-level API for the film registry.

use crate::film_actor::FilmError;
use crate::model::{Film, FilmCreate, FilmUpdate};
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Film actor.
#[derive(Clone)]
pub struct FilmClient {
    inner: ResourceClient<Film>,
}

impl FilmClient {
    pub fn new(inner: ResourceClient<Film>) -> Self {
        Self { inner }
    }

    /// Every stored film, in no particular order.
    #[instrument(skip(self))]
    pub async fn list_films(&self) -> Result<Vec<Film>, FilmError> {
        self.list().await
    }

    /// Validates and stores a new film, returning it with its assigned id.
    #[instrument(skip(self))]
    pub async fn create_film(&self, params: FilmCreate) -> Result<Film, FilmError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Merges `update` into the film named by `update.id`.
    ///
    /// A request without an id is rejected here and never reaches the actor.
    #[instrument(skip(self))]
    pub async fn update_film(&self, update: FilmUpdate) -> Result<Film, FilmError> {
        let id = update
            .id
            .ok_or_else(|| FilmError::validation("film id is required for update"))?;
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(Self::map_error)
    }
}

#[async_trait]
impl ActorClient<Film> for FilmClient {
    type Error = FilmError;

    fn inner(&self) -> &ResourceClient<Film> {
        &self.inner
    }

    fn map_error(e: FrameworkError<FilmError>) -> FilmError {
        match e {
            FrameworkError::Entity(e) => e,
            FrameworkError::NotFound(id) => FilmError::NotFound(id),
            other => FilmError::ActorCommunication(other.to_string()),
        }
    }
}
