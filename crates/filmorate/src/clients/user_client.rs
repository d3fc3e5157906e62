//! # User Client
//!
//! High-level API for the user registry.
use crate::model::{User, UserCreate, UserUpdate};
use crate::user_actor::UserError;
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the User actor.
#[derive(Clone)]
pub struct UserClient {
    inner: ResourceClient<User>,
}

impl UserClient {
    pub fn new(inner: ResourceClient<User>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn list_users(&self) -> Result<Vec<User>, UserError> {
        self.list().await
    }

    #[instrument(skip(self))]
    pub async fn create_user(&self, params: UserCreate) -> Result<User, UserError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Merges `update` into the user named by `update.id`.
    #[instrument(skip(self))]
    pub async fn update_user(&self, update: UserUpdate) -> Result<User, UserError> {
        let Some(id) = update.id else {
            return Err(UserError::validation("user id is required for update"));
        };
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(Self::map_error)
    }
}

#[async_trait]
impl ActorClient<User> for UserClient {
    type Error = UserError;

    fn inner(&self) -> &ResourceClient<User> {
        &self.inner
    }

    fn map_error(e: FrameworkError<UserError>) -> UserError {
        match e {
            FrameworkError::Entity(e) => e,
            FrameworkError::NotFound(id) => UserError::NotFound(id),
            other => UserError::ActorCommunication(other.to_string()),
        }
    }
}
