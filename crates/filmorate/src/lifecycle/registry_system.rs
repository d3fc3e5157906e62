use crate::clients::{FilmClient, UserClient};
use crate::user_actor::UserContext;
use std::time::Duration;
use thiserror::Error;
use tokio::task::JoinHandle;
use tracing::{error, info, warn};

/// Settings for the registry actors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegistryConfig {
    /// Requests each registry queues before senders wait.
    pub mailbox_capacity: usize,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            mailbox_capacity: 32,
        }
    }
}

/// Failures while stopping the registries.
#[derive(Debug, Error)]
pub enum ShutdownError {
    #[error("Actor task failed: {0}")]
    ActorTask(String),

    #[error("Actors still running after {0:?}")]
    TimedOut(Duration),
}

/// Both registries, running.
pub struct RegistrySystem {
    /// Client for the film registry
    pub film_client: FilmClient,

    /// Client for the user registry
    pub user_client: UserClient,

    handles: Vec<JoinHandle<()>>,
}

impl RegistrySystem {
    /// Creates both actors and spawns them on the current Tokio runtime.
    ///
    /// A `mailbox_capacity` of zero is treated as one.
    pub fn new(config: &RegistryConfig, clock: UserContext) -> Self {
        let (film_actor, film_client) = crate::film_actor::new(config.mailbox_capacity);
        let (user_actor, user_client) = crate::user_actor::new(config.mailbox_capacity);

        let film_handle = tokio::spawn(film_actor.run(()));
        let user_handle = tokio::spawn(user_actor.run(clock));

        info!(
            mailbox_capacity = config.mailbox_capacity,
            "Registries started"
        );

        Self {
            film_client,
            user_client,
            handles: vec![film_handle, user_handle],
        }
    }

    /// Drops this system's clients and waits for both actors to finish.
    ///
    /// Returns [`ShutdownError::TimedOut`] if some other client clone keeps
    /// an actor alive past `grace`.
    pub async fn shutdown(self, grace: Duration) -> Result<(), ShutdownError> {
        info!("Shutting down registries...");

        drop(self.film_client);
        drop(self.user_client);

        let all_stopped = join_actors(self.handles);
        match tokio::time::timeout(grace, all_stopped).await {
            Ok(Ok(())) => {
                info!("Registry shutdown complete.");
                Ok(())
            }
            Ok(Err(e)) => {
                error!(error = %e, "Actor task failed");
                Err(e)
            }
            Err(_) => {
                warn!(?grace, "Registries did not stop in time");
                Err(ShutdownError::TimedOut(grace))
            }
        }
    }
}

async fn join_actors(handles: Vec<JoinHandle<()>>) -> Result<(), ShutdownError> {
    for handle in handles {
        handle
            .await
            .map_err(|e| ShutdownError::ActorTask(e.to_string()))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockable::DefaultClock;
    use std::sync::Arc;

    #[tokio::test]
    async fn shutdown_stops_both_actors() {
        let system = RegistrySystem::new(&RegistryConfig::default(), Arc::new(DefaultClock));
        assert!(system.film_client.list_films().await.unwrap().is_empty());

        let result = system.shutdown(Duration::from_secs(1)).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn zero_mailbox_capacity_is_usable() {
        let config = RegistryConfig {
            mailbox_capacity: 0,
        };
        let system = RegistrySystem::new(&config, Arc::new(DefaultClock));

        assert!(system.user_client.list_users().await.unwrap().is_empty());
        assert!(system.shutdown(Duration::from_secs(1)).await.is_ok());
    }

    #[tokio::test]
    async fn outstanding_client_clone_times_out() {
        let system = RegistrySystem::new(&RegistryConfig::default(), Arc::new(DefaultClock));
        let held = system.user_client.clone();

        let result = system.shutdown(Duration::from_millis(50)).await;

        assert!(matches!(result, Err(ShutdownError::TimedOut(_))));
        drop(held);
    }
}
