//! Command-line and environment configuration for the server.

use crate::lifecycle::RegistryConfig;
use clap::Parser;
use std::time::Duration;

/// `filmorate` server arguments. Each flag falls back to an environment variable.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "filmorate",
    about = "In-memory film and user registries over HTTP",
    version
)]
pub struct ServerConfig {
    /// Address the HTTP server listens on.
    #[arg(long, env = "FILMORATE_BIND", default_value = "127.0.0.1:8080")]
    pub bind: String,

    /// Requests each registry queues before callers wait.
    #[arg(
        long,
        env = "FILMORATE_MAILBOX_CAPACITY",
        default_value_t = 32,
        value_parser = clap::value_parser!(u16).range(1..)
    )]
    pub mailbox_capacity: u16,

    /// Seconds to wait for the registries to stop after the server exits.
    #[arg(long, env = "FILMORATE_SHUTDOWN_GRACE_SECS", default_value_t = 5)]
    pub shutdown_grace_secs: u64,
}

impl ServerConfig {
    pub fn registry(&self) -> RegistryConfig {
        RegistryConfig {
            mailbox_capacity: usize::from(self.mailbox_capacity),
        }
    }

    pub fn shutdown_grace(&self) -> Duration {
        Duration::from_secs(self.shutdown_grace_secs)
    }
}
