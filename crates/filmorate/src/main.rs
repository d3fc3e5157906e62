//! `filmorate` server entry point.

use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use clap::Parser;
use filmorate::config::ServerConfig;
use filmorate::http;
use filmorate::lifecycle::{setup_tracing, RegistrySystem};
use mockable::DefaultClock;
use std::io;
use std::sync::Arc;
use tracing::{error, info};

#[actix_web::main]
async fn main() -> io::Result<()> {
    setup_tracing();

    let config = ServerConfig::parse();
    info!(bind = %config.bind, "Starting filmorate");

    let system = RegistrySystem::new(&config.registry(), Arc::new(DefaultClock));
    let films = web::Data::new(system.film_client.clone());
    let users = web::Data::new(system.user_client.clone());

    let server = HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(films.clone())
            .app_data(users.clone())
            .configure(http::configure)
    })
    .bind(config.bind.as_str())?;

    let served = server.run().await;

    if let Err(e) = system.shutdown(config.shutdown_grace()).await {
        error!(error = %e, "Registries did not shut down cleanly");
    }
    info!("Server stopped");
    served
}
