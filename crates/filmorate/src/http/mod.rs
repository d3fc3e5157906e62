//! HTTP + JSON binding for the registries (actix-web).
//!
//! Handlers read their client from app data, so an app needs
//! `web::Data<FilmClient>` and `web::Data<UserClient>` registered before
//! [`configure`] is applied:
//!
//! ```rust,no_run
//! use actix_web::{web, App, HttpServer};
//! use filmorate::http;
//! use filmorate::lifecycle::{RegistryConfig, RegistrySystem};
//! use mockable::DefaultClock;
//! use std::sync::Arc;
//!
//! #[actix_web::main]
//! async fn main() -> std::io::Result<()> {
//!     let system = RegistrySystem::new(&RegistryConfig::default(), Arc::new(DefaultClock));
//!     let films = web::Data::new(system.film_client.clone());
//!     let users = web::Data::new(system.user_client.clone());
//!     HttpServer::new(move || {
//!         App::new()
//!             .app_data(films.clone())
//!             .app_data(users.clone())
//!             .configure(http::configure)
//!     })
//!     .bind("127.0.0.1:8080")?
//!     .run()
//!     .await
//! }
//! ```

pub mod error;
pub mod films;
pub mod users;

pub use error::{ApiError, ApiResult, ErrorCode};

use actix_web::web;

/// Registers the film and user routes and the JSON body error handler.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(error::json_error_handler))
        .service(films::list_films)
        .service(films::create_film)
        .service(films::update_film)
        .service(users::list_users)
        .service(users::create_user)
        .service(users::update_user);
}
