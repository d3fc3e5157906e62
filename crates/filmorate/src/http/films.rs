//! Film API handlers.
//!
//! ```text
//! GET  /films  List every film
//! POST /films  Register a film
//! PUT  /films  Update the film named by the body's id
//! ```

use super::ApiResult;
use crate::clients::FilmClient;
use crate::model::{Film, FilmCreate, FilmUpdate};
use actix_web::{get, post, put, web};

#[get("/films")]
pub async fn list_films(client: web::Data<FilmClient>) -> ApiResult<web::Json<Vec<Film>>> {
    Ok(web::Json(client.list_films().await?))
}

#[post("/films")]
pub async fn create_film(
    client: web::Data<FilmClient>,
    payload: web::Json<FilmCreate>,
) -> ApiResult<web::Json<Film>> {
    let film = client.create_film(payload.into_inner()).await?;
    Ok(web::Json(film))
}

#[put("/films")]
pub async fn update_film(
    client: web::Data<FilmClient>,
    payload: web::Json<FilmUpdate>,
) -> ApiResult<web::Json<Film>> {
    let film = client.update_film(payload.into_inner()).await?;
    Ok(web::Json(film))
}
