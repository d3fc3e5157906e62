//! User API handlers.
//!
//! ```text
//! GET  /users  List every user
//! POST /users  Register a user
//! PUT  /users  Update the user named by the body's id
//! ```

use super::ApiResult;
use crate::clients::UserClient;
use crate::model::{User, UserCreate, UserUpdate};
use actix_web::{get, post, put, web};

#[get("/users")]
pub async fn list_users(client: web::Data<UserClient>) -> ApiResult<web::Json<Vec<User>>> {
    Ok(web::Json(client.list_users().await?))
}

#[post("/users")]
pub async fn create_user(
    client: web::Data<UserClient>,
    payload: web::Json<UserCreate>,
) -> ApiResult<web::Json<User>> {
    let user = client.create_user(payload.into_inner()).await?;
    Ok(web::Json(user))
}

#[put("/users")]
pub async fn update_user(
    client: web::Data<UserClient>,
    payload: web::Json<UserUpdate>,
) -> ApiResult<web::Json<User>> {
    let user = client.update_user(payload.into_inner()).await?;
    Ok(web::Json(user))
}
