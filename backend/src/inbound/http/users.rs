//! User API handlers.
//!
//! ```text
//! GET    /users/{email}
//! POST   /users          {"name":"Ann","email":"ann@x.com","password":"p1"}
//! PUT    /users/{email}  {"name":"Annie"}
//! DELETE /users/{email}
//! ```

use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::ToSchema;

use crate::domain::{Error, User};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::map_repository_error;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{EMAIL, require_path_argument};

/// Success body wrapping a single user.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UserEnvelope {
    pub user: User,
}

/// Fetch a user by email.
#[utoipa::path(
    get,
    path = "/users/{email}",
    params(("email" = String, Path, description = "Email of the user")),
    responses(
        (status = 200, description = "User", body = UserEnvelope),
        (status = 400, description = "Invalid argument", body = Error),
        (status = 404, description = "User not found", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["users"],
    operation_id = "getUser"
)]
#[get("/users/{email}")]
pub async fn get_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<UserEnvelope>> {
    let email = require_path_argument(EMAIL, &path)?;
    let user = state
        .users
        .find_by_email(email)
        .await
        .map_err(map_repository_error)?;
    Ok(web::Json(UserEnvelope { user }))
}

/// Create a user. Any `id` in the body is ignored.
#[utoipa::path(
    post,
    path = "/users",
    request_body = User,
    responses(
        (status = 200, description = "Created user", body = UserEnvelope),
        (status = 400, description = "Invalid request body", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[post("/users")]
pub async fn create_user(
    state: web::Data<HttpState>,
    payload: web::Json<User>,
) -> ApiResult<web::Json<UserEnvelope>> {
    let user = state
        .users
        .create(&payload)
        .await
        .map_err(map_repository_error)?;
    Ok(web::Json(UserEnvelope { user }))
}

/// Update a user's name and/or password.
///
/// The email always comes from the path; empty body fields are left
/// unchanged.
#[utoipa::path(
    put,
    path = "/users/{email}",
    params(("email" = String, Path, description = "Email of the user")),
    request_body = User,
    responses(
        (status = 200, description = "Updated user", body = UserEnvelope),
        (status = 400, description = "Invalid argument or body", body = Error),
        (status = 404, description = "User not found", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["users"],
    operation_id = "updateUser"
)]
#[put("/users/{email}")]
pub async fn update_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<User>,
) -> ApiResult<web::Json<UserEnvelope>> {
    let email = require_path_argument(EMAIL, &path)?;
    let mut changes = payload.into_inner();
    email.clone_into(&mut changes.email);
    let user = state
        .users
        .update(&changes)
        .await
        .map_err(map_repository_error)?;
    Ok(web::Json(UserEnvelope { user }))
}

/// Delete a user by email. Responds with an empty object.
#[utoipa::path(
    delete,
    path = "/users/{email}",
    params(("email" = String, Path, description = "Email of the user")),
    responses(
        (status = 200, description = "User deleted"),
        (status = 400, description = "Invalid argument", body = Error),
        (status = 404, description = "User not found", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["users"],
    operation_id = "deleteUser"
)]
#[delete("/users/{email}")]
pub async fn delete_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let email = require_path_argument(EMAIL, &path)?;
    state
        .users
        .delete_by_email(email)
        .await
        .map_err(map_repository_error)?;
    Ok(HttpResponse::Ok().json(json!({})))
}
