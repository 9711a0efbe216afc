//! Order API handlers.
//!
//! ```text
//! POST /createOrder  {"order_number":"O1","price":10,"qty":2,"total":20,...}
//! GET  /order/{id}
//! PUT  /order/{id}   {"status":"shipped"}
//! ```

use actix_web::{get, post, put, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Error, Order};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::map_repository_error;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{ID, require_path_argument};

/// Success body wrapping a single order.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct OrderEnvelope {
    pub order: Order,
}

#[utoipa::path(
    post,
    path = "/createOrder",
    request_body = Order,
    responses(
        (status = 200, description = "Created order", body = OrderEnvelope),
        (status = 400, description = "Invalid request body", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["orders"],
    operation_id = "createOrder"
)]
#[post("/createOrder")]
pub async fn create_order(
    state: web::Data<HttpState>,
    payload: web::Json<Order>,
) -> ApiResult<web::Json<OrderEnvelope>> {
    let order = state
        .orders
        .create(&payload)
        .await
        .map_err(map_repository_error)?;
    Ok(web::Json(OrderEnvelope { order }))
}

#[utoipa::path(
    get,
    path = "/order/{id}",
    params(("id" = String, Path, description = "24-digit hex order identifier")),
    responses(
        (status = 200, description = "Order", body = OrderEnvelope),
        (status = 400, description = "Invalid argument", body = Error),
        (status = 404, description = "Order not found", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["orders"],
    operation_id = "getOrder"
)]
#[get("/order/{id}")]
pub async fn get_order(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<OrderEnvelope>> {
    let id = require_path_argument(ID, &path)?;
    let order = state
        .orders
        .find_by_id(id)
        .await
        .map_err(map_repository_error)?;
    Ok(web::Json(OrderEnvelope { order }))
}

/// Update an order's status and return the stored order.
///
/// The identifier comes from the path; every body field other than
/// `status` is ignored.
#[utoipa::path(
    put,
    path = "/order/{id}",
    params(("id" = String, Path, description = "24-digit hex order identifier")),
    request_body = Order,
    responses(
        (status = 200, description = "Updated order", body = OrderEnvelope),
        (status = 400, description = "Invalid argument or body", body = Error),
        (status = 404, description = "Order not found", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["orders"],
    operation_id = "updateOrder"
)]
#[put("/order/{id}")]
pub async fn update_order(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<Order>,
) -> ApiResult<web::Json<OrderEnvelope>> {
    let id = require_path_argument(ID, &path)?;
    let mut changes = payload.into_inner();
    id.clone_into(&mut changes.id);
    let order = state
        .orders
        .update(&changes)
        .await
        .map_err(map_repository_error)?;
    Ok(web::Json(OrderEnvelope { order }))
}
