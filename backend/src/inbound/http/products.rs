//! Product API handlers.
//!
//! Products are created and read; there is no update or delete route.
//!
//! ```text
//! POST /products       {"name":"Widget","price":500}
//! GET  /product/{id}
//! POST /getProducts
//! ```

use actix_web::{get, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Error, Product};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::map_repository_error;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{ID, require_path_argument};

/// Success body wrapping a single product.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ProductEnvelope {
    pub product: Product,
}

/// Success body wrapping every stored product.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ProductList {
    pub products: Vec<Product>,
}

#[utoipa::path(
    post,
    path = "/products",
    request_body = Product,
    responses(
        (status = 200, description = "Created product", body = ProductEnvelope),
        (status = 400, description = "Invalid request body", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["products"],
    operation_id = "createProduct"
)]
#[post("/products")]
pub async fn create_product(
    state: web::Data<HttpState>,
    payload: web::Json<Product>,
) -> ApiResult<web::Json<ProductEnvelope>> {
    let product = state
        .products
        .create(&payload)
        .await
        .map_err(map_repository_error)?;
    Ok(web::Json(ProductEnvelope { product }))
}

/// Fetch a product by identifier.
#[utoipa::path(
    get,
    path = "/product/{id}",
    params(("id" = String, Path, description = "24-digit hex product identifier")),
    responses(
        (status = 200, description = "Product", body = ProductEnvelope),
        (status = 400, description = "Invalid argument", body = Error),
        (status = 404, description = "Product not found", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["products"],
    operation_id = "getProduct"
)]
#[get("/product/{id}")]
pub async fn get_product(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<ProductEnvelope>> {
    let id = require_path_argument(ID, &path)?;
    let product = state
        .products
        .find_by_id(id)
        .await
        .map_err(map_repository_error)?;
    Ok(web::Json(ProductEnvelope { product }))
}

/// List every product. Any request body is ignored.
#[utoipa::path(
    post,
    path = "/getProducts",
    responses(
        (status = 200, description = "All products", body = ProductList),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["products"],
    operation_id = "listProducts"
)]
#[post("/getProducts")]
pub async fn list_products(state: web::Data<HttpState>) -> ApiResult<web::Json<ProductList>> {
    let products = state.products.list().await.map_err(map_repository_error)?;
    Ok(web::Json(ProductList { products }))
}
