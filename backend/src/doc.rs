//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every resource route, the health probes and the
//! entity, envelope and error schemas. The document backs Swagger UI in
//! debug builds and is exported by the `openapi-dump` binary.

use utoipa::OpenApi;

use crate::domain::{Error, ErrorCode, Order, Product, User};
use crate::inbound::http::orders::OrderEnvelope;
use crate::inbound::http::products::{ProductEnvelope, ProductList};
use crate::inbound::http::users::UserEnvelope;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Storefront API",
        description = "CRUD access to users, products and orders."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::get_user,
        crate::inbound::http::users::create_user,
        crate::inbound::http::users::update_user,
        crate::inbound::http::users::delete_user,
        crate::inbound::http::products::create_product,
        crate::inbound::http::products::get_product,
        crate::inbound::http::products::list_products,
        crate::inbound::http::orders::create_order,
        crate::inbound::http::orders::get_order,
        crate::inbound::http::orders::update_order,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        User,
        Product,
        Order,
        UserEnvelope,
        ProductEnvelope,
        ProductList,
        OrderEnvelope,
        Error,
        ErrorCode
    )),
    tags(
        (name = "users", description = "User accounts addressed by email"),
        (name = "products", description = "Product catalogue"),
        (name = "orders", description = "Customer orders"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
