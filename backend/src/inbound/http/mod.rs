//! HTTP inbound adapter exposing the REST endpoints.

pub mod error;
pub mod health;
pub mod orders;
pub mod products;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod users;
pub mod validation;

use actix_web::web;

pub use error::ApiResult;

/// Register the JSON extractor settings and every resource route.
///
/// The caller supplies [`state::HttpState`] as `web::Data`.
///
/// # Examples
/// ```
/// use std::sync::Arc;
/// use actix_web::{App, web};
/// use storefront::inbound::http::{configure, state::HttpState};
/// use storefront::outbound::memory::InMemoryStore;
///
/// let store = Arc::new(InMemoryStore::new());
/// let state = HttpState::new(store.clone(), store.clone(), store);
/// let _app = App::new().app_data(web::Data::new(state)).configure(configure);
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(validation::json_body_config())
        .service(users::get_user)
        .service(users::create_user)
        .service(users::update_user)
        .service(users::delete_user)
        .service(products::create_product)
        .service(products::get_product)
        .service(products::list_products)
        .service(orders::create_order)
        .service(orders::get_order)
        .service(orders::update_order);
}
