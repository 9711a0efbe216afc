//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_web::dev::{Service, ServiceResponse};
use actix_web::{App, test, web};

use crate::domain::ports::{MockOrderRepository, MockProductRepository, MockUserRepository};
use crate::inbound::http::configure;
use crate::inbound::http::state::HttpState;

/// Build state from the given mocks. Unused ports get expectation-free
/// mocks, so any unexpected call fails the test.
pub fn state(
    users: MockUserRepository,
    products: MockProductRepository,
    orders: MockOrderRepository,
) -> HttpState {
    HttpState::new(Arc::new(users), Arc::new(products), Arc::new(orders))
}

pub fn state_with_users(users: MockUserRepository) -> HttpState {
    state(users, MockProductRepository::new(), MockOrderRepository::new())
}

pub fn state_with_products(products: MockProductRepository) -> HttpState {
    state(MockUserRepository::new(), products, MockOrderRepository::new())
}

pub fn state_with_orders(orders: MockOrderRepository) -> HttpState {
    state(MockUserRepository::new(), MockProductRepository::new(), orders)
}

/// Initialise the full route table over `state`.
pub async fn init(
    state: HttpState,
) -> impl Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error> {
    test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .configure(configure),
    )
    .await
}
