//! Driven ports implemented by storage adapters.

mod macros;
pub(crate) use macros::define_port_error;

mod order_repository;
mod product_repository;
mod repository_error;
mod user_repository;

#[cfg(test)]
pub use order_repository::MockOrderRepository;
pub use order_repository::OrderRepository;
#[cfg(test)]
pub use product_repository::MockProductRepository;
pub use product_repository::ProductRepository;
pub use repository_error::RepositoryError;
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::UserRepository;

/// Entity names used in not-found errors and log fields.
pub mod entity {
    pub const USER: &str = "user";
    pub const PRODUCT: &str = "product";
    pub const ORDER: &str = "order";
}
