//! Port for order persistence adapters.

use async_trait::async_trait;

use crate::domain::Order;

use super::RepositoryError;

/// Persistence contract for orders, addressed by identifier.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Fetch the order with the given identifier.
    ///
    /// Fails with [`RepositoryError::InvalidIdentifier`] for malformed ids
    /// and [`RepositoryError::NotFound`] when no document matches.
    async fn find_by_id(&self, id: &str) -> Result<Order, RepositoryError>;

    /// Insert a new order and return it with the storage-assigned id.
    async fn create(&self, order: &Order) -> Result<Order, RepositoryError>;

    /// Apply the non-empty status of `order` to the document addressed by
    /// `order.id` and return the stored result.
    ///
    /// The identifier is only used for addressing and is never written.
    async fn update(&self, order: &Order) -> Result<Order, RepositoryError>;
}
