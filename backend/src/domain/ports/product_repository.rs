//! Port for product persistence adapters.

use async_trait::async_trait;

use crate::domain::Product;

use super::RepositoryError;

/// Persistence contract for products. Products are never updated or
/// deleted.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Fetch the product with the given identifier.
    ///
    /// Fails with [`RepositoryError::InvalidIdentifier`] when `id` is not a
    /// well-formed identifier and [`RepositoryError::NotFound`] when no
    /// document matches.
    async fn find_by_id(&self, id: &str) -> Result<Product, RepositoryError>;

    /// Every stored product, in no particular order. An empty collection
    /// yields an empty vector.
    async fn list(&self) -> Result<Vec<Product>, RepositoryError>;

    /// Insert a new product and return it with the storage-assigned id.
    async fn create(&self, product: &Product) -> Result<Product, RepositoryError>;
}
