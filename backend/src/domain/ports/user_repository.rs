//! Port for user persistence adapters.

use async_trait::async_trait;

use crate::domain::User;

use super::RepositoryError;

/// Persistence contract for users, addressed by email.
///
/// Email is the natural lookup key. The store does not enforce uniqueness;
/// when several documents share an email the first match wins.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Fetch the user with the given email.
    ///
    /// Fails with [`RepositoryError::NotFound`] when no document matches.
    async fn find_by_email(&self, email: &str) -> Result<User, RepositoryError>;

    /// Insert a new user and return it with the storage-assigned id.
    ///
    /// Any `id` on the input is ignored.
    async fn create(&self, user: &User) -> Result<User, RepositoryError>;

    /// Merge the non-empty updatable fields of `user` into the document
    /// matching `user.email` and return the stored result.
    ///
    /// Fails with [`RepositoryError::NotFound`] when no document matches.
    async fn update(&self, user: &User) -> Result<User, RepositoryError>;

    /// Remove the user with the given email.
    ///
    /// Fails with [`RepositoryError::NotFound`] when nothing was removed.
    async fn delete_by_email(&self, email: &str) -> Result<(), RepositoryError>;
}
