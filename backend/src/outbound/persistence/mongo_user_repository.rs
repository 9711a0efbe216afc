//! MongoDB-backed `UserRepository` over the `users` collection.

use async_trait::async_trait;
use mongodb::Collection;
use mongodb::bson::doc;
use mongodb::options::ReturnDocument;

use crate::domain::ports::{RepositoryError, UserRepository, entity};
use crate::domain::{User, UserPatch};

use super::records::{USERS, UserRecord, inserted_id, user_changes};
use super::store::MongoStore;

/// User adapter keyed by email.
///
/// Lookups use `find_one` on the `email` field, so duplicates resolve to
/// whichever document the server returns first.
#[derive(Clone)]
pub struct MongoUserRepository {
    store: MongoStore,
    users: Collection<UserRecord>,
}

impl MongoUserRepository {
    /// Create a repository bound to the store's `users` collection.
    pub fn new(store: MongoStore) -> Self {
        let users = store.collection(USERS);
        Self { store, users }
    }

    fn missing(email: &str) -> RepositoryError {
        RepositoryError::not_found(entity::USER, email)
    }
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<User, RepositoryError> {
        self.store
            .bounded(self.users.find_one(doc! { "email": email }))
            .await?
            .map(User::from)
            .ok_or_else(|| Self::missing(email))
    }

    async fn create(&self, user: &User) -> Result<User, RepositoryError> {
        let result = self
            .store
            .bounded(self.users.insert_one(UserRecord::from(user)))
            .await?;
        Ok(User {
            id: inserted_id(&result.inserted_id)?,
            ..user.clone()
        })
    }

    async fn update(&self, user: &User) -> Result<User, RepositoryError> {
        let patch = UserPatch::from_user(user);
        if patch.is_empty() {
            return self.find_by_email(&user.email).await;
        }

        self.store
            .bounded(
                self.users
                    .find_one_and_update(
                        doc! { "email": user.email.as_str() },
                        doc! { "$set": user_changes(&patch) },
                    )
                    .return_document(ReturnDocument::After),
            )
            .await?
            .map(User::from)
            .ok_or_else(|| Self::missing(&user.email))
    }

    async fn delete_by_email(&self, email: &str) -> Result<(), RepositoryError> {
        let result = self
            .store
            .bounded(self.users.delete_one(doc! { "email": email }))
            .await?;
        if result.deleted_count == 0 {
            return Err(Self::missing(email));
        }
        Ok(())
    }
}
