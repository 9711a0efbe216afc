//! Process-local implementation of every repository port.
//!
//! Documents live in insertion order behind one mutex. Identifiers are
//! freshly generated ObjectId hex strings and malformed identifiers are
//! rejected the same way the MongoDB adapters reject them, so handlers see
//! identical error behaviour from either backend.

use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use crate::domain::ports::{
    OrderRepository, ProductRepository, RepositoryError, UserRepository, entity,
};
use crate::domain::{Order, OrderPatch, Product, User, UserPatch};
use crate::outbound::persistence::parse_object_id;

#[derive(Debug, Default)]
struct Documents {
    users: Vec<User>,
    products: Vec<Product>,
    orders: Vec<Order>,
}

/// In-memory store shared by clones.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    documents: Arc<Mutex<Documents>>,
}

impl InMemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Documents>, RepositoryError> {
        self.documents
            .lock()
            .map_err(|_| RepositoryError::query("in-memory store lock poisoned"))
    }
}

fn next_id() -> String {
    ObjectId::new().to_hex()
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn find_by_email(&self, email: &str) -> Result<User, RepositoryError> {
        self.lock()?
            .users
            .iter()
            .find(|user| user.email == email)
            .cloned()
            .ok_or_else(|| RepositoryError::not_found(entity::USER, email))
    }

    async fn create(&self, user: &User) -> Result<User, RepositoryError> {
        let stored = User {
            id: next_id(),
            ..user.clone()
        };
        self.lock()?.users.push(stored.clone());
        Ok(stored)
    }

    async fn update(&self, user: &User) -> Result<User, RepositoryError> {
        let mut documents = self.lock()?;
        let stored = documents
            .users
            .iter_mut()
            .find(|candidate| candidate.email == user.email)
            .ok_or_else(|| RepositoryError::not_found(entity::USER, &user.email))?;
        UserPatch::from_user(user).apply_to(stored);
        Ok(stored.clone())
    }

    async fn delete_by_email(&self, email: &str) -> Result<(), RepositoryError> {
        let mut documents = self.lock()?;
        let position = documents
            .users
            .iter()
            .position(|user| user.email == email)
            .ok_or_else(|| RepositoryError::not_found(entity::USER, email))?;
        documents.users.remove(position);
        Ok(())
    }
}

#[async_trait]
impl ProductRepository for InMemoryStore {
    async fn find_by_id(&self, id: &str) -> Result<Product, RepositoryError> {
        parse_object_id(id)?;
        self.lock()?
            .products
            .iter()
            .find(|product| product.id == id)
            .cloned()
            .ok_or_else(|| RepositoryError::not_found(entity::PRODUCT, id))
    }

    async fn list(&self) -> Result<Vec<Product>, RepositoryError> {
        Ok(self.lock()?.products.clone())
    }

    async fn create(&self, product: &Product) -> Result<Product, RepositoryError> {
        let stored = Product {
            id: next_id(),
            ..product.clone()
        };
        self.lock()?.products.push(stored.clone());
        Ok(stored)
    }
}

#[async_trait]
impl OrderRepository for InMemoryStore {
    async fn find_by_id(&self, id: &str) -> Result<Order, RepositoryError> {
        parse_object_id(id)?;
        self.lock()?
            .orders
            .iter()
            .find(|order| order.id == id)
            .cloned()
            .ok_or_else(|| RepositoryError::not_found(entity::ORDER, id))
    }

    async fn create(&self, order: &Order) -> Result<Order, RepositoryError> {
        let stored = Order {
            id: next_id(),
            ..order.clone()
        };
        self.lock()?.orders.push(stored.clone());
        Ok(stored)
    }

    async fn update(&self, order: &Order) -> Result<Order, RepositoryError> {
        parse_object_id(&order.id)?;
        let mut documents = self.lock()?;
        let stored = documents
            .orders
            .iter_mut()
            .find(|candidate| candidate.id == order.id)
            .ok_or_else(|| RepositoryError::not_found(entity::ORDER, &order.id))?;
        OrderPatch::from_order(order).apply_to(stored);
        Ok(stored.clone())
    }
}
