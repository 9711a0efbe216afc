//! MongoDB-backed `OrderRepository` over the `orders` collection.

use async_trait::async_trait;
use mongodb::Collection;
use mongodb::bson::doc;
use mongodb::options::ReturnDocument;

use crate::domain::ports::{OrderRepository, RepositoryError, entity};
use crate::domain::{Order, OrderPatch};

use super::records::{ORDERS, OrderRecord, inserted_id, order_changes, parse_object_id};
use super::store::MongoStore;

/// Order adapter keyed by document identifier.
#[derive(Clone)]
pub struct MongoOrderRepository {
    store: MongoStore,
    orders: Collection<OrderRecord>,
}

impl MongoOrderRepository {
    /// Create a repository bound to the store's `orders` collection.
    pub fn new(store: MongoStore) -> Self {
        let orders = store.collection(ORDERS);
        Self { store, orders }
    }
}

#[async_trait]
impl OrderRepository for MongoOrderRepository {
    async fn find_by_id(&self, id: &str) -> Result<Order, RepositoryError> {
        let oid = parse_object_id(id)?;
        self.store
            .bounded(self.orders.find_one(doc! { "_id": oid }))
            .await?
            .map(Order::from)
            .ok_or_else(|| RepositoryError::not_found(entity::ORDER, id))
    }

    async fn create(&self, order: &Order) -> Result<Order, RepositoryError> {
        let result = self
            .store
            .bounded(self.orders.insert_one(OrderRecord::from(order)))
            .await?;
        Ok(Order {
            id: inserted_id(&result.inserted_id)?,
            ..order.clone()
        })
    }

    async fn update(&self, order: &Order) -> Result<Order, RepositoryError> {
        let oid = parse_object_id(&order.id)?;
        let patch = OrderPatch::from_order(order);
        if patch.is_empty() {
            return self.find_by_id(&order.id).await;
        }

        self.store
            .bounded(
                self.orders
                    .find_one_and_update(
                        doc! { "_id": oid },
                        doc! { "$set": order_changes(&patch) },
                    )
                    .return_document(ReturnDocument::After),
            )
            .await?
            .map(Order::from)
            .ok_or_else(|| RepositoryError::not_found(entity::ORDER, &order.id))
    }
}
