//! MongoDB-backed `ProductRepository` over the `products` collection.

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::Collection;
use mongodb::bson::doc;

use crate::domain::Product;
use crate::domain::ports::{ProductRepository, RepositoryError, entity};

use super::records::{PRODUCTS, ProductRecord, inserted_id, parse_object_id};
use super::store::MongoStore;

/// Product adapter keyed by document identifier.
#[derive(Clone)]
pub struct MongoProductRepository {
    store: MongoStore,
    products: Collection<ProductRecord>,
}

impl MongoProductRepository {
    /// Create a repository bound to the store's `products` collection.
    pub fn new(store: MongoStore) -> Self {
        let products = store.collection(PRODUCTS);
        Self { store, products }
    }
}

#[async_trait]
impl ProductRepository for MongoProductRepository {
    async fn find_by_id(&self, id: &str) -> Result<Product, RepositoryError> {
        let oid = parse_object_id(id)?;
        self.store
            .bounded(self.products.find_one(doc! { "_id": oid }))
            .await?
            .map(Product::from)
            .ok_or_else(|| RepositoryError::not_found(entity::PRODUCT, id))
    }

    async fn list(&self) -> Result<Vec<Product>, RepositoryError> {
        let records = self
            .store
            .bounded(async {
                let cursor = self.products.find(doc! {}).await?;
                let records: Vec<ProductRecord> = cursor.try_collect().await?;
                Ok::<_, mongodb::error::Error>(records)
            })
            .await?;
        Ok(records.into_iter().map(Product::from).collect())
    }

    async fn create(&self, product: &Product) -> Result<Product, RepositoryError> {
        let result = self
            .store
            .bounded(self.products.insert_one(ProductRecord::from(product)))
            .await?;
        Ok(Product {
            id: inserted_id(&result.inserted_id)?,
            ..product.clone()
        })
    }
}
