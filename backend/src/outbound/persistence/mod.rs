//! MongoDB persistence adapters.
//!
//! Each repository translates between domain entities and the storage
//! records in `records.rs`; no business rules live here. A single
//! [`MongoStore`] carries the driver handle and the per-operation
//! deadline, and every driver failure is mapped onto
//! [`RepositoryError`](crate::domain::ports::RepositoryError) before it
//! leaves this module.
//!
//! # Example
//!
//! ```no_run
//! use storefront::outbound::persistence::{MongoStore, MongoUserRepository, StoreConfig};
//!
//! # async fn wire() -> Result<(), storefront::outbound::persistence::StoreError> {
//! let store = MongoStore::connect(StoreConfig::new("mongodb://127.0.0.1:27017", "nvsu_db")).await?;
//! let users = MongoUserRepository::new(store);
//! # let _ = users;
//! # Ok(())
//! # }
//! ```

mod mongo_order_repository;
mod mongo_product_repository;
mod mongo_user_repository;
mod records;
mod store;

pub use mongo_order_repository::MongoOrderRepository;
pub use mongo_product_repository::MongoProductRepository;
pub use mongo_user_repository::MongoUserRepository;
pub(crate) use records::parse_object_id;
pub use store::{MongoStore, StoreConfig, StoreError};
