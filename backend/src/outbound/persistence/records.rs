//! Storage records and their mapping to domain entities.
//!
//! Records mirror the documents in the `users`, `products` and `orders`
//! collections. `_id` is omitted on insert so the server assigns it, and
//! every other field defaults when absent so documents written with
//! omitted zero values still decode. Identifiers are rendered as hex here
//! and nowhere else.

use mongodb::bson::oid::ObjectId;
use mongodb::bson::{Bson, Document};
use serde::{Deserialize, Serialize};

use crate::domain::ports::RepositoryError;
use crate::domain::{Order, OrderPatch, Product, User, UserPatch};

pub(super) const USERS: &str = "users";
pub(super) const PRODUCTS: &str = "products";
pub(super) const ORDERS: &str = "orders";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub(super) struct UserRecord {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub(super) id: Option<ObjectId>,
    pub(super) name: String,
    pub(super) email: String,
    pub(super) password: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub(super) struct ProductRecord {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub(super) id: Option<ObjectId>,
    pub(super) name: String,
    pub(super) price: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub(super) struct OrderRecord {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub(super) id: Option<ObjectId>,
    pub(super) order_number: String,
    pub(super) price: i64,
    pub(super) qty: i64,
    pub(super) total: i64,
    pub(super) customer_id: String,
    pub(super) status: String,
    pub(super) remark: String,
}

fn render_id(id: Option<ObjectId>) -> String {
    id.map(|oid| oid.to_hex()).unwrap_or_default()
}

/// Render the identifier returned by an insert.
pub(super) fn inserted_id(value: &Bson) -> Result<String, RepositoryError> {
    value
        .as_object_id()
        .map(|oid| oid.to_hex())
        .ok_or_else(|| RepositoryError::query("store assigned a non-ObjectId identifier"))
}

/// Parse an API identifier into a document identifier.
pub(crate) fn parse_object_id(id: &str) -> Result<ObjectId, RepositoryError> {
    ObjectId::parse_str(id).map_err(|_| RepositoryError::invalid_identifier(id))
}

impl From<&User> for UserRecord {
    fn from(user: &User) -> Self {
        Self {
            id: None,
            name: user.name.clone(),
            email: user.email.clone(),
            password: user.password.clone(),
        }
    }
}

impl From<UserRecord> for User {
    fn from(record: UserRecord) -> Self {
        Self {
            id: render_id(record.id),
            name: record.name,
            email: record.email,
            password: record.password,
        }
    }
}

impl From<&Product> for ProductRecord {
    fn from(product: &Product) -> Self {
        Self {
            id: None,
            name: product.name.clone(),
            price: product.price,
        }
    }
}

impl From<ProductRecord> for Product {
    fn from(record: ProductRecord) -> Self {
        Self {
            id: render_id(record.id),
            name: record.name,
            price: record.price,
        }
    }
}

impl From<&Order> for OrderRecord {
    fn from(order: &Order) -> Self {
        Self {
            id: None,
            order_number: order.order_number.clone(),
            price: order.price,
            qty: order.qty,
            total: order.total,
            customer_id: order.customer_id.clone(),
            status: order.status.clone(),
            remark: order.remark.clone(),
        }
    }
}

impl From<OrderRecord> for Order {
    fn from(record: OrderRecord) -> Self {
        Self {
            id: render_id(record.id),
            order_number: record.order_number,
            price: record.price,
            qty: record.qty,
            total: record.total,
            customer_id: record.customer_id,
            status: record.status,
            remark: record.remark,
        }
    }
}

/// `$set` body for a user patch.
pub(super) fn user_changes(patch: &UserPatch) -> Document {
    let mut set = Document::new();
    if let Some(name) = &patch.name {
        set.insert("name", name.as_str());
    }
    if let Some(password) = &patch.password {
        set.insert("password", password.as_str());
    }
    set
}

/// `$set` body for an order patch.
pub(super) fn order_changes(patch: &OrderPatch) -> Document {
    let mut set = Document::new();
    if let Some(status) = &patch.status {
        set.insert("status", status.as_str());
    }
    set
}
