//! Order entity and its partial-update field set.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::non_empty;

/// An order as seen at the API boundary.
///
/// `customer_id` is a weak reference to a user identifier; nothing checks
/// that the user exists. `status` is free text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct Order {
    /// Storage-assigned identifier; empty until the order is created.
    #[schema(example = "665f1c2a9b3e4d0012a3b4c7")]
    #[serde(deserialize_with = "super::null_as_default")]
    pub id: String,
    #[schema(example = "O1")]
    #[serde(deserialize_with = "super::null_as_default")]
    pub order_number: String,
    /// Unit price in the smallest currency unit.
    #[schema(example = 10)]
    #[serde(deserialize_with = "super::null_as_default")]
    pub price: i64,
    #[schema(example = 2)]
    #[serde(deserialize_with = "super::null_as_default")]
    pub qty: i64,
    #[schema(example = 20)]
    #[serde(deserialize_with = "super::null_as_default")]
    pub total: i64,
    #[schema(example = "c1")]
    #[serde(deserialize_with = "super::null_as_default")]
    pub customer_id: String,
    #[schema(example = "pending")]
    #[serde(deserialize_with = "super::null_as_default")]
    pub status: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub remark: String,
}

/// Fields an update may change on a stored order.
///
/// Only the status is updatable. The identifier addresses the document and
/// is never written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderPatch {
    pub status: Option<String>,
}

impl OrderPatch {
    /// Collect the non-empty updatable fields of `order`.
    #[must_use]
    pub fn from_order(order: &Order) -> Self {
        Self {
            status: non_empty(&order.status),
        }
    }

    /// Whether no field was supplied.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.status.is_none()
    }

    /// Merge the supplied fields into `order`.
    pub fn apply_to(&self, order: &mut Order) {
        if let Some(status) = &self.status {
            order.status.clone_from(status);
        }
    }
}
