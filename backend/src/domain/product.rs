//! Product entity.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A product as seen at the API boundary. Products are created and read,
/// never updated or deleted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct Product {
    /// Storage-assigned identifier; empty until the product is created.
    #[schema(example = "665f1c2a9b3e4d0012a3b4c6")]
    #[serde(deserialize_with = "super::null_as_default")]
    pub id: String,
    #[schema(example = "Widget")]
    #[serde(deserialize_with = "super::null_as_default")]
    pub name: String,
    /// Price in the smallest currency unit.
    #[schema(example = 500)]
    #[serde(deserialize_with = "super::null_as_default")]
    pub price: i64,
}
