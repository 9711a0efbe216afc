//! Domain entities, error payloads and repository ports.
//!
//! Purpose: define the user, product and order types exchanged at the API
//! boundary and the driven ports that persist them. Nothing here depends on
//! the HTTP framework or the document store driver.
//!
//! Public surface:
//! - `User`, `Product`, `Order`: entities with snake_case JSON fields.
//! - `UserPatch`, `OrderPatch`: sparse field sets used by updates.
//! - `Error` / `ErrorCode`: the single API error payload.
//! - `TraceId`: request correlation identifier.
//! - `ports`: repository traits and their error type.

pub mod error;
pub mod order;
pub mod ports;
pub mod product;
pub mod trace_id;
pub mod user;

pub use self::error::{Error, ErrorCode, TRACE_ID_HEADER};
pub use self::order::{Order, OrderPatch};
pub use self::product::Product;
pub use self::trace_id::TraceId;
pub use self::user::{User, UserPatch};

use serde::{Deserialize, Deserializer};

/// Treat an empty string as "not supplied".
fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_owned())
}

/// Decode an explicit JSON `null` as the field's default.
///
/// Paired with `#[serde(default)]` on the container, so absent and `null`
/// fields read the same.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
