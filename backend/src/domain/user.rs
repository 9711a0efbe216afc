//! User entity and its partial-update field set.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::non_empty;

/// A user as seen at the API boundary.
///
/// `email` is the natural lookup key. Missing JSON fields decode as empty
/// strings so partial update bodies are accepted. The password is accepted
/// on input and persisted, but never serialised back out.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct User {
    /// Storage-assigned identifier; empty until the user is created.
    #[schema(example = "665f1c2a9b3e4d0012a3b4c5")]
    #[serde(deserialize_with = "super::null_as_default")]
    pub id: String,
    #[schema(example = "Ann")]
    #[serde(deserialize_with = "super::null_as_default")]
    pub name: String,
    #[schema(example = "ann@x.com")]
    #[serde(deserialize_with = "super::null_as_default")]
    pub email: String,
    #[serde(skip_serializing)]
    #[schema(write_only)]
    #[serde(deserialize_with = "super::null_as_default")]
    pub password: String,
}

/// Fields an update may change on a stored user.
///
/// Empty input values mean "not supplied", never "clear this field".
///
/// # Examples
/// ```
/// use storefront::domain::{User, UserPatch};
///
/// let input = User { name: "Ann".into(), ..User::default() };
/// let patch = UserPatch::from_user(&input);
/// assert_eq!(patch.name.as_deref(), Some("Ann"));
/// assert!(patch.password.is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserPatch {
    pub name: Option<String>,
    pub password: Option<String>,
}

impl UserPatch {
    /// Collect the non-empty updatable fields of `user`.
    #[must_use]
    pub fn from_user(user: &User) -> Self {
        Self {
            name: non_empty(&user.name),
            password: non_empty(&user.password),
        }
    }

    /// Whether no field was supplied.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.password.is_none()
    }

    /// Merge the supplied fields into `user`.
    pub fn apply_to(&self, user: &mut User) {
        if let Some(name) = &self.name {
            user.name.clone_from(name);
        }
        if let Some(password) = &self.password {
            user.password.clone_from(password);
        }
    }
}
