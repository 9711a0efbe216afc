//! Shared validation helpers for inbound HTTP adapters.

use actix_web::web;
use serde_json::json;
use tracing::debug;

use crate::domain::Error;

/// Newtype wrapper for path parameter names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(self) -> &'static str {
        self.0
    }
}

pub(crate) const EMAIL: FieldName = FieldName::new("email");
pub(crate) const ID: FieldName = FieldName::new("id");

/// Reject blank path parameters before any repository call.
pub(crate) fn require_path_argument(field: FieldName, value: &str) -> Result<&str, Error> {
    if value.trim().is_empty() {
        return Err(
            Error::invalid_request(format!("invalid argument {}", field.as_str())).with_details(
                json!({
                    "field": field.as_str(),
                    "code": "missing_field",
                }),
            ),
        );
    }
    Ok(value)
}

/// JSON extractor settings shared by every body-carrying route.
///
/// Decode failures become `invalid request body`. The content type is not
/// enforced, so clients that omit the header are still decoded.
pub fn json_body_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .content_type_required(false)
        .error_handler(|err, _req| {
            debug!(error = %err, "rejected request body");
            Error::invalid_request("invalid request body")
                .with_details(json!({ "code": "invalid_request_body" }))
                .into()
        })
}
