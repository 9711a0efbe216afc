//! HTTP adapter mapping for domain and repository errors.
//!
//! Purpose: keep the domain error type HTTP-agnostic while allowing Actix
//! handlers to turn failures into consistent JSON responses and status codes.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde_json::json;
use tracing::{debug, error};

use crate::domain::ports::RepositoryError;
use crate::domain::{Error, ErrorCode, TRACE_ID_HEADER};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn redact_if_internal(error: &Error) -> Error {
    if matches!(error.code(), ErrorCode::InternalError) {
        let mut redacted = Error::internal("Internal server error");
        if let Some(id) = error.trace_id() {
            redacted = redacted.with_trace_id(id.to_owned());
        }
        redacted
    } else {
        error.clone()
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        let mut builder = HttpResponse::build(self.status_code());
        if let Some(id) = self.trace_id() {
            builder.insert_header((TRACE_ID_HEADER, id.to_owned()));
        }

        builder.json(redact_if_internal(self))
    }
}

/// Translate a repository failure into the API error payload.
///
/// Missing documents become `not_found` with a `"<entity> not found"`
/// message and malformed identifiers become `invalid_request`. Storage
/// faults are logged here and surface as an internal error.
pub(crate) fn map_repository_error(err: RepositoryError) -> Error {
    match err {
        RepositoryError::NotFound { entity, key } => {
            debug!(%entity, %key, "document not found");
            Error::not_found(format!("{entity} not found"))
        }
        RepositoryError::InvalidIdentifier { id } => {
            Error::invalid_request("invalid argument id").with_details(json!({
                "field": "id",
                "value": id,
                "code": "invalid_identifier",
            }))
        }
        other @ (RepositoryError::Connection { .. }
        | RepositoryError::Query { .. }
        | RepositoryError::Timeout { .. }) => {
            error!(error = %other, "repository operation failed");
            Error::internal(other.to_string())
        }
    }
}

/// Fallback for requests that match no route, so they get an `Error` body
/// rather than an empty 404.
pub async fn route_not_found() -> ApiResult<HttpResponse> {
    Err(Error::not_found("not found"))
}

#[cfg(test)]
mod tests;
