//! Error types for the dashboard API.
//!
//! [`ApiError`] unifies all failure modes into a single enum that can be
//! converted into an Axum HTTP response via its
//! [`IntoResponse`](axum::response::IntoResponse) implementation. The body
//! is always `{"error": <message>, "status": <code>}`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use medsupply_store::{QueryError, StoreError};

/// Errors that can occur in the API layer.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The requested record or screen was not found.
    #[error("not found: {0}")]
    NotFound(String),

    /// An invalid query parameter was provided.
    #[error("invalid query: {0}")]
    InvalidQuery(String),

    /// A UUID could not be parsed from the request path.
    #[error("invalid UUID: {0}")]
    InvalidUuid(String),

    /// The request body was malformed or failed validation.
    #[error("validation failed: {0}")]
    Validation(String),

    /// A record with the same id already exists.
    #[error("conflict: {0}")]
    Conflict(String),

    /// The dashboard template failed to load or render.
    #[error("template error: {0}")]
    Template(String),
}

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NotFound { .. } => Self::NotFound(e.to_string()),
            StoreError::DuplicateId { .. } => Self::Conflict(e.to_string()),
            StoreError::Invalid { .. } => Self::Validation(e.to_string()),
        }
    }
}

impl From<QueryError> for ApiError {
    fn from(e: QueryError) -> Self {
        Self::InvalidQuery(e.to_string())
    }
}

impl From<minijinja::Error> for ApiError {
    fn from(e: minijinja::Error) -> Self {
        Self::Template(e.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            Self::InvalidQuery(msg) | Self::InvalidUuid(msg) => {
                (StatusCode::BAD_REQUEST, msg.clone())
            }
            Self::Validation(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg.clone()),
            Self::Conflict(msg) => (StatusCode::CONFLICT, msg.clone()),
            Self::Template(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("template error: {msg}"),
            ),
        };

        let body = serde_json::json!({
            "error": message,
            "status": status.as_u16(),
        });

        (status, axum::Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_and_query_errors_map_to_client_statuses() {
        let cases = [
            (
                ApiError::from(StoreError::NotFound { kind: "invoice", id: String::from("x") }),
                StatusCode::NOT_FOUND,
            ),
            (
                ApiError::from(StoreError::DuplicateId { kind: "invoice", id: String::from("x") }),
                StatusCode::CONFLICT,
            ),
            (
                ApiError::from(StoreError::Invalid {
                    kind: "invoice",
                    field: "amount",
                    reason: String::from("must not be negative"),
                }),
                StatusCode::UNPROCESSABLE_ENTITY,
            ),
            (ApiError::from(QueryError::PageOutOfRange), StatusCode::BAD_REQUEST),
            (ApiError::Template(String::from("missing")), StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (error, status) in cases {
            assert_eq!(error.into_response().status(), status);
        }
    }
}
