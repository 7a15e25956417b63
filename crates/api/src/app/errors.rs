//! Consistent error responses.
//!
//! All error bodies are the generic `{"message":"ERROR"}` except the explicit
//! not-found case, which carries a descriptive message. Store failures are
//! logged here and mapped to 500 without leaking internal detail.

use axum::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use stockbook_core::DomainError;

use crate::app::services::ServiceError;

pub fn service_error_to_response(err: ServiceError) -> axum::response::Response {
    match err {
        ServiceError::Domain(DomainError::Validation(msg)) => {
            tracing::debug!(reason = %msg, "request rejected by validation");
            generic_error(StatusCode::BAD_REQUEST)
        }
        ServiceError::Domain(DomainError::InsufficientStock {
            requested,
            available,
        }) => {
            tracing::debug!(requested, available, "sale rejected");
            generic_error(StatusCode::BAD_REQUEST)
        }
        ServiceError::Domain(DomainError::NotFound) => (
            StatusCode::NOT_FOUND,
            Json(json!({"message": "product not found"})),
        )
            .into_response(),
        ServiceError::Store(e) => {
            tracing::error!(error = %e, "store operation failed");
            generic_error(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Malformed request body (missing fields, wrong types, invalid JSON).
pub fn invalid_body() -> axum::response::Response {
    generic_error(StatusCode::BAD_REQUEST)
}

pub fn generic_error(status: StatusCode) -> axum::response::Response {
    (status, Json(json!({"message": "ERROR"}))).into_response()
}
