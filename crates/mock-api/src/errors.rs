use crate::store::StoreError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};
use thiserror::Error;

/// Request-boundary errors.
///
/// Every failure class a request can hit is converted into an HTTP
/// response here; nothing crashes the process. The two auth variants
/// deliberately differ in body format: the API-key gate answers in
/// plain text, the tenant gate in JSON. Clients under test parse both
/// shapes, so they must not drift.
#[derive(Debug, Error)]
pub enum ApiError {
    /// `X-API-KEY` missing or mismatched.
    #[error("API key rejected")]
    KeyRejected,

    /// `X-Tenant-ID` missing or mismatched.
    #[error("Tenant rejected")]
    TenantRejected,

    /// Query parameter outside the accepted range.
    #[error("{0}")]
    Validation(String),

    /// Path parameter of the wrong shape.
    #[error("{0}")]
    InvalidIdentifier(String),

    /// No fixture for the requested key; empty 404.
    #[error("Fixture not found")]
    NotFound,

    /// No fixture for the requested key; 404 with a structured body.
    #[error("Fixture not found")]
    NotFoundDetail(Value),

    /// Synthetic failure from the fault injector.
    #[error("Injected failure")]
    Injected,

    /// Unexpected store failure (I/O, malformed fixture).
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::KeyRejected => (StatusCode::FORBIDDEN, "Unauthorized").into_response(),
            ApiError::TenantRejected => (
                StatusCode::FORBIDDEN,
                Json(json!({"message": "Tenant ID not on tenants list"})),
            )
                .into_response(),
            ApiError::Validation(message) => {
                (StatusCode::BAD_REQUEST, Json(json!({"detail": message}))).into_response()
            }
            ApiError::InvalidIdentifier(message) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(json!({"detail": message})),
            )
                .into_response(),
            ApiError::NotFound => StatusCode::NOT_FOUND.into_response(),
            ApiError::NotFoundDetail(detail) => {
                (StatusCode::NOT_FOUND, Json(json!({"detail": detail}))).into_response()
            }
            ApiError::Injected => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
            ApiError::Store(e) => {
                // Log the real failure server-side; the body stays generic.
                tracing::warn!(target: "mock_api.errors", error = %e, "Store failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({"detail": "internal error"})),
                )
                    .into_response()
            }
        }
    }
}
