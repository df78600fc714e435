//! Header-based credential gates.
//!
//! Two independent gates, each comparing one request header against a
//! fixed value from the configuration:
//!
//! - `require_api_key` - `X-API-KEY`; rejects with 403 and a
//!   plain-text `Unauthorized` body
//! - `require_tenant` - `X-Tenant-ID`; rejects with 403 and a JSON
//!   body naming the tenant failure
//!
//! The body-format asymmetry is contractual. Comparison is exact
//! string equality against the canonical UUID rendering; there is no
//! real credential verification behind it.

use crate::errors::ApiError;
use crate::routes::AppState;
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::IntoResponse,
};
use std::sync::Arc;
use tracing::instrument;

const API_KEY_HEADER: &str = "x-api-key";
const TENANT_HEADER: &str = "x-tenant-id";

fn header_value<'a>(req: &'a Request, name: &str) -> Option<&'a str> {
    req.headers().get(name).and_then(|value| value.to_str().ok())
}

/// API-key gate.
///
/// # Response
///
/// - 403 with plain-text `Unauthorized` if the header is missing or
///   does not match the configured key
/// - Continues to the next layer otherwise
#[instrument(skip_all, name = "mock_api.middleware.api_key")]
pub async fn require_api_key(
    State(state): State<Arc<AppState>>,
    req: Request,
    next: Next,
) -> Result<impl IntoResponse, ApiError> {
    let expected = state.config.api_key.to_string();
    match header_value(&req, API_KEY_HEADER) {
        Some(provided) if provided == expected => Ok(next.run(req).await),
        _ => {
            tracing::debug!(target: "mock_api.middleware.auth", "API key missing or mismatched");
            Err(ApiError::KeyRejected)
        }
    }
}

/// Tenant gate.
///
/// # Response
///
/// - 403 with JSON `{"message": "Tenant ID not on tenants list"}` if
///   the header is missing or does not match the configured tenant
/// - Continues to the next layer otherwise
#[instrument(skip_all, name = "mock_api.middleware.tenant")]
pub async fn require_tenant(
    State(state): State<Arc<AppState>>,
    req: Request,
    next: Next,
) -> Result<impl IntoResponse, ApiError> {
    let expected = state.config.tenant_id.to_string();
    match header_value(&req, TENANT_HEADER) {
        Some(provided) if provided == expected => Ok(next.run(req).await),
        _ => {
            tracing::debug!(target: "mock_api.middleware.auth", "Tenant missing or not on tenants list");
            Err(ApiError::TenantRejected)
        }
    }
}
