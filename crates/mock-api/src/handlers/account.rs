//! Account handlers.
//!
//! Both endpoints return a fixed fixture; there are no parameters.

use crate::errors::ApiError;
use crate::routes::AppState;
use crate::store::{RouteFamily, StoreError};
use axum::{extract::State, Json};
use serde_json::Value;
use std::sync::Arc;
use tracing::instrument;

/// Handler for GET /account/v1/whoami
#[instrument(skip_all, name = "mock_api.account.whoami")]
pub async fn whoami(State(state): State<Arc<AppState>>) -> Result<Json<Value>, ApiError> {
    fixed_fixture(&state, "whoami").await
}

/// Handler for GET /account/v1/whoami/tenants
#[instrument(skip_all, name = "mock_api.account.whoami_tenants")]
pub async fn whoami_tenants(State(state): State<Arc<AppState>>) -> Result<Json<Value>, ApiError> {
    fixed_fixture(&state, "whoami_tenants").await
}

async fn fixed_fixture(state: &AppState, stem: &str) -> Result<Json<Value>, ApiError> {
    match state.store.get(RouteFamily::Account, stem).await {
        Ok(document) => Ok(Json(document)),
        Err(StoreError::NotFound) => Err(ApiError::NotFound),
        Err(e) => Err(ApiError::Store(e)),
    }
}
