//! Catalog handlers.
//!
//! - `GET /catalogs` - every catalog fixture as a JSON array
//! - `GET /catalogs/{code}` - a single catalog fixture by code
//!
//! Catalog codes are opaque strings; no shape validation is applied.
//! A missing catalog answers 404 with an empty body, with no error
//! template involved.

use crate::errors::ApiError;
use crate::routes::AppState;
use crate::store::{RouteFamily, StoreError};
use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::Value;
use std::sync::Arc;
use tracing::instrument;

/// Handler for GET /catalogs
///
/// # Response
///
/// - 200 with a JSON array holding one element per fixture file.
///   Element order follows store enumeration order and is not
///   guaranteed stable.
#[instrument(skip_all, name = "mock_api.catalogs.list")]
pub async fn list_catalogs(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Value>>, ApiError> {
    let documents = state.store.list(RouteFamily::Catalog).await?;
    Ok(Json(documents))
}

/// Handler for GET /catalogs/{code}
///
/// # Response
///
/// - 200 with the fixture document
/// - 404 with an empty body if no fixture exists for the code
#[instrument(skip_all, name = "mock_api.catalogs.get", fields(code = %code))]
pub async fn get_catalog(
    State(state): State<Arc<AppState>>,
    Path(code): Path<String>,
) -> Result<Json<Value>, ApiError> {
    match state.store.get(RouteFamily::Catalog, &code).await {
        Ok(document) => Ok(Json(document)),
        Err(StoreError::NotFound) => Err(ApiError::NotFound),
        Err(e) => Err(ApiError::Store(e)),
    }
}
