//! Maestro handlers.
//!
//! Implements the order endpoints:
//!
//! - `GET /maestro/v1/orders` - paged order listing fixture
//! - `GET /maestro/v1/orders/{order_id}` - single order
//! - `GET /maestro/v1/orders/{order_id}/packages/{package_id}` - packages
//! - `GET /maestro/v1/orders/{order_id}/packages/{package_id}/items` - package items
//!
//! Identifiers must be UUIDs; the paged listing only accepts the
//! fixed page size and offsets aligned to it. Misses answer 404 with
//! the route family's error template, and the single-order route
//! echoes the requested id back inside that template.

use crate::errors::ApiError;
use crate::models::OrdersQuery;
use crate::responses;
use crate::routes::AppState;
use crate::store::{self, RouteFamily, StoreError};
use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde_json::Value;
use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;

/// The only page size the orders listing serves.
const PAGE_SIZE: i64 = 10;

/// Handler for GET /maestro/v1/orders
///
/// # Response
///
/// - 200 with the page fixture named by the offset
/// - 400 if `_limit` is not 10 or `_offset` is not a multiple of 10
/// - 404 with the orders error template if no page fixture exists
#[instrument(skip_all, name = "mock_api.maestro.orders", fields(offset = query.offset))]
pub async fn list_orders(
    State(state): State<Arc<AppState>>,
    Query(query): Query<OrdersQuery>,
) -> Result<Json<Value>, ApiError> {
    if query.limit != PAGE_SIZE {
        return Err(ApiError::Validation("Limit must be 10".to_string()));
    }
    if query.offset % PAGE_SIZE != 0 {
        return Err(ApiError::Validation(
            "Offset must be multiple of 10".to_string(),
        ));
    }

    let stem = store::orders_page_stem(query.offset);
    match state.store.get(RouteFamily::Orders, &stem).await {
        Ok(document) => Ok(Json(document)),
        Err(StoreError::NotFound) => {
            let detail =
                responses::not_found_detail(&state.store, RouteFamily::Orders, None).await?;
            Err(ApiError::NotFoundDetail(detail))
        }
        Err(e) => Err(ApiError::Store(e)),
    }
}

/// Handler for GET /maestro/v1/orders/{order_id}
///
/// # Response
///
/// - 200 with the order fixture
/// - 422 if `order_id` is not a UUID
/// - 404 with the order error template, its first detail value
///   rewritten to the requested id
#[instrument(skip_all, name = "mock_api.maestro.order", fields(order_id = %order_id))]
pub async fn get_order(
    State(state): State<Arc<AppState>>,
    Path(order_id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let order_id = parse_uuid("order_id", &order_id)?;

    let stem = store::order_stem(&order_id);
    match state.store.get(RouteFamily::Order, &stem).await {
        Ok(document) => Ok(Json(document)),
        Err(StoreError::NotFound) => {
            let detail =
                responses::not_found_detail(&state.store, RouteFamily::Order, Some(&order_id))
                    .await?;
            Err(ApiError::NotFoundDetail(detail))
        }
        Err(e) => Err(ApiError::Store(e)),
    }
}

/// Handler for GET /maestro/v1/orders/{order_id}/packages/{package_id}
///
/// # Response
///
/// - 200 with the packages fixture
/// - 422 if either id is not a UUID
/// - 404 with the packages error template
#[instrument(skip_all, name = "mock_api.maestro.packages")]
pub async fn get_package(
    State(state): State<Arc<AppState>>,
    Path((order_id, package_id)): Path<(String, String)>,
) -> Result<Json<Value>, ApiError> {
    concatenated_fixture(&state, RouteFamily::Packages, &order_id, &package_id).await
}

/// Handler for GET /maestro/v1/orders/{order_id}/packages/{package_id}/items
///
/// # Response
///
/// - 200 with the package-items fixture
/// - 422 if either id is not a UUID
/// - 404 with the package-items error template
#[instrument(skip_all, name = "mock_api.maestro.package_items")]
pub async fn get_package_items(
    State(state): State<Arc<AppState>>,
    Path((order_id, package_id)): Path<(String, String)>,
) -> Result<Json<Value>, ApiError> {
    concatenated_fixture(&state, RouteFamily::PackageItems, &order_id, &package_id).await
}

async fn concatenated_fixture(
    state: &AppState,
    family: RouteFamily,
    order_id: &str,
    package_id: &str,
) -> Result<Json<Value>, ApiError> {
    let order_id = parse_uuid("order_id", order_id)?;
    let package_id = parse_uuid("package_id", package_id)?;

    let stem = store::package_stem(&order_id, &package_id);
    match state.store.get(family, &stem).await {
        Ok(document) => Ok(Json(document)),
        Err(StoreError::NotFound) => {
            let detail = responses::not_found_detail(&state.store, family, None).await?;
            Err(ApiError::NotFoundDetail(detail))
        }
        Err(e) => Err(ApiError::Store(e)),
    }
}

fn parse_uuid(param: &str, raw: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(raw)
        .map_err(|_| ApiError::InvalidIdentifier(format!("{param} must be a UUID")))
}
