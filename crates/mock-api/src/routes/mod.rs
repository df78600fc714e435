//! HTTP routes for the mock services.
//!
//! Defines the Axum routers and application state. Two builders share
//! one gate pipeline:
//!
//! - [`build_routes`] - the full simulated backend (catalog, account,
//!   maestro)
//! - [`build_catalog_routes`] - the reduced catalog-only deployment
//!
//! Gates run in the order listed in the configured
//! [`PipelineConfig`]; `/health` is mounted outside every gate.

use crate::config::{Config, Gate, PipelineConfig, TenantScope};
use crate::handlers;
use crate::middleware::{inject_faults, require_api_key, require_tenant};
use crate::store::FixtureStore;
use axum::{middleware, routing::get, Router};
use std::sync::Arc;
use std::time::Duration;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

/// Request timeout applied to every router.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Service configuration, read once at startup.
    pub config: Config,

    /// Gate ordering and scoping for this deployment.
    pub pipeline: PipelineConfig,

    /// Read-only fixture resolution.
    pub store: FixtureStore,
}

impl AppState {
    pub fn new(config: Config, pipeline: PipelineConfig) -> Self {
        let store = FixtureStore::new(&config.data_dir);
        Self {
            config,
            pipeline,
            store,
        }
    }
}

/// Build the full mock backend routes.
///
/// Route table:
/// - `GET /health` - liveness probe, ungated
/// - `GET /catalogs`, `GET /catalogs/{code}`
/// - `GET /account/v1/whoami`, `GET /account/v1/whoami/tenants`
/// - `GET /maestro/v1/orders` and the nested order/package routes
///
/// All gated routes sit behind the configured pipeline; when the
/// tenant scope is [`TenantScope::MaestroOnly`] the tenant gate wraps
/// only the maestro group.
pub fn build_routes(state: Arc<AppState>) -> Router {
    let account = Router::new()
        .route("/account/v1/whoami", get(handlers::whoami))
        .route("/account/v1/whoami/tenants", get(handlers::whoami_tenants))
        .with_state(state.clone());

    let mut maestro = Router::new()
        .route("/maestro/v1/orders", get(handlers::list_orders))
        .route("/maestro/v1/orders/:order_id", get(handlers::get_order))
        .route(
            "/maestro/v1/orders/:order_id/packages/:package_id",
            get(handlers::get_package),
        )
        .route(
            "/maestro/v1/orders/:order_id/packages/:package_id/items",
            get(handlers::get_package_items),
        )
        .with_state(state.clone());

    if state.pipeline.tenant_scope == TenantScope::MaestroOnly {
        maestro = maestro.route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_tenant,
        ));
    }

    let api = catalog_router(state.clone()).merge(account).merge(maestro);

    finish(public_routes().merge(apply_gates(api, &state)))
}

/// Build the reduced catalog-only routes.
///
/// Same catalog handlers and gate plumbing as the full service; the
/// shipped binary configures a fault-only pipeline, so no credential
/// gates apply.
pub fn build_catalog_routes(state: Arc<AppState>) -> Router {
    let api = apply_gates(catalog_router(state.clone()), &state);
    finish(public_routes().merge(api))
}

fn catalog_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/catalogs", get(handlers::list_catalogs))
        .route("/catalogs/:code", get(handlers::get_catalog))
        .with_state(state)
}

fn public_routes() -> Router {
    Router::new().route("/health", get(handlers::health_check))
}

/// Wrap `router` in the configured gates.
///
/// `gates` lists evaluation order with the first entry outermost, and
/// Axum executes the layer added last first, so layers are applied in
/// reverse. A tenant gate scoped to the maestro group is attached
/// where that group is built, not here.
fn apply_gates(mut router: Router, state: &Arc<AppState>) -> Router {
    for gate in state.pipeline.gates.iter().rev() {
        router = match gate {
            Gate::ApiKey => router.layer(middleware::from_fn_with_state(
                state.clone(),
                require_api_key,
            )),
            Gate::Tenant if state.pipeline.tenant_scope == TenantScope::AllRoutes => router
                .layer(middleware::from_fn_with_state(
                    state.clone(),
                    require_tenant,
                )),
            Gate::Tenant => router,
            Gate::FaultInjection => router.layer(middleware::from_fn_with_state(
                state.clone(),
                inject_faults,
            )),
        };
    }
    router
}

fn finish(router: Router) -> Router {
    router
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(REQUEST_TIMEOUT))
}
