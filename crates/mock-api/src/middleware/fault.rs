//! Probabilistic fault injection.
//!
//! Each request is an independent Bernoulli trial: with probability
//! `fail_rate / 100` the request is short-circuited with a 500 and an
//! empty body. There is no state and no memory across requests; this
//! is not a circuit breaker. The point is to exercise caller-side
//! retry logic, so no retries happen here either.

use crate::errors::ApiError;
use crate::routes::AppState;
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::IntoResponse,
};
use rand::Rng;
use std::sync::Arc;
use tracing::instrument;

/// Fault-injection gate.
///
/// # Response
///
/// - 500 with an empty body for a `fail_rate`% share of requests
/// - Continues to the next layer otherwise
///
/// At `fail_rate` 0 this is a no-op; at 100 every request fails.
#[instrument(skip_all, name = "mock_api.middleware.fault")]
pub async fn inject_faults(
    State(state): State<Arc<AppState>>,
    req: Request,
    next: Next,
) -> Result<impl IntoResponse, ApiError> {
    let draw: f64 = rand::thread_rng().gen();
    if draw < f64::from(state.config.fail_rate) / 100.0 {
        tracing::debug!(target: "mock_api.middleware.fault", "Injecting synthetic failure");
        return Err(ApiError::Injected);
    }
    Ok(next.run(req).await)
}
