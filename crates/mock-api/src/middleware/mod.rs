//! Request gates for the mock services.
//!
//! # Components
//!
//! - `auth` - API-key and tenant header gates
//! - `fault` - probabilistic failure injection
//!
//! Gates are wired into routers by `routes::build_routes` according to
//! the configured [`crate::config::PipelineConfig`].

pub mod auth;
pub mod fault;

pub use auth::{require_api_key, require_tenant};
pub use fault::inject_faults;
