//! Mock Backend API Service Library
//!
//! Simulates a handful of backend APIs (catalog, account,
//! order/maestro) by serving pre-canned JSON fixtures keyed by
//! request parameters, gated by static header credentials, with
//! optional probabilistic fault injection for client resilience
//! testing.
//!
//! # Modules
//!
//! - `config` - Service and gate-pipeline configuration
//! - `errors` - Error types
//! - `handlers` - HTTP request handlers
//! - `middleware` - Credential gates and fault injection
//! - `models` - Request models
//! - `responses` - Not-found response assembly
//! - `routes` - Router builders and application state
//! - `store` - Read-only fixture store

pub mod config;
pub mod errors;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod responses;
pub mod routes;
pub mod store;
