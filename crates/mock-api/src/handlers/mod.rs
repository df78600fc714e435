//! HTTP request handlers.
//!
//! # Components
//!
//! - `catalogs` - catalog listing and retrieval
//! - `account` - fixed whoami fixtures
//! - `maestro` - orders, packages and package items
//! - `health` - liveness probe

pub mod account;
pub mod catalogs;
pub mod health;
pub mod maestro;

pub use account::{whoami, whoami_tenants};
pub use catalogs::{get_catalog, list_catalogs};
pub use health::health_check;
pub use maestro::{get_order, get_package, get_package_items, list_orders};
