//! Request models shared across handlers.

use serde::Deserialize;

/// Query parameters of the orders listing endpoint.
///
/// The underscore-prefixed wire names are what clients of the
/// simulated backend already send.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct OrdersQuery {
    /// Page size; only the fixed page size of 10 is accepted.
    #[serde(rename = "_limit", default = "default_limit")]
    pub limit: i64,

    /// Page offset; must be a multiple of the page size.
    #[serde(rename = "_offset", default)]
    pub offset: i64,
}

fn default_limit() -> i64 {
    10
}
