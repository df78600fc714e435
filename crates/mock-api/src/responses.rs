//! Not-found response assembly.
//!
//! Builds the structured 404 bodies for the maestro route families
//! from their per-family `not_found.json` templates.

use crate::store::{FixtureStore, RouteFamily, StoreError};
use serde_json::Value;
use uuid::Uuid;

/// Build the not-found detail body for a route family.
///
/// The template is loaded fresh from the store on every call, so the
/// echo rewrite below only ever touches this request's copy.
///
/// When `echo` is set (the single-order route), the first error's
/// first detail `value` is overwritten with the canonical string form
/// of the requested identifier, so the error body names what the
/// caller asked for. Templates that don't have that shape are
/// returned as loaded.
pub async fn not_found_detail(
    store: &FixtureStore,
    family: RouteFamily,
    echo: Option<&Uuid>,
) -> Result<Value, StoreError> {
    let mut template = store.not_found_template(family).await?;

    if let Some(id) = echo {
        if let Some(value) = template
            .get_mut(0)
            .and_then(|error| error.get_mut("details"))
            .and_then(|details| details.get_mut(0))
            .and_then(|detail| detail.get_mut("value"))
        {
            *value = Value::String(id.to_string());
        }
    }

    Ok(template)
}
