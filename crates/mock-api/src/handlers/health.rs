//! Health check handler.

/// Liveness probe handler.
///
/// Returns a simple "OK" response to indicate the process is running.
/// Mounted outside every gate: a probe must never be rejected by the
/// credential gates or failed by the fault injector.
pub async fn health_check() -> &'static str {
    "OK"
}
