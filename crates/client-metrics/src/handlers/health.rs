//! Liveness probe handler.

use tracing::instrument;

/// Handler for GET /health
///
/// Returns "OK" while the process is serving requests.
#[instrument(skip_all, name = "cm.health.check")]
pub async fn health_check() -> &'static str {
    "OK"
}
