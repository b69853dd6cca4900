//! HTTP routes for the client metrics service.
//!
//! Defines the Axum router.

use crate::handlers;
use axum::{routing::get, Router};
use metrics_exporter_prometheus::PrometheusHandle;
use std::time::Duration;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

/// Request timeout applied to every route.
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Build the application routes.
///
/// Creates an Axum router with:
/// - `/user` - Mock user endpoint, target of instrumented client calls
/// - `/health` - Liveness probe (simple "OK")
/// - `/metrics` - Prometheus metrics endpoint
/// - TraceLayer for request logging
/// - 30 second request timeout
pub fn build_routes(metrics_handle: PrometheusHandle) -> Router {
    let public_routes = Router::new()
        .route("/user", get(handlers::user_details))
        .route("/health", get(handlers::health_check));

    let metrics_routes = Router::new()
        .route("/metrics", get(handlers::metrics_handler))
        .with_state(metrics_handle);

    public_routes
        .merge(metrics_routes)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(Duration::from_secs(REQUEST_TIMEOUT_SECS)))
}
