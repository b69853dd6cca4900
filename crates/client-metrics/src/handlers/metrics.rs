//! Prometheus metrics endpoint handler.
//!
//! Provides `/metrics` endpoint for Prometheus scraping.

use axum::{extract::State, response::IntoResponse};
use metrics_exporter_prometheus::PrometheusHandle;

/// Handler for GET /metrics
///
/// Returns Prometheus-formatted metrics for scraping.
///
/// # Response
///
/// Returns 200 OK with Prometheus text format:
/// ```text
/// # TYPE http_client_requests histogram
/// http_client_requests_bucket{method="GET",status="200",exception="none",userId="7",tag="value",le="0.005"} 0
/// ```
#[tracing::instrument(skip_all, name = "cm.metrics.scrape")]
pub async fn metrics_handler(State(handle): State<PrometheusHandle>) -> impl IntoResponse {
    handle.render()
}
