//! Metrics definitions for outbound HTTP client requests.
//!
//! # Cardinality
//!
//! Labels come from the active convention. The standard ones are bounded:
//! - `method`: 9 values max (standard HTTP verbs)
//! - `status`: status codes seen, plus `""`
//! - `exception`: bounded by the error types the client can produce
//!
//! The custom `userId` label is per-user and exists to demonstrate
//! conditional tags; keep it out of production conventions.

use crate::observation::{ClientRequestContext, ClientRequestObservationConvention};
use metrics::histogram;
use metrics_exporter_prometheus::{Matcher, PrometheusBuilder, PrometheusHandle};
use std::time::Duration;

/// Exported (sanitized) form of the client request metric name.
const CLIENT_REQUESTS_EXPORTED_PREFIX: &str = "http_client_requests";

/// Client request latency buckets, in seconds.
const CLIENT_REQUEST_BUCKETS: &[f64] = &[
    0.005, 0.010, 0.025, 0.050, 0.100, 0.250, 0.500, 1.000, 2.500, 5.000, 10.000,
];

/// Initialize Prometheus metrics recorder and return the handle
/// for serving metrics via HTTP.
///
/// Must be called before any metrics are recorded.
///
/// # Errors
///
/// Returns error if Prometheus recorder fails to install (e.g., already installed).
pub fn init_metrics_recorder() -> Result<PrometheusHandle, String> {
    PrometheusBuilder::new()
        .set_buckets_for_metric(
            Matcher::Prefix(CLIENT_REQUESTS_EXPORTED_PREFIX.to_string()),
            CLIENT_REQUEST_BUCKETS,
        )
        .map_err(|e| format!("Failed to set client request buckets: {e}"))?
        .install_recorder()
        .map_err(|e| format!("Failed to install Prometheus recorder: {e}"))
}

/// Record one completed or failed client request.
///
/// Metric: `convention.name()` (histogram, seconds)
/// Labels: `convention.low_cardinality_tags(context)`, in order
pub fn record_client_request(
    convention: &dyn ClientRequestObservationConvention,
    context: &ClientRequestContext,
    duration: Duration,
) {
    let labels = convention.low_cardinality_tags(context).to_labels();

    histogram!(convention.name(), labels).record(duration.as_secs_f64());
}
