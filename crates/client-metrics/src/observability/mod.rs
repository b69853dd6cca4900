//! Observability module for the client metrics service.
//!
//! Provides the Prometheus recorder and recording of client request
//! observations.

pub mod metrics;

pub use metrics::{init_metrics_recorder, record_client_request};
