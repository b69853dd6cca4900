//! Client Metrics Library
//!
//! Custom tagging for outbound HTTP client request metrics.
//!
//! Every outbound call made through [`services::InstrumentedClient`] is
//! described by an [`observation::ClientRequestContext`] and recorded as the
//! `http.client.requests` histogram, tagged by an
//! [`observation::ClientRequestObservationConvention`].
//!
//! # Modules
//!
//! - `config` - Service configuration from environment
//! - `errors` - Client error types
//! - `handlers` - HTTP request handlers, including the mock `/user` endpoint
//! - `observability` - Prometheus recorder and metric recording
//! - `observation` - Observation context and tag conventions
//! - `routes` - Axum router setup
//! - `services` - Instrumented HTTP client

pub mod config;
pub mod errors;
pub mod handlers;
pub mod observability;
pub mod observation;
pub mod routes;
pub mod services;
