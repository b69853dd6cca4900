//! Services for the client metrics crate.
//!
//! # Components
//!
//! - `instrumented_client` - Outbound HTTP client that records client request metrics

pub mod instrumented_client;

pub use instrumented_client::InstrumentedClient;
