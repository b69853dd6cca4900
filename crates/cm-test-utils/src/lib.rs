//! # Client Metrics Test Utilities
//!
//! Shared test utilities for the client metrics service.
//!
//! This crate provides:
//! - Server test harness (`TestUserServer` for E2E tests)
//! - Metric capture (`ClientRequestSample`, `client_request_samples`)
//!
//! ## Usage
//!
//! ```rust,ignore
//! use cm_test_utils::*;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<()> {
//!     let server = TestUserServer::spawn().await?;
//!     let client = reqwest::Client::new();
//!
//!     let response = client
//!         .get(format!("{}/user", server.url()))
//!         .send()
//!         .await?;
//!
//!     assert_eq!(response.status(), 200);
//!     Ok(())
//! }
//! ```

pub mod metric_capture;
pub mod server_harness;

// Re-export commonly used items
pub use metric_capture::*;
pub use server_harness::*;
