//! Error types for the instrumented HTTP client.
//!
//! Metric derivation itself never fails; these errors only cover building
//! the client and sending requests.

use thiserror::Error;

/// Instrumented client error type.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Failed to build HTTP client: {0}")]
    Build(#[source] reqwest::Error),

    #[error("Request failed: {0}")]
    Request(#[source] reqwest::Error),
}

impl ClientError {
    /// Whether the failure was a timeout (connect or request).
    pub fn is_timeout(&self) -> bool {
        match self {
            ClientError::Build(_) => false,
            ClientError::Request(e) => e.is_timeout(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    /// A reqwest error that is not a timeout: invalid header values surface
    /// from `RequestBuilder::build()`.
    fn non_timeout_error() -> reqwest::Error {
        reqwest::Client::new()
            .get("http://localhost/")
            .header("x-bad", "line\nbreak")
            .build()
            .unwrap_err()
    }

    #[test]
    fn test_build_error_display() {
        let error = ClientError::Build(non_timeout_error());
        assert!(error
            .to_string()
            .starts_with("Failed to build HTTP client: "));
        assert!(!error.is_timeout());
    }

    #[test]
    fn test_request_error_display() {
        let error = ClientError::Request(non_timeout_error());
        assert!(error.to_string().starts_with("Request failed: "));
        assert!(!error.is_timeout());
    }

    #[test]
    fn test_error_source_is_reqwest_error() {
        use std::error::Error as _;

        let error = ClientError::Build(non_timeout_error());
        assert!(error
            .source()
            .is_some_and(|source| source.is::<reqwest::Error>()));
    }
}
