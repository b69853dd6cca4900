//! Instrumented HTTP client for outbound requests.
//!
//! Wraps `reqwest::Client`. Every request produces exactly one observation,
//! recorded through the configured convention once the request has either
//! returned a response or failed.

use crate::errors::ClientError;
use crate::observability::metrics::record_client_request;
use crate::observation::{
    ClientRequestContext, ClientRequestObservationConvention, CustomClientRequestConvention,
    ErrorInfo, ObservationOutcome, RequestInfo, ResponseInfo,
};
use reqwest::{Client, IntoUrl, Request, Response};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, error, instrument};

/// Connect timeout for outbound requests in seconds.
const CONNECT_TIMEOUT_SECS: u64 = 5;

/// HTTP client that records `http.client.requests` for every call.
#[derive(Clone)]
pub struct InstrumentedClient {
    client: Client,
    convention: Arc<dyn ClientRequestObservationConvention>,
}

impl InstrumentedClient {
    /// Create a client with the given request timeout and the custom convention.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Build` if the HTTP client cannot be built.
    pub fn new(timeout: Duration) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(timeout)
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS).min(timeout))
            .build()
            .map_err(|e| {
                error!(target: "cm.services.instrumented_client", error = %e, "Failed to build HTTP client");
                ClientError::Build(e)
            })?;

        Ok(Self::with_convention(
            client,
            Arc::new(CustomClientRequestConvention),
        ))
    }

    /// Wrap an existing client with any convention.
    pub fn with_convention(
        client: Client,
        convention: Arc<dyn ClientRequestObservationConvention>,
    ) -> Self {
        Self { client, convention }
    }

    /// Convention used to name and tag observations.
    pub fn convention(&self) -> &dyn ClientRequestObservationConvention {
        self.convention.as_ref()
    }

    /// Send a GET request to `url`.
    ///
    /// # Errors
    ///
    /// - `ClientError::Request` if the URL is invalid or the request fails
    pub async fn get(&self, url: impl IntoUrl) -> Result<Response, ClientError> {
        let request = self
            .client
            .get(url)
            .build()
            .map_err(ClientError::Request)?;

        self.execute(request).await
    }

    /// Send a prepared request and record its observation.
    ///
    /// Any received response counts as a completed call, whatever its status.
    ///
    /// # Errors
    ///
    /// - `ClientError::Request` if no response was received
    #[instrument(skip_all, name = "cm.client.request", fields(method = %request.method()))]
    pub async fn execute(&self, request: Request) -> Result<Response, ClientError> {
        let request_info = RequestInfo::from(&request);
        let start = Instant::now();

        let result = self.client.execute(request).await;

        let duration = start.elapsed();
        let outcome = match &result {
            Ok(response) => ObservationOutcome::Success(ResponseInfo::from(response)),
            Err(e) => ObservationOutcome::Failure(ErrorInfo::of(e)),
        };
        let context = ClientRequestContext::new(request_info, outcome);

        debug!(
            target: "cm.services.instrumented_client",
            status = context.response().map(ResponseInfo::raw_status),
            error = context.error().map(ErrorInfo::type_name),
            duration_ms = duration_millis(duration),
            "Client request observed"
        );

        record_client_request(self.convention.as_ref(), &context, duration);

        result.map_err(ClientError::Request)
    }
}

/// Whole milliseconds in `duration`, saturating at `u64::MAX`.
fn duration_millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::observation::DefaultClientRequestConvention;

    #[test]
    fn test_new_uses_custom_convention() {
        let client = InstrumentedClient::new(Duration::from_secs(10)).unwrap();
        assert_eq!(client.convention().name(), "http.client.requests");
    }

    #[test]
    fn test_instrumented_client_is_clone() {
        fn assert_clone<T: Clone>() {}
        assert_clone::<InstrumentedClient>();
    }

    #[test]
    fn test_duration_millis() {
        assert_eq!(duration_millis(Duration::from_micros(1_500_900)), 1500);
        assert_eq!(duration_millis(Duration::ZERO), 0);
    }

    #[test]
    fn test_duration_millis_saturates() {
        // Duration::MAX is ~1.8e22 ms, beyond u64.
        assert_eq!(duration_millis(Duration::MAX), u64::MAX);
    }

    #[tokio::test]
    async fn test_get_rejects_invalid_url() {
        let client = InstrumentedClient::with_convention(
            Client::new(),
            Arc::new(DefaultClientRequestConvention),
        );

        let result = client.get("not a url").await;
        assert!(matches!(result, Err(ClientError::Request(_))));
    }
}
