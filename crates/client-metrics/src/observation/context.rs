//! Observation context for a single outbound HTTP request.
//!
//! The instrumented client builds one [`ClientRequestContext`] per call and
//! hands it to a convention once the call has completed or failed.

use reqwest::{Method, StatusCode, Url};
use std::borrow::Cow;
use thiserror::Error;

/// Read-only view of an outbound request at observation time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestInfo {
    method: Method,
    uri: Url,
}

impl RequestInfo {
    pub fn new(method: Method, uri: Url) -> Self {
        Self { method, uri }
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Absolute request URI, including any query string.
    pub fn uri(&self) -> &Url {
        &self.uri
    }
}

impl From<&reqwest::Request> for RequestInfo {
    fn from(request: &reqwest::Request) -> Self {
        Self::new(request.method().clone(), request.url().clone())
    }
}

/// Raw status value that is not a valid HTTP status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("malformed HTTP status code: {0}")]
pub struct MalformedStatus(pub u16);

/// Response metadata as received on the wire.
///
/// The status is kept raw; reading it as an HTTP status is fallible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResponseInfo {
    raw_status: u16,
}

impl ResponseInfo {
    pub fn new(raw_status: u16) -> Self {
        Self { raw_status }
    }

    pub fn raw_status(&self) -> u16 {
        self.raw_status
    }

    /// Read the status code.
    ///
    /// # Errors
    ///
    /// Returns [`MalformedStatus`] when the raw value is outside `100..=999`.
    pub fn status_code(&self) -> Result<StatusCode, MalformedStatus> {
        StatusCode::from_u16(self.raw_status).map_err(|_| MalformedStatus(self.raw_status))
    }
}

impl From<&reqwest::Response> for ResponseInfo {
    fn from(response: &reqwest::Response) -> Self {
        Self::new(response.status().as_u16())
    }
}

/// Identity of the error that terminated a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorInfo {
    type_name: Cow<'static, str>,
}

impl ErrorInfo {
    /// Capture the fully-qualified type name of `error`.
    ///
    /// The name is taken from the static type, so pass the concrete error.
    /// Unsized trait objects are rejected at compile time, since they would
    /// only report `dyn Error`. Use [`ErrorInfo::named`] when the concrete
    /// type is erased.
    pub fn of<E>(_error: &E) -> Self {
        Self {
            type_name: Cow::Borrowed(std::any::type_name::<E>()),
        }
    }

    /// Use an explicit type name, e.g. one reported by a foreign error source.
    pub fn named(type_name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            type_name: type_name.into(),
        }
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }
}

/// How an outbound request ended, as far as the observer knows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ObservationOutcome {
    /// A response was received.
    Success(ResponseInfo),
    /// The request failed before a response was received.
    Failure(ErrorInfo),
    /// Neither a response nor an error is known yet.
    #[default]
    InFlight,
}

/// Request plus outcome, presented to a
/// [`ClientRequestObservationConvention`](super::ClientRequestObservationConvention).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientRequestContext {
    request: RequestInfo,
    outcome: ObservationOutcome,
}

impl ClientRequestContext {
    pub fn new(request: RequestInfo, outcome: ObservationOutcome) -> Self {
        Self { request, outcome }
    }

    pub fn request(&self) -> &RequestInfo {
        &self.request
    }

    pub fn outcome(&self) -> &ObservationOutcome {
        &self.outcome
    }

    pub fn response(&self) -> Option<&ResponseInfo> {
        match &self.outcome {
            ObservationOutcome::Success(response) => Some(response),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&ErrorInfo> {
        match &self.outcome {
            ObservationOutcome::Failure(error) => Some(error),
            _ => None,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    struct ConnectTimeoutError;

    #[test]
    fn test_status_code_valid() {
        let response = ResponseInfo::new(404);
        assert_eq!(response.status_code().unwrap(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_status_code_malformed() {
        assert_eq!(
            ResponseInfo::new(1000).status_code(),
            Err(MalformedStatus(1000))
        );
        assert_eq!(ResponseInfo::new(42).status_code(), Err(MalformedStatus(42)));
    }

    #[test]
    fn test_error_info_uses_fully_qualified_type_name() {
        let info = ErrorInfo::of(&ConnectTimeoutError);
        assert_eq!(
            info.type_name(),
            std::any::type_name::<ConnectTimeoutError>()
        );
        assert!(info.type_name().ends_with("::ConnectTimeoutError"));
    }

    #[test]
    fn test_error_info_reports_concrete_type_behind_box() {
        let boxed = Box::new(std::io::Error::other("connection reset"));
        let info = ErrorInfo::of(boxed.as_ref());
        assert_eq!(info.type_name(), std::any::type_name::<std::io::Error>());
        assert!(!info.type_name().starts_with("dyn "));
    }

    #[test]
    fn test_context_accessors_follow_outcome() {
        let request = RequestInfo::new(
            Method::GET,
            Url::parse("http://service/user").unwrap(),
        );

        let success = ClientRequestContext::new(
            request.clone(),
            ObservationOutcome::Success(ResponseInfo::new(200)),
        );
        assert_eq!(success.response().map(ResponseInfo::raw_status), Some(200));
        assert!(success.error().is_none());

        let failure = ClientRequestContext::new(
            request.clone(),
            ObservationOutcome::Failure(ErrorInfo::named("ConnectTimeoutError")),
        );
        assert!(failure.response().is_none());
        assert_eq!(
            failure.error().map(ErrorInfo::type_name),
            Some("ConnectTimeoutError")
        );

        let in_flight = ClientRequestContext::new(request, ObservationOutcome::default());
        assert!(in_flight.response().is_none());
        assert!(in_flight.error().is_none());
    }
}
