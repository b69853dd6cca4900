//! Client request observation.
//!
//! One [`ClientRequestContext`] describes one outbound HTTP call. A
//! [`ClientRequestObservationConvention`] turns it into the metric name and
//! the low-cardinality tags recorded for that call.
//!
//! # Tags
//!
//! | Key | Value |
//! |-----|-------|
//! | `method` | HTTP method, uppercase |
//! | `status` | status code, `""` if none could be read |
//! | `exception` | error type name, `"none"` if the call did not fail |
//! | `userId` | first `id` query parameter (custom convention, only if present) |
//! | `tag` | `"value"` (custom convention) |

pub mod context;
pub mod convention;

pub use context::{
    ClientRequestContext, ErrorInfo, MalformedStatus, ObservationOutcome, RequestInfo,
    ResponseInfo,
};
pub use convention::{
    ClientRequestObservationConvention, CustomClientRequestConvention,
    DefaultClientRequestConvention, Tag, Tags, CLIENT_REQUESTS_METRIC,
};
