//! Client request observation conventions.
//!
//! A convention names the client request metric and derives its
//! low-cardinality tags from a [`ClientRequestContext`]. Derivation is pure:
//! no I/O, no logging, no shared mutable state.

use super::context::{ClientRequestContext, ResponseInfo};
use metrics::Label;

/// Name of the client request metric.
///
/// The Prometheus exporter renders it as `http_client_requests`.
pub const CLIENT_REQUESTS_METRIC: &str = "http.client.requests";

/// Value of the `exception` tag when the request did not fail.
pub const NO_EXCEPTION: &str = "none";

/// Query parameter copied into the `userId` tag.
pub const USER_ID_QUERY_PARAM: &str = "id";

/// Value of the static example dimension.
pub const CUSTOM_TAG_VALUE: &str = "value";

/// Tag keys.
pub mod keys {
    pub const METHOD: &str = "method";
    pub const STATUS: &str = "status";
    pub const EXCEPTION: &str = "exception";
    pub const USER_ID: &str = "userId";
    pub const TAG: &str = "tag";
}

/// A single metric dimension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    key: &'static str,
    value: String,
}

impl Tag {
    pub fn new(key: &'static str, value: impl Into<String>) -> Self {
        Self {
            key,
            value: value.into(),
        }
    }

    pub fn key(&self) -> &'static str {
        self.key
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

impl From<&Tag> for Label {
    fn from(tag: &Tag) -> Self {
        Label::new(tag.key, tag.value.clone())
    }
}

/// Ordered set of tags, in derivation order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tags(Vec<Tag>);

impl Tags {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn of(tags: impl IntoIterator<Item = Tag>) -> Self {
        Self(tags.into_iter().collect())
    }

    /// Append one tag.
    #[must_use]
    pub fn and(mut self, tag: Tag) -> Self {
        self.0.push(tag);
        self
    }

    /// Append all of `other`, keeping its order.
    #[must_use]
    pub fn and_all(mut self, other: Tags) -> Self {
        self.0.extend(other.0);
        self
    }

    /// Value of the first tag with `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.iter().find(|t| t.key == key).map(Tag::value)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Tag> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Convert into `metrics` labels, preserving order.
    pub fn to_labels(&self) -> Vec<Label> {
        self.0.iter().map(Label::from).collect()
    }
}

impl<'a> IntoIterator for &'a Tags {
    type Item = &'a Tag;
    type IntoIter = std::slice::Iter<'a, Tag>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Names the client request metric and derives its tags.
///
/// The provided methods produce the standard `method`, `status` and
/// `exception` tags; implementations override
/// [`low_cardinality_tags`](Self::low_cardinality_tags) to add their own.
pub trait ClientRequestObservationConvention: Send + Sync {
    /// Metric name. Constant for the life of the process.
    fn name(&self) -> &'static str {
        CLIENT_REQUESTS_METRIC
    }

    fn low_cardinality_tags(&self, context: &ClientRequestContext) -> Tags {
        Tags::of([
            self.method_tag(context),
            self.status_tag(context),
            self.exception_tag(context),
        ])
    }

    fn method_tag(&self, context: &ClientRequestContext) -> Tag {
        Tag::new(keys::METHOD, context.request().method().as_str())
    }

    /// Decimal status code, or `""` when none can be read.
    ///
    /// A missing response and a malformed status are reported the same way.
    fn status_tag(&self, context: &ClientRequestContext) -> Tag {
        let status = match context.response().map(ResponseInfo::status_code) {
            Some(Ok(code)) => code.as_u16().to_string(),
            _ => String::new(),
        };
        Tag::new(keys::STATUS, status)
    }

    fn exception_tag(&self, context: &ClientRequestContext) -> Tag {
        let exception = context
            .error()
            .map_or(NO_EXCEPTION, |error| error.type_name());
        Tag::new(keys::EXCEPTION, exception)
    }
}

/// Standard tags only.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultClientRequestConvention;

impl ClientRequestObservationConvention for DefaultClientRequestConvention {}

/// Standard tags followed by `userId` (when the URI has an `id` query
/// parameter) and the static `tag=value` dimension.
#[derive(Debug, Clone, Copy, Default)]
pub struct CustomClientRequestConvention;

impl CustomClientRequestConvention {
    pub fn additional_tags(&self, context: &ClientRequestContext) -> Tags {
        // Raw query text: the value is reported as written, not decoded.
        let user_id = context.request().uri().query().and_then(|query| {
            query.split('&').find_map(|pair| {
                let (name, value) = pair.split_once('=').unwrap_or((pair, ""));
                (name == USER_ID_QUERY_PARAM).then(|| Tag::new(keys::USER_ID, value))
            })
        });

        Tags::of(user_id).and(Tag::new(keys::TAG, CUSTOM_TAG_VALUE))
    }
}

impl ClientRequestObservationConvention for CustomClientRequestConvention {
    fn low_cardinality_tags(&self, context: &ClientRequestContext) -> Tags {
        Tags::of([
            self.method_tag(context),
            self.status_tag(context),
            self.exception_tag(context),
        ])
        .and_all(self.additional_tags(context))
    }
}
