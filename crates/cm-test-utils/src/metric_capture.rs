//! Metric capture helpers for asserting on recorded client requests.
//!
//! Install a `DebuggingRecorder` as the thread-local recorder for the test,
//! drive the instrumented client, then read the samples back:
//!
//! ```rust,ignore
//! let recorder = DebuggingRecorder::new();
//! let snapshotter = recorder.snapshotter();
//! let _guard = metrics::set_default_local_recorder(&recorder);
//!
//! client.get(url).await?;
//!
//! let samples = client_request_samples(&snapshotter);
//! ```

use client_metrics::observation::CLIENT_REQUESTS_METRIC;
use metrics_util::debugging::{DebugValue, Snapshotter};
use metrics_util::MetricKind;

/// One `http.client.requests` series as seen by the recorder.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientRequestSample {
    /// Labels in recording order.
    pub tags: Vec<(String, String)>,

    /// Number of observations recorded into the series.
    pub count: usize,
}

impl ClientRequestSample {
    /// Value of the first label with `key`.
    pub fn tag(&self, key: &str) -> Option<&str> {
        self.tags
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Labels as borrowed pairs, for comparing against literals.
    pub fn tag_pairs(&self) -> Vec<(&str, &str)> {
        self.tags
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect()
    }
}

/// All `http.client.requests` histogram series currently held by the recorder.
pub fn client_request_samples(snapshotter: &Snapshotter) -> Vec<ClientRequestSample> {
    snapshotter
        .snapshot()
        .into_vec()
        .into_iter()
        .filter(|(key, _, _, _)| {
            key.kind() == MetricKind::Histogram && key.key().name() == CLIENT_REQUESTS_METRIC
        })
        .map(|(key, _, _, value)| ClientRequestSample {
            tags: key
                .key()
                .labels()
                .map(|l| (l.key().to_string(), l.value().to_string()))
                .collect(),
            count: match value {
                DebugValue::Histogram(values) => values.len(),
                _ => 0,
            },
        })
        .collect()
}
