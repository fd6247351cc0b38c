//! Metrics for the feed gateway
//!
//! Recording goes through the `metrics` facade; until [`init`] installs the
//! Prometheus recorder every call is a no-op.

use crate::error::{GatewayError, Result};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use std::fmt;
use std::sync::OnceLock;
use tracing::info;

/// Enum representing all metric names used in the system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetricName {
    // Upstream metrics
    UpstreamRequestsSuccess,
    UpstreamRequestsError,
    UpstreamRequestDuration,
    UpstreamPayloadBytes,

    // Adapter metrics
    AdapterFetchSuccess,
    AdapterFetchError,
    AdapterFetchDuration,
    AdapterRecordsExtracted,
}

impl fmt::Display for MetricName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl MetricName {
    pub fn as_str(&self) -> &'static str {
        match self {
            MetricName::UpstreamRequestsSuccess => "feed_gateway_upstream_requests_success_total",
            MetricName::UpstreamRequestsError => "feed_gateway_upstream_requests_error_total",
            MetricName::UpstreamRequestDuration => "feed_gateway_upstream_request_duration_seconds",
            MetricName::UpstreamPayloadBytes => "feed_gateway_upstream_payload_bytes",

            MetricName::AdapterFetchSuccess => "feed_gateway_adapter_fetch_success_total",
            MetricName::AdapterFetchError => "feed_gateway_adapter_fetch_error_total",
            MetricName::AdapterFetchDuration => "feed_gateway_adapter_fetch_duration_seconds",
            MetricName::AdapterRecordsExtracted => "feed_gateway_adapter_records_extracted_total",
        }
    }

    pub fn all_metrics() -> impl Iterator<Item = MetricName> {
        use MetricName::*;
        [
            UpstreamRequestsSuccess,
            UpstreamRequestsError,
            UpstreamRequestDuration,
            UpstreamPayloadBytes,
            AdapterFetchSuccess,
            AdapterFetchError,
            AdapterFetchDuration,
            AdapterRecordsExtracted,
        ]
        .into_iter()
    }

    pub fn is_histogram(&self) -> bool {
        let name = self.as_str();
        name.ends_with("_seconds") || name.ends_with("_bytes")
    }

    /// Returns (phase, description)
    pub fn metadata(&self) -> (&'static str, &'static str) {
        match self {
            MetricName::UpstreamRequestsSuccess => ("upstream", "Successful upstream requests"),
            MetricName::UpstreamRequestsError => ("upstream", "Failed upstream requests"),
            MetricName::UpstreamRequestDuration => ("upstream", "Upstream request duration in seconds"),
            MetricName::UpstreamPayloadBytes => ("upstream", "Upstream payload size in bytes"),

            MetricName::AdapterFetchSuccess => ("adapter", "Adapter fetches that produced records"),
            MetricName::AdapterFetchError => ("adapter", "Adapter fetches that failed, by error kind"),
            MetricName::AdapterFetchDuration => ("adapter", "Fetch, decode and map duration in seconds"),
            MetricName::AdapterRecordsExtracted => ("adapter", "Normalized records produced"),
        }
    }
}

static METRICS_HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

/// Install the Prometheus recorder. Calling it again is a no-op.
pub fn init() -> Result<()> {
    if METRICS_HANDLE.get().is_some() {
        return Ok(());
    }

    let handle = PrometheusBuilder::new()
        .install_recorder()
        .map_err(|e| GatewayError::Config(format!("Failed to install Prometheus recorder: {e}")))?;

    for metric in MetricName::all_metrics() {
        let (phase, description) = metric.metadata();
        let description = format!("[{phase}] {description}");
        if metric.is_histogram() {
            ::metrics::describe_histogram!(metric.as_str(), description);
        } else {
            ::metrics::describe_counter!(metric.as_str(), description);
        }
    }

    METRICS_HANDLE.set(handle).ok();
    info!("Metrics system initialized");
    Ok(())
}

/// Prometheus text exposition, if the recorder is installed
pub fn render() -> Option<String> {
    METRICS_HANDLE.get().map(PrometheusHandle::render)
}

// ============================================================================
// Upstream Metrics
// ============================================================================

pub mod upstream {
    use super::MetricName;

    pub fn request_success() {
        ::metrics::counter!(MetricName::UpstreamRequestsSuccess.as_str()).increment(1);
    }

    pub fn request_error() {
        ::metrics::counter!(MetricName::UpstreamRequestsError.as_str()).increment(1);
    }

    pub fn request_duration(secs: f64) {
        ::metrics::histogram!(MetricName::UpstreamRequestDuration.as_str()).record(secs);
    }

    pub fn payload_bytes(bytes: usize) {
        ::metrics::histogram!(MetricName::UpstreamPayloadBytes.as_str()).record(bytes as f64);
    }
}

// ============================================================================
// Adapter Metrics
// ============================================================================

pub mod adapter {
    use super::MetricName;

    pub fn fetch_success(provider: &'static str, records: usize) {
        ::metrics::counter!(MetricName::AdapterFetchSuccess.as_str(), "provider" => provider)
            .increment(1);
        ::metrics::counter!(MetricName::AdapterRecordsExtracted.as_str(), "provider" => provider)
            .increment(records as u64);
    }

    pub fn fetch_error(provider: &'static str, kind: &'static str) {
        ::metrics::counter!(
            MetricName::AdapterFetchError.as_str(),
            "provider" => provider,
            "kind" => kind
        )
        .increment(1);
    }

    pub fn fetch_duration(provider: &'static str, secs: f64) {
        ::metrics::histogram!(MetricName::AdapterFetchDuration.as_str(), "provider" => provider)
            .record(secs);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metric_names_follow_convention() {
        for metric in MetricName::all_metrics() {
            assert!(metric.as_str().starts_with("feed_gateway_"));
            assert_eq!(metric.to_string(), metric.as_str());
        }
    }

    #[test]
    fn test_recording_without_recorder_is_noop() {
        upstream::request_success();
        adapter::fetch_success("rates", 3);
        adapter::fetch_error("rates", "SCHEMA_MISMATCH");
    }
}
