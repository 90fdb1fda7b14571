//! TMDB request metrics.
//!
//! - Request counters by endpoint and status
//! - Latency histograms by endpoint

use metrics::{counter, histogram};

/// Metric name constants.
pub mod names {
    /// Total TMDB requests by endpoint and status.
    pub const REQUESTS_TOTAL: &str = "tmdb_requests_total";

    /// Request latency in seconds by endpoint.
    pub const LATENCY_SECONDS: &str = "tmdb_latency_seconds";
}

/// Status label used when no HTTP response was received.
pub const TRANSPORT_ERROR_STATUS: u16 = 0;

/// Record metrics for a completed TMDB request.
pub fn record_request(endpoint: &str, status: u16, latency_ms: f64) {
    counter!(
        names::REQUESTS_TOTAL,
        "endpoint" => endpoint.to_string(),
        "status" => status.to_string()
    )
    .increment(1);

    histogram!(
        names::LATENCY_SECONDS,
        "endpoint" => endpoint.to_string()
    )
    .record(latency_ms / 1000.0);
}
