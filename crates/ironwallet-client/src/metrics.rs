//! Client metrics for observability.
//!
//! Provides Prometheus-compatible metrics for monitoring backend calls.
//!
//! # Metrics
//!
//! - `ironwallet_client_requests_total` - Counter of requests by endpoint, status
//! - `ironwallet_client_request_duration_seconds` - Histogram of request latencies
//! - `ironwallet_client_unauthorized_total` - Counter of 401 responses by endpoint
//! - `ironwallet_client_cache_hits` / `ironwallet_client_cache_misses` - Query cache lookups
//!
//! Metrics are recorded whenever a `metrics`-compatible recorder is installed;
//! without one the calls are no-ops.

use std::time::Instant;

use metrics::{counter, histogram};

use crate::endpoint::Endpoint;

/// Metric name for total requests.
pub const REQUESTS_TOTAL: &str = "ironwallet_client_requests_total";

/// Metric name for request duration histogram.
pub const REQUEST_DURATION_SECONDS: &str = "ironwallet_client_request_duration_seconds";

/// Metric name for 401 responses.
pub const UNAUTHORIZED_TOTAL: &str = "ironwallet_client_unauthorized_total";

/// Metric name for query cache hits.
pub const CACHE_HITS: &str = "ironwallet_client_cache_hits";

/// Metric name for query cache misses.
pub const CACHE_MISSES: &str = "ironwallet_client_cache_misses";

/// Request status for metrics labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Success,
    Error,
    Unauthorized,
    Timeout,
    Cancelled,
}

impl Status {
    /// Get the status as a string for metrics labels.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Unauthorized => "unauthorized",
            Self::Timeout => "timeout",
            Self::Cancelled => "cancelled",
        }
    }
}

/// Record a request completion.
pub fn record_request(endpoint: Endpoint, status: Status, duration_seconds: f64) {
    counter!(
        REQUESTS_TOTAL,
        "endpoint" => endpoint.as_str(),
        "status" => status.as_str()
    )
    .increment(1);

    histogram!(
        REQUEST_DURATION_SECONDS,
        "endpoint" => endpoint.as_str()
    )
    .record(duration_seconds);
}

/// Record a 401 response.
pub fn record_unauthorized(endpoint: Endpoint) {
    counter!(UNAUTHORIZED_TOTAL, "endpoint" => endpoint.as_str()).increment(1);
}

/// Record a query cache lookup.
pub fn record_cache_lookup(query: &'static str, hit: bool) {
    let name = if hit { CACHE_HITS } else { CACHE_MISSES };
    counter!(name, "query" => query).increment(1);
}

/// Timer guard for automatically recording request duration.
///
/// Records the request as cancelled if dropped without an outcome, which
/// happens when the calling future is dropped mid-request.
#[must_use]
pub struct RequestTimer {
    endpoint: Endpoint,
    start: Instant,
    recorded: bool,
}

impl RequestTimer {
    /// Start a new request timer.
    pub fn start(endpoint: Endpoint) -> Self {
        Self {
            endpoint,
            start: Instant::now(),
            recorded: false,
        }
    }

    /// Record the outcome and return the duration.
    pub fn finish(mut self, status: Status) -> std::time::Duration {
        let duration = self.start.elapsed();
        record_request(self.endpoint, status, duration.as_secs_f64());
        self.recorded = true;
        duration
    }

    /// Record success and return the duration.
    pub fn success(self) -> std::time::Duration {
        self.finish(Status::Success)
    }

    /// Record an error and return the duration.
    pub fn error(self) -> std::time::Duration {
        self.finish(Status::Error)
    }
}

impl Drop for RequestTimer {
    fn drop(&mut self) {
        if !self.recorded {
            record_request(
                self.endpoint,
                Status::Cancelled,
                self.start.elapsed().as_secs_f64(),
            );
        }
    }
}

/// Describe all metrics for registration with a recorder.
///
/// Call this during application startup to register metric descriptions.
pub fn describe_metrics() {
    use metrics::{describe_counter, describe_histogram, Unit};

    describe_counter!(
        REQUESTS_TOTAL,
        Unit::Count,
        "Total number of backend requests made by the Iron Wallet client"
    );

    describe_histogram!(
        REQUEST_DURATION_SECONDS,
        Unit::Seconds,
        "Duration of backend requests in seconds"
    );

    describe_counter!(
        UNAUTHORIZED_TOTAL,
        Unit::Count,
        "Total number of requests rejected with HTTP 401"
    );

    describe_counter!(CACHE_HITS, Unit::Count, "Query cache hits");
    describe_counter!(CACHE_MISSES, Unit::Count, "Query cache misses");
}
