use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tracing::{debug, info, trace, warn};

/// Counters for requests made through the session core
#[derive(Debug, Default)]
pub struct ApiMetrics {
    /// Total number of API requests
    pub request_count: AtomicU64,
    /// Total number of 200 responses
    pub success_count: AtomicU64,
    /// Total number of non-200 responses
    pub failure_count: AtomicU64,
    /// Total number of requests that never got a response
    pub transport_failure_count: AtomicU64,
    /// Sessions established by a login
    pub login_count: AtomicU64,
    /// Sessions renewed by the server on an ordinary call
    pub session_renewal_count: AtomicU64,
    /// Total time spent in successful API calls (nanoseconds)
    pub total_latency_ns: AtomicU64,
}

impl ApiMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_request(&self, endpoint: &str) {
        self.request_count.fetch_add(1, Ordering::Relaxed);
        trace!(api_op = "request", endpoint = endpoint);
    }

    pub fn record_success(&self, endpoint: &str, latency: Duration) {
        self.success_count.fetch_add(1, Ordering::Relaxed);
        self.total_latency_ns
            .fetch_add(latency.as_nanos() as u64, Ordering::Relaxed);
        trace!(
            api_op = "success",
            endpoint = endpoint,
            latency_ms = latency.as_millis() as u64
        );
    }

    pub fn record_failure(&self, endpoint: &str, status: u16) {
        self.failure_count.fetch_add(1, Ordering::Relaxed);
        trace!(api_op = "failure", endpoint = endpoint, status = status);
    }

    pub fn record_transport_failure(&self, endpoint: &str, error: &str) {
        self.transport_failure_count.fetch_add(1, Ordering::Relaxed);
        warn!(api_op = "transport_failure", endpoint = endpoint, error = error);
    }

    pub fn record_login(&self) {
        self.login_count.fetch_add(1, Ordering::Relaxed);
        debug!(api_op = "login");
    }

    pub fn record_session_renewal(&self) {
        self.session_renewal_count.fetch_add(1, Ordering::Relaxed);
        debug!(api_op = "session_renewal");
    }

    /// Calculate average latency in milliseconds
    pub fn avg_latency_ms(&self) -> f64 {
        let count = self.success_count.load(Ordering::Relaxed);
        if count == 0 {
            return 0.0;
        }
        let total_ns = self.total_latency_ns.load(Ordering::Relaxed);
        (total_ns as f64 / count as f64) / 1_000_000.0
    }

    /// Get success rate as a percentage
    pub fn success_rate(&self) -> f64 {
        let total = self.request_count.load(Ordering::Relaxed);
        if total == 0 {
            return 100.0;
        }
        let success = self.success_count.load(Ordering::Relaxed);
        (success as f64 / total as f64) * 100.0
    }

    pub fn log_summary(&self) {
        info!(
            requests = self.request_count.load(Ordering::Relaxed),
            successes = self.success_count.load(Ordering::Relaxed),
            failures = self.failure_count.load(Ordering::Relaxed),
            transport_failures = self.transport_failure_count.load(Ordering::Relaxed),
            logins = self.login_count.load(Ordering::Relaxed),
            renewals = self.session_renewal_count.load(Ordering::Relaxed),
            avg_latency_ms = self.avg_latency_ms(),
            success_rate = self.success_rate(),
            "API metrics"
        );
    }
}
