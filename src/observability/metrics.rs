//! Metrics collection and exposition.
//!
//! # Metrics
//! - `gateway_upstream_requests_total` (counter): upstream calls by method, status
//! - `gateway_upstream_duration_seconds` (histogram): upstream latency by method
//!
//! Recording is a no-op until a recorder is installed, so tests and
//! metrics-disabled deployments pay nothing.

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

pub const UPSTREAM_REQUESTS_TOTAL: &str = "gateway_upstream_requests_total";
pub const UPSTREAM_DURATION_SECONDS: &str = "gateway_upstream_duration_seconds";

/// Install the Prometheus recorder and its scrape listener.
///
/// Must be called from within a Tokio runtime.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;

    metrics::describe_counter!(UPSTREAM_REQUESTS_TOTAL, "Calls forwarded to the backend API");
    metrics::describe_histogram!(
        UPSTREAM_DURATION_SECONDS,
        metrics::Unit::Seconds,
        "Latency of calls forwarded to the backend API"
    );

    tracing::info!(address = %addr, "Metrics endpoint listening");
    Ok(())
}

/// Record one upstream call.
pub fn record_upstream(method: &str, status: u16, start: Instant) {
    metrics::counter!(
        UPSTREAM_REQUESTS_TOTAL,
        "method" => method.to_string(),
        "status" => status.to_string()
    )
    .increment(1);
    metrics::histogram!(UPSTREAM_DURATION_SECONDS, "method" => method.to_string())
        .record(start.elapsed().as_secs_f64());
}
