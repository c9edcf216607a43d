//! Metrics collection and exposition.
//!
//! # Metrics
//! - `similarity_requests_total` (counter): requests by method, status
//! - `similarity_request_duration_seconds` (histogram): handler latency
//! - `similarity_upstream_errors_total` (counter): failed upstream calls by kind

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

/// Install the Prometheus recorder and its scrape listener.
///
/// Must run inside a Tokio runtime.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics endpoint listening");
    Ok(())
}

pub fn record_request(method: &str, status: u16, start_time: Instant) {
    metrics::counter!(
        "similarity_requests_total",
        "method" => method.to_string(),
        "status" => status.to_string()
    )
    .increment(1);
    metrics::histogram!("similarity_request_duration_seconds")
        .record(start_time.elapsed().as_secs_f64());
}

pub fn record_upstream_error(kind: &'static str) {
    metrics::counter!("similarity_upstream_errors_total", "kind" => kind).increment(1);
}
