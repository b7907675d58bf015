//! Metrics collection and exposition.
//!
//! # Metrics
//! - `projects_requests_total` (counter): requests by method, status
//! - `projects_request_duration_seconds` (histogram): latency by method
//! - `projects_store_operations_total` (counter): mutations by operation
//! - `projects_store_size` (gauge): projects currently held
//!
//! Without an installed recorder every call here is a no-op, which is what
//! unit tests rely on.

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus recorder and its scrape endpoint.
/// Must run inside a tokio runtime.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics endpoint listening"),
        Err(e) => tracing::error!(address = %addr, error = %e, "Failed to install metrics exporter"),
    }
}

pub fn record_request(method: &str, status: u16, start: Instant) {
    let method = method.to_string();
    metrics::counter!(
        "projects_requests_total",
        "method" => method.clone(),
        "status" => status.to_string()
    )
    .increment(1);
    metrics::histogram!("projects_request_duration_seconds", "method" => method)
        .record(start.elapsed().as_secs_f64());
}

pub fn record_store_operation(operation: &'static str) {
    metrics::counter!("projects_store_operations_total", "operation" => operation).increment(1);
}

pub fn record_store_size(size: usize) {
    metrics::gauge!("projects_store_size").set(size as f64);
}
