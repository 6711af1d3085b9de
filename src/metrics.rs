//! Prometheus metrics for request latency and registry activity.
//!
//! This module provides metrics for:
//! - HTTP request latency and counts, per endpoint
//! - Item create/update/delete counts
//! - Current registry size

use std::time::{Duration, Instant};

use metrics::{
    counter, describe_counter, describe_gauge, describe_histogram, gauge, histogram,
};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use tokio::task::JoinHandle;
use tracing::debug;

use crate::error::{Result, ServiceError};

// === Metric Name Constants ===

/// HTTP request latency metric name.
pub const METRIC_HTTP_REQUEST_LATENCY: &str = "http_request_latency_ms";
/// HTTP requests counter metric name.
pub const METRIC_HTTP_REQUESTS: &str = "http_requests_total";
/// Items created counter metric name.
pub const METRIC_ITEMS_CREATED: &str = "items_created_total";
/// Items updated counter metric name.
pub const METRIC_ITEMS_UPDATED: &str = "items_updated_total";
/// Items deleted counter metric name.
pub const METRIC_ITEMS_DELETED: &str = "items_deleted_total";
/// Stored items gauge metric name.
pub const METRIC_ITEMS_STORED: &str = "items_stored";

/// How often histogram buckets are drained by [`spawn_upkeep`].
pub const UPKEEP_INTERVAL: Duration = Duration::from_secs(5);

/// Install the Prometheus recorder as the global metrics recorder.
///
/// Can succeed only once per process. The recorder does no housekeeping of
/// its own; pair it with [`spawn_upkeep`].
pub fn install_recorder() -> Result<PrometheusHandle> {
    PrometheusBuilder::new()
        .install_recorder()
        .map_err(|e| ServiceError::Metrics(e.to_string()))
}

/// Run recorder upkeep every `period` until the task is aborted.
///
/// Without upkeep, histogram samples accumulate for the life of the process.
pub fn spawn_upkeep(handle: PrometheusHandle, period: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(period);
        loop {
            interval.tick().await;
            handle.run_upkeep();
        }
    })
}

/// Initialize all metric descriptions.
/// Call this once at startup, after the recorder is installed.
pub fn init_metrics() {
    describe_histogram!(
        METRIC_HTTP_REQUEST_LATENCY,
        "HTTP request latency in milliseconds"
    );

    describe_counter!(METRIC_HTTP_REQUESTS, "Total number of HTTP requests served");
    describe_counter!(METRIC_ITEMS_CREATED, "Total number of items created");
    describe_counter!(METRIC_ITEMS_UPDATED, "Total number of items updated");
    describe_counter!(METRIC_ITEMS_DELETED, "Total number of items deleted");

    describe_gauge!(METRIC_ITEMS_STORED, "Number of items currently stored");

    debug!("Metrics initialized");
}

/// Record HTTP request latency and count.
pub fn record_http_request(start: Instant, method: &str, endpoint: &str, status: u16) {
    let latency_ms = start.elapsed().as_secs_f64() * 1000.0;
    let labels = [
        ("method", method.to_string()),
        ("endpoint", endpoint.to_string()),
        ("status", status.to_string()),
    ];
    histogram!(METRIC_HTTP_REQUEST_LATENCY, &labels).record(latency_ms);
    counter!(METRIC_HTTP_REQUESTS, &labels).increment(1);
}

/// Increment items created counter.
pub fn inc_items_created() {
    counter!(METRIC_ITEMS_CREATED).increment(1);
}

/// Increment items updated counter.
pub fn inc_items_updated() {
    counter!(METRIC_ITEMS_UPDATED).increment(1);
}

/// Increment items deleted counter.
pub fn inc_items_deleted() {
    counter!(METRIC_ITEMS_DELETED).increment(1);
}

/// Set the stored items gauge.
pub fn set_items_stored(count: usize) {
    gauge!(METRIC_ITEMS_STORED).set(count as f64);
}
