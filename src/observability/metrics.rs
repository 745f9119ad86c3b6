//! Metrics collection and exposition.
//!
//! # Metrics
//! - `kyc_requests_total` (counter): invocations by outcome
//! - `kyc_request_duration_seconds` (histogram): end-to-end latency by outcome
//! - `kyc_remote_calls_total` (counter): remote calls by operation, status
//! - `kyc_remote_call_duration_seconds` (histogram): remote call latency
//!
//! Without an installed recorder every call here is a no-op, which is the
//! case on Lambda.

use std::net::SocketAddr;
use std::time::Instant;

use metrics::{counter, histogram};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

/// Install the Prometheus recorder with an HTTP scrape endpoint.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics endpoint listening");
    Ok(())
}

/// Record a finished invocation.
pub fn record_request(outcome: &'static str, started: Instant) {
    counter!("kyc_requests_total", "outcome" => outcome).increment(1);
    histogram!("kyc_request_duration_seconds", "outcome" => outcome)
        .record(started.elapsed().as_secs_f64());
}

/// Record one remote step.
pub fn record_remote_call(operation: &'static str, success: bool, started: Instant) {
    let status = if success { "ok" } else { "error" };
    counter!("kyc_remote_calls_total", "operation" => operation, "status" => status).increment(1);
    histogram!("kyc_remote_call_duration_seconds", "operation" => operation)
        .record(started.elapsed().as_secs_f64());
}
