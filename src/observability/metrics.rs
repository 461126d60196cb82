//! Metrics collection and exposition.
//!
//! # Metrics
//! - `router_requests_total` (counter): requests by outcome and handler
//! - `router_dispatch_duration_seconds` (histogram): match + dispatch latency by outcome
//!
//! # Design Decisions
//! - The exporter is only installed when `observability.metrics_enabled` is set
//! - Unmatched requests are labelled with handler `none`

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

use crate::dispatch::Outcome;

/// Install the Prometheus recorder and its scrape endpoint on `addr`.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics endpoint listening");
    Ok(())
}

/// Record the outcome of one request.
pub fn record_outcome(outcome: &Outcome, handler: Option<&str>, start: Instant) {
    let handler = handler.unwrap_or("none").to_string();

    metrics::counter!(
        "router_requests_total",
        "outcome" => outcome.label(),
        "handler" => handler
    )
    .increment(1);

    metrics::histogram!(
        "router_dispatch_duration_seconds",
        "outcome" => outcome.label()
    )
    .record(start.elapsed().as_secs_f64());
}
