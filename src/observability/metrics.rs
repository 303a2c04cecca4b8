//! Metrics collection and exposition.
//!
//! # Metrics
//! - `router_requests_total` (counter): dispatched requests by method and
//!   outcome (`matched` / `not_found`)
//!
//! # Design Decisions
//! - Recorded through the `metrics` facade; a no-op until a recorder exists
//! - Prometheus exporter only installed when enabled in config
//! - The `method` label is one of the routable methods or `other`, so
//!   extension methods sent by clients cannot add series

use std::net::SocketAddr;

use axum::http::Method;
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

use crate::routing::HttpMethod;

/// How a dispatch ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    Matched,
    NotFound,
}

impl DispatchOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            DispatchOutcome::Matched => "matched",
            DispatchOutcome::NotFound => "not_found",
        }
    }
}

/// Install the Prometheus recorder with a scrape listener on `addr`.
///
/// Must be called from within a Tokio runtime.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics endpoint listening");
    Ok(())
}

/// Label value for `method`.
fn method_label(method: &Method) -> &'static str {
    HttpMethod::try_from(method)
        .map(|m| m.as_str())
        .unwrap_or("other")
}

pub fn record_dispatch(method: &Method, outcome: DispatchOutcome) {
    metrics::counter!(
        "router_requests_total",
        "method" => method_label(method),
        "outcome" => outcome.as_str()
    )
    .increment(1);
}
