//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the tracing subscriber for the binary
//! - Define the access log written by the router on every dispatch
//!
//! # Design Decisions
//! - Uses tracing crate for structured logging
//! - `RUST_LOG` wins over the configured level
//! - The access log is a trait so embedders can route lines elsewhere;
//!   [`TracingAccessLog`] is what a router gets by default

use axum::http::{Method, Uri};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::http::request::TraceId;

/// Install the global subscriber. `default_level` applies when `RUST_LOG`
/// is unset or unparsable.
pub fn init(default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("segment_router={default_level},tower_http={default_level}")));

    // A second init (tests, embedding) keeps the first subscriber.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}

/// Sink for the router's per-request log lines.
pub trait AccessLog: Send + Sync + 'static {
    /// A route matched and its handler is about to run.
    fn matched(&self, trace_id: &TraceId, method: &Method, uri: &Uri);

    /// No route matched; the request is answered with 404.
    fn not_found(&self, method: &Method, uri: &Uri);
}

/// Path and query of `uri`. HTTP/2 requests arrive in absolute form, and
/// the scheme and authority are left out so both protocols log alike.
pub fn request_target(uri: &Uri) -> &str {
    uri.path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or_else(|| uri.path())
}

/// `[trace-id=<id>] Route: <METHOD> <URL>`
pub fn matched_line(trace_id: &TraceId, method: &Method, uri: &Uri) -> String {
    format!("[trace-id={trace_id}] Route: {method} {}", request_target(uri))
}

/// `Route not found: <METHOD> <URL>`
pub fn not_found_line(method: &Method, uri: &Uri) -> String {
    format!("Route not found: {method} {}", request_target(uri))
}

/// Default access log: one `info` event per request.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingAccessLog;

impl AccessLog for TracingAccessLog {
    fn matched(&self, trace_id: &TraceId, method: &Method, uri: &Uri) {
        tracing::info!(
            trace_id = %trace_id,
            method = %method,
            uri = request_target(uri),
            "{}",
            matched_line(trace_id, method, uri)
        );
    }

    fn not_found(&self, method: &Method, uri: &Uri) {
        tracing::info!(
            method = %method,
            uri = request_target(uri),
            "{}",
            not_found_line(method, uri)
        );
    }
}
