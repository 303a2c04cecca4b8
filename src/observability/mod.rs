//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Router::dispatch
//!     → logging.rs (access log line, trace ID as a structured field)
//!     → metrics.rs (matched / not_found counters)
//!
//! Consumers:
//!     → stdout via tracing-subscriber
//!     → Prometheus scrape endpoint (optional)
//! ```

pub mod logging;
pub mod metrics;

pub use logging::{AccessLog, TracingAccessLog};
