//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (hyper-util auto builder, header read timeout)
//!     → Axum service (TraceLayer, TimeoutLayer)
//!     → routing::Router::dispatch
//!     → request.rs (trace ID generated on match, x-trace-id header)
//!     → Send to client
//! ```

pub mod request;
pub mod server;

pub use request::{TraceId, X_TRACE_ID};
pub use server::{HttpServer, ServerError};
