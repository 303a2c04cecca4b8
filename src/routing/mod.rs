//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (registration):
//!     Router::route(method, "/data/:id", handler)
//!     → table.rs (split into segments, append in order)
//!
//! Per request (dispatch):
//!     Request (method, path)
//!     → router.rs (normalize path, scan table)
//!     → matcher.rs (segment count, literals, :params)
//!     → match: RequestContext { route, params, trace_id } → handler
//!     → no match: 404, empty body
//! ```
//!
//! # Design Decisions
//! - Routes registered at startup, immutable while serving
//! - No regex, no wildcards: one `:param` captures one segment
//! - Deterministic: same input always matches same route
//! - First match wins (registration order)

pub mod context;
pub mod handler;
pub mod matcher;
pub mod method;
pub mod router;
pub mod table;

pub use context::RequestContext;
pub use handler::Handler;
pub use matcher::PathParams;
pub use method::HttpMethod;
pub use router::Router;
pub use table::{RoutePattern, RouteTable};
