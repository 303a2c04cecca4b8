//! Embeddable HTTP request router.
//!
//! Routes are `METHOD /path/:param` patterns matched segment by segment in
//! registration order. A match runs the route's handler with a
//! [`RequestContext`] carrying the route, the captured parameters and a
//! fresh trace ID; anything else gets an empty 404.
//!
//! ```
//! use axum::{body::Body, http::Request};
//! use segment_router::{RequestContext, Router};
//!
//! async fn show(_req: Request<Body>, ctx: RequestContext) -> String {
//!     format!("data {}", ctx.param("id").unwrap_or_default())
//! }
//!
//! let mut router = Router::new();
//! router.get("/data/:id", show);
//!
//! let (route, params) = router.find("GET", "/data/DAT-1/").unwrap();
//! assert_eq!(route.path(), "/data/:id");
//! assert_eq!(params.get("id"), Some("DAT-1"));
//! ```

pub mod api;
pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod routing;

pub use config::{RouterConfig, ServerConfig};
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use routing::{HttpMethod, PathParams, RequestContext, RoutePattern, Router};
