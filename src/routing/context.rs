//! Request-scoped metadata handed to handlers.

use serde::Serialize;

use crate::http::request::TraceId;
use crate::routing::matcher::PathParams;
use crate::routing::table::RoutePattern;

/// Everything the router learned about a request while dispatching it.
///
/// Built once per matched request and passed by value to the handler. A
/// copy is also stored in the request extensions.
#[derive(Debug, Clone, Serialize)]
pub struct RequestContext {
    route: RoutePattern,
    params: PathParams,
    trace_id: TraceId,
}

impl RequestContext {
    pub fn new(route: RoutePattern, params: PathParams, trace_id: TraceId) -> Self {
        Self {
            route,
            params,
            trace_id,
        }
    }

    /// The route definition that matched.
    pub fn route(&self) -> &RoutePattern {
        &self.route
    }

    pub fn params(&self) -> &PathParams {
        &self.params
    }

    /// Shorthand for `params().get(name)`.
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name)
    }

    pub fn trace_id(&self) -> &TraceId {
        &self.trace_id
    }
}
