//! Route lookup and dispatch.
//!
//! # Responsibilities
//! - Own the route table and the access log
//! - Look up the route for a request
//! - Attach the request context and trace ID, then run the handler
//! - Answer unmatched requests with an empty 404
//!
//! # Design Decisions
//! - Registration needs `&mut self`; serving shares the router through an
//!   `Arc`, so routes cannot change once traffic flows
//! - Matching is synchronous and allocation-light; only the handler awaits
//! - Explicit not-found rather than a silent default route

use std::fmt;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::response::{IntoResponse, Response};

use crate::config::{ConfigError, ServerConfig, ServerSettings};
use crate::http::request::{TraceId, X_TRACE_ID};
use crate::http::server::HttpServer;
use crate::observability::logging::{AccessLog, TracingAccessLog};
use crate::observability::metrics::{self, DispatchOutcome};
use crate::routing::context::RequestContext;
use crate::routing::handler::Handler;
use crate::routing::matcher::{decode_path, PathParams};
use crate::routing::method::HttpMethod;
use crate::routing::table::{RoutePattern, RouteTable};

/// Method + path router with first-registered-wins semantics.
pub struct Router {
    table: RouteTable,
    access_log: Arc<dyn AccessLog>,
}

impl Router {
    /// Empty router logging through [`TracingAccessLog`].
    pub fn new() -> Self {
        Self::with_access_log(Arc::new(TracingAccessLog))
    }

    /// Empty router writing its access log to `access_log`.
    pub fn with_access_log(access_log: Arc<dyn AccessLog>) -> Self {
        Self {
            table: RouteTable::new(),
            access_log,
        }
    }

    pub fn access_log(&self) -> &Arc<dyn AccessLog> {
        &self.access_log
    }

    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    /// Register `handler` for `method` and `path`.
    pub fn route(&mut self, method: HttpMethod, path: &str, handler: impl Handler) -> &mut Self {
        self.table.register(method, path, handler);
        self
    }

    pub fn get(&mut self, path: &str, handler: impl Handler) -> &mut Self {
        self.route(HttpMethod::Get, path, handler)
    }

    pub fn post(&mut self, path: &str, handler: impl Handler) -> &mut Self {
        self.route(HttpMethod::Post, path, handler)
    }

    pub fn put(&mut self, path: &str, handler: impl Handler) -> &mut Self {
        self.route(HttpMethod::Put, path, handler)
    }

    pub fn patch(&mut self, path: &str, handler: impl Handler) -> &mut Self {
        self.route(HttpMethod::Patch, path, handler)
    }

    pub fn delete(&mut self, path: &str, handler: impl Handler) -> &mut Self {
        self.route(HttpMethod::Delete, path, handler)
    }

    pub fn options(&mut self, path: &str, handler: impl Handler) -> &mut Self {
        self.route(HttpMethod::Options, path, handler)
    }

    pub fn head(&mut self, path: &str, handler: impl Handler) -> &mut Self {
        self.route(HttpMethod::Head, path, handler)
    }

    /// Match without dispatching. Returns a copy of the route and the
    /// captured parameters. `path` is taken as already decoded.
    pub fn find(&self, method: &str, path: &str) -> Option<(RoutePattern, PathParams)> {
        self.table
            .lookup(method, path)
            .map(|(entry, params)| (entry.pattern().clone(), params))
    }

    /// Route `req` to its handler, or answer 404 with an empty body.
    pub async fn dispatch(&self, mut req: Request<Body>) -> Response {
        let method = req.method().clone();
        let uri = req.uri().clone();

        let path = decode_path(uri.path());
        let Some((entry, params)) = self.table.lookup(method.as_str(), &path) else {
            self.access_log.not_found(&method, &uri);
            metrics::record_dispatch(&method, DispatchOutcome::NotFound);
            return StatusCode::NOT_FOUND.into_response();
        };

        let ctx = RequestContext::new(entry.pattern().clone(), params, TraceId::generate());
        self.access_log.matched(ctx.trace_id(), &method, &uri);
        metrics::record_dispatch(&method, DispatchOutcome::Matched);

        let trace_header = ctx.trace_id().header_value();
        req.extensions_mut().insert(ctx.clone());

        let mut response = entry.handler().call(req, ctx).await;
        if let Some(value) = trace_header {
            response.headers_mut().append(X_TRACE_ID, value);
        }
        response
    }

    /// Validate `config` and wrap this router in an [`HttpServer`].
    ///
    /// Nothing is built if a duration or the listen address is invalid.
    pub fn into_server(self, config: &ServerConfig) -> Result<HttpServer, ConfigError> {
        let settings = ServerSettings::from_config(config)?;
        Ok(HttpServer::new(Arc::new(self), settings))
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Router {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Router")
            .field("table", &self.table)
            .finish_non_exhaustive()
    }
}
