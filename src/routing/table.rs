//! Ordered route table.
//!
//! # Responsibilities
//! - Store route patterns in registration order
//! - Precompute each pattern's segments once, at registration
//! - Find the first route matching a method and path
//!
//! # Design Decisions
//! - Append-only: no removal, no reordering
//! - No validation of patterns and no duplicate detection; an earlier
//!   registration simply shadows a later identical one
//! - O(n) scan; the segment-count check rejects most candidates cheaply

use std::fmt;
use std::sync::Arc;

use serde::Serialize;

use crate::routing::handler::{BoxedHandler, Handler};
use crate::routing::matcher::{match_segments, split_path, PathParams, PARAM_PREFIX};
use crate::routing::method::HttpMethod;

/// A registered route definition.
///
/// Handlers receive a clone of the pattern, never a reference into the
/// table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoutePattern {
    method: HttpMethod,
    path: String,
    #[serde(skip)]
    segments: Vec<String>,
}

impl RoutePattern {
    /// Build a pattern, splitting `path` into segments.
    pub fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        let path = path.into();
        let segments = split_path(&path).map(str::to_string).collect();
        Self {
            method,
            path,
            segments,
        }
    }

    pub fn method(&self) -> HttpMethod {
        self.method
    }

    /// The pattern exactly as registered.
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Names of the parameter segments, in path order.
    pub fn param_names(&self) -> impl Iterator<Item = &str> {
        self.segments
            .iter()
            .filter_map(|s| s.strip_prefix(PARAM_PREFIX))
    }

    /// Match a request against this pattern.
    pub fn matches(&self, method: &str, request_segments: &[&str]) -> Option<PathParams> {
        // Cardinality first; it is the cheapest rejection.
        if self.segments.len() != request_segments.len() || !self.method.matches(method) {
            return None;
        }
        match_segments(&self.segments, request_segments)
    }
}

impl fmt::Display for RoutePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method, self.path)
    }
}

/// A pattern together with the handler it dispatches to.
pub struct RouteEntry {
    pattern: RoutePattern,
    handler: BoxedHandler,
}

impl RouteEntry {
    pub fn pattern(&self) -> &RoutePattern {
        &self.pattern
    }

    pub fn handler(&self) -> &BoxedHandler {
        &self.handler
    }
}

impl fmt::Debug for RouteEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteEntry")
            .field("pattern", &self.pattern)
            .finish_non_exhaustive()
    }
}

/// Routes in registration order. The first match wins.
#[derive(Debug, Default)]
pub struct RouteTable {
    entries: Vec<RouteEntry>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a route. Never fails.
    pub fn register(&mut self, method: HttpMethod, path: impl Into<String>, handler: impl Handler) {
        let pattern = RoutePattern::new(method, path);
        tracing::debug!(route = %pattern, "Route registered");
        self.entries.push(RouteEntry {
            pattern,
            handler: Arc::new(handler),
        });
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Registered patterns in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &RoutePattern> {
        self.entries.iter().map(RouteEntry::pattern)
    }

    /// First entry matching `method` and `path`, with its captured parameters.
    pub fn lookup(&self, method: &str, path: &str) -> Option<(&RouteEntry, PathParams)> {
        let request_segments: Vec<&str> = split_path(path).collect();
        self.entries.iter().find_map(|entry| {
            entry
                .pattern
                .matches(method, &request_segments)
                .map(|params| (entry, params))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;

    use crate::routing::context::RequestContext;

    async fn noop(_req: Request<Body>, _ctx: RequestContext) {}

    fn table(routes: &[(HttpMethod, &str)]) -> RouteTable {
        let mut table = RouteTable::new();
        for (method, path) in routes {
            table.register(*method, *path, noop);
        }
        table
    }

    fn matched_path(table: &RouteTable, method: &str, path: &str) -> Option<String> {
        table
            .lookup(method, path)
            .map(|(entry, _)| entry.pattern().path().to_string())
    }

    #[test]
    fn test_register_keeps_order() {
        let table = table(&[
            (HttpMethod::Get, "/data"),
            (HttpMethod::Get, "/data/:id"),
            (HttpMethod::Get, "/data/:id/item"),
            (HttpMethod::Post, "/data"),
            (HttpMethod::Put, "/data/:id"),
            (HttpMethod::Delete, "/data/:id"),
        ]);

        assert_eq!(table.len(), 6);
        let paths: Vec<_> = table.iter().map(|p| p.to_string()).collect();
        assert_eq!(
            paths,
            vec![
                "GET /data",
                "GET /data/:id",
                "GET /data/:id/item",
                "POST /data",
                "PUT /data/:id",
                "DELETE /data/:id",
            ]
        );
    }

    #[test]
    fn test_pattern_segments() {
        let pattern = RoutePattern::new(HttpMethod::Get, "/data/:id/:typeId/");
        assert_eq!(pattern.path(), "/data/:id/:typeId/");
        assert_eq!(pattern.segments(), &["", "data", ":id", ":typeId"]);
        assert_eq!(pattern.param_names().collect::<Vec<_>>(), vec!["id", "typeId"]);
    }

    #[test]
    fn test_malformed_pattern_is_accepted() {
        let table = table(&[(HttpMethod::Get, "/a//b")]);
        assert_eq!(table.len(), 1);
        assert_eq!(matched_path(&table, "GET", "/a//b").as_deref(), Some("/a//b"));
        assert_eq!(matched_path(&table, "GET", "/a/x/b"), None);
    }

    #[test]
    fn test_first_registered_wins() {
        let table = table(&[
            (HttpMethod::Get, "/data/:id"),
            (HttpMethod::Get, "/data/active"),
        ]);
        let (entry, params) = table.lookup("GET", "/data/active").unwrap();
        assert_eq!(entry.pattern().path(), "/data/:id");
        assert_eq!(params.get("id"), Some("active"));
    }

    #[test]
    fn test_duplicate_routes_are_permitted() {
        let table = table(&[(HttpMethod::Get, "/dup"), (HttpMethod::Get, "/dup/")]);
        assert_eq!(table.len(), 2);
        assert_eq!(matched_path(&table, "GET", "/dup").as_deref(), Some("/dup"));
    }

    #[test]
    fn test_method_must_match() {
        let table = table(&[(HttpMethod::Get, "/data"), (HttpMethod::Post, "/data")]);
        assert_eq!(matched_path(&table, "post", "/data").as_deref(), Some("/data"));
        assert!(table.lookup("PUT", "/data").is_none());
    }

    #[test]
    fn test_cardinality_filter() {
        let table = table(&[
            (HttpMethod::Get, "/data"),
            (HttpMethod::Get, "/data/:id"),
            (HttpMethod::Get, "/data/:id/item"),
        ]);
        assert_eq!(matched_path(&table, "GET", "/data").as_deref(), Some("/data"));
        assert_eq!(matched_path(&table, "GET", "/data/1").as_deref(), Some("/data/:id"));
        assert_eq!(
            matched_path(&table, "GET", "/data/DAT-1/item").as_deref(),
            Some("/data/:id/item")
        );
        assert_eq!(matched_path(&table, "GET", "/data/1/item/x"), None);
    }

    #[test]
    fn test_empty_table_never_matches() {
        let table = RouteTable::new();
        assert!(table.is_empty());
        assert!(table.lookup("GET", "/").is_none());
    }
}
