//! Per-request trace identifiers.
//!
//! # Responsibilities
//! - Generate a unique trace ID for every matched request
//! - Name the response header that carries it
//!
//! # Design Decisions
//! - UUID v4: no shared counter, safe to generate from any task
//! - Only matched requests get an ID; a 404 carries none

use std::fmt;

use axum::http::{HeaderName, HeaderValue};
use serde::Serialize;
use uuid::Uuid;

/// Response header carrying the trace ID.
pub const X_TRACE_ID: HeaderName = HeaderName::from_static("x-trace-id");

/// Unique identifier assigned to a dispatched request.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct TraceId(String);

impl TraceId {
    /// Generate a fresh random ID.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The ID as a header value. `None` only if it holds non-visible ASCII,
    /// which generated IDs never do.
    pub fn header_value(&self) -> Option<HeaderValue> {
        HeaderValue::from_str(&self.0).ok()
    }
}

impl fmt::Display for TraceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn trace_id_unique() {
        let ids: HashSet<TraceId> = (0..1000).map(|_| TraceId::generate()).collect();
        assert_eq!(ids.len(), 1000);
    }

    #[test]
    fn trace_id_is_uuid() {
        let id = TraceId::generate();
        assert!(Uuid::parse_str(id.as_str()).is_ok());
        assert_eq!(id.header_value().unwrap(), id.as_str());
    }

    #[test]
    fn trace_id_concurrent_generation() {
        let handles: Vec<_> = (0..8)
            .map(|_| std::thread::spawn(|| (0..100).map(|_| TraceId::generate()).collect::<Vec<_>>()))
            .collect();
        let ids: HashSet<TraceId> = handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect();
        assert_eq!(ids.len(), 800);
    }
}
