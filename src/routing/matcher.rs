//! Segment matching logic.
//!
//! # Responsibilities
//! - Percent-decode request paths
//! - Split paths into segments (trailing slashes ignored)
//! - Compare a route's segments against a request's segments
//! - Capture `:name` segments into [`PathParams`]
//!
//! # Design Decisions
//! - Literal segments compare case-insensitively, one character at a time
//! - Captured values keep the case they arrived with
//! - A parameter never captures a blank segment; that segment fails instead
//! - Segment counts must agree before any content is compared
//! - No wildcards, no regex: one pass, no backtracking

use std::borrow::Cow;
use std::collections::btree_map;
use std::collections::BTreeMap;

use percent_encoding::percent_decode_str;
use serde::Serialize;

/// Prefix marking a parameter segment in a route pattern.
pub const PARAM_PREFIX: char = ':';

/// Decode `%XX` escapes in a request path. Invalid UTF-8 is replaced
/// rather than rejected; malformed escapes are kept verbatim.
pub fn decode_path(path: &str) -> Cow<'_, str> {
    percent_decode_str(path).decode_utf8_lossy()
}

/// Split a path into segments after trimming trailing slashes.
///
/// `""` and `"/"` both yield a single empty segment, which is what the
/// root pattern `/` splits into as well.
pub fn split_path(path: &str) -> impl Iterator<Item = &str> {
    path.trim_end_matches('/').split('/')
}

/// Parameters captured from the request path, keyed by parameter name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PathParams(BTreeMap<String, String>);

impl PathParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Value captured for `name`, if the route declared it.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    // A repeated name keeps the last value.
    fn insert(&mut self, name: &str, value: &str) {
        self.0.insert(name.to_string(), value.to_string());
    }
}

impl IntoIterator for PathParams {
    type Item = (String, String);
    type IntoIter = btree_map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for PathParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// Match request segments against route segments.
///
/// Returns the captured parameters when every route segment matched, or
/// `None` as soon as one does not.
pub fn match_segments<S: AsRef<str>>(route: &[S], request: &[&str]) -> Option<PathParams> {
    if route.len() != request.len() {
        return None;
    }

    let mut params = PathParams::new();
    for (pattern, actual) in route.iter().zip(request) {
        let pattern = pattern.as_ref();
        match pattern.strip_prefix(PARAM_PREFIX) {
            Some(name) if !is_blank(actual) => params.insert(name, actual),
            _ if eq_fold(pattern, actual) => {}
            _ => return None,
        }
    }

    Some(params)
}

fn is_blank(segment: &str) -> bool {
    segment.trim_matches(' ').is_empty()
}

/// Case-insensitive equality with an ASCII fast path.
///
/// Characters compare one to one, so `ß` never equals `ss`. Two characters
/// are equal when they share a case orbit: `ſ`, `s` and `S` all fold
/// together, as do `σ`, `ς` and `Σ`.
fn eq_fold(a: &str, b: &str) -> bool {
    if a.is_ascii() && b.is_ascii() {
        return a.eq_ignore_ascii_case(b);
    }

    let mut a = a.chars();
    let mut b = b.chars();
    loop {
        match (a.next(), b.next()) {
            (None, None) => return true,
            (Some(x), Some(y)) if x == y || fold(x).eq(fold(y)) => {}
            _ => return false,
        }
    }
}

fn fold(c: char) -> impl Iterator<Item = char> {
    c.to_uppercase().flat_map(char::to_lowercase)
}
