//! Dispatcher seam: path matching.
//!
//! # Responsibilities
//! - Define the path-matching primitive the matcher delegates to
//! - Carry named captures from a successful match to the handler
//! - Provide a segment-based implementation for dispatchers without one
//!
//! # Design Decisions
//! - Pattern semantics belong to the dispatcher; the matcher treats them
//!   as opaque
//! - Patterns match the full path, not a prefix
//! - Literal segments are case-sensitive; `:name` segments capture
//! - No regex to guarantee O(n) matching

use std::collections::HashMap;

use crate::transport::RequestView;

/// Named path segments captured by a successful match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathCaptures {
    values: HashMap<String, String>,
}

impl PathCaptures {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    fn insert(&mut self, name: &str, value: &str) {
        self.values.insert(name.to_string(), value.to_string());
    }
}

/// The dispatcher's path-matching primitive.
///
/// Returns `Some` with any captures iff `pattern` matches the request's
/// full path.
pub trait PathMatch {
    fn match_path(&self, req: &dyn RequestView, pattern: &str) -> Option<PathCaptures>;
}

/// Segment-by-segment path matcher.
///
/// Splits pattern and path on `/` and requires the same number of segments.
/// A pattern segment starting with `:` captures the corresponding path
/// segment under its name (empty path segments never match a capture);
/// any other segment must compare equal, case-sensitively.
#[derive(Debug, Clone, Copy, Default)]
pub struct SegmentDispatcher;

impl SegmentDispatcher {
    pub fn new() -> Self {
        Self
    }
}

impl PathMatch for SegmentDispatcher {
    fn match_path(&self, req: &dyn RequestView, pattern: &str) -> Option<PathCaptures> {
        let mut captures = PathCaptures::default();

        let mut path_segments = req.path().split('/');
        let mut pattern_segments = pattern.split('/');

        loop {
            match (pattern_segments.next(), path_segments.next()) {
                (None, None) => return Some(captures),
                (None, Some(_)) | (Some(_), None) => return None,
                (Some(expected), Some(actual)) => {
                    if let Some(name) = expected.strip_prefix(':') {
                        if actual.is_empty() {
                            return None;
                        }
                        captures.insert(name, actual);
                    } else if expected != actual {
                        return None;
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;

    fn request(path: &str) -> Request<Body> {
        Request::builder()
            .method("DELETE")
            .uri(path)
            .body(Body::default())
            .unwrap()
    }

    #[test]
    fn test_literal_match() {
        let dispatcher = SegmentDispatcher::new();
        let req = request("/items");

        let captures = dispatcher.match_path(&req, "/items").unwrap();
        assert!(captures.is_empty());
    }

    #[test]
    fn test_literal_is_case_sensitive() {
        let dispatcher = SegmentDispatcher::new();
        let req = request("/Items");

        assert!(dispatcher.match_path(&req, "/items").is_none());
    }

    #[test]
    fn test_capture_segment() {
        let dispatcher = SegmentDispatcher::new();
        let req = request("/items/5");

        let captures = dispatcher.match_path(&req, "/items/:id").unwrap();
        assert_eq!(captures.get("id"), Some("5"));
        assert_eq!(captures.get("other"), None);
    }

    #[test]
    fn test_full_path_not_prefix() {
        let dispatcher = SegmentDispatcher::new();

        assert!(dispatcher
            .match_path(&request("/items/5/edit"), "/items/:id")
            .is_none());
        assert!(dispatcher
            .match_path(&request("/items"), "/items/:id")
            .is_none());
    }

    #[test]
    fn test_empty_segment_never_captures() {
        let dispatcher = SegmentDispatcher::new();
        let req = request("/items/");

        assert!(dispatcher.match_path(&req, "/items/:id").is_none());
    }

    #[test]
    fn test_multiple_captures() {
        let dispatcher = SegmentDispatcher::new();
        let req = request("/users/42/posts/7");

        let captures = dispatcher
            .match_path(&req, "/users/:user_id/posts/:post_id")
            .unwrap();
        assert_eq!(captures.get("user_id"), Some("42"));
        assert_eq!(captures.get("post_id"), Some("7"));
    }
}
