//! Read-only request view.
//!
//! # Responsibilities
//! - Expose the routing-relevant parts of a request (method, path)
//! - Adapt concrete HTTP types to the matching layer
//!
//! # Design Decisions
//! - The method is reported as the raw token; comparison against canonical
//!   verbs is case-insensitive and happens in the matcher
//! - One view per request, owned by the transport for the request's lifetime

use axum::body::Body;
use axum::http::Request;

/// Read-only view of an incoming request.
///
/// The transport guarantees the method is a non-empty token; a malformed
/// request line is a transport error and never reaches the matcher.
pub trait RequestView {
    /// The request method token as reported by the transport.
    fn method(&self) -> &str;

    /// The request path, without query string.
    fn path(&self) -> &str;
}

impl RequestView for Request<Body> {
    fn method(&self) -> &str {
        self.method().as_str()
    }

    fn path(&self) -> &str {
        self.uri().path()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axum_request_view() {
        let req = Request::builder()
            .method("DELETE")
            .uri("http://example.com/items/5?full=1")
            .body(Body::default())
            .unwrap();

        assert_eq!(RequestView::method(&req), "DELETE");
        assert_eq!(RequestView::path(&req), "/items/5");
    }

    #[test]
    fn test_lowercase_method_preserved() {
        // Non-standard casing comes through as-is; the matcher normalizes.
        let req = Request::builder()
            .method("delete")
            .uri("/items/5")
            .body(Body::default())
            .unwrap();

        assert_eq!(RequestView::method(&req), "delete");
    }
}
