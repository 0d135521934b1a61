//! Verb matching logic.
//!
//! # Responsibilities
//! - Match the request method against a verb (case-insensitive)
//! - Delegate an optional path pattern to the dispatcher
//! - Invoke the route handler when every supplied check passes
//!
//! # Design Decisions
//! - Method is checked first; a mismatch has no side effects
//! - Stateless: each call is a pure function of its inputs, safe on any
//!   thread without coordination
//! - NoMatch is a normal outcome; handler errors belong to the dispatcher's
//!   error path, not this layer

use axum::response::Response;

use crate::routing::dispatch::{PathCaptures, PathMatch};
use crate::transport::RequestView;
use crate::verb::Verb;

/// A route handler: produces the response for a matched route.
///
/// Receives the captures from the path match (empty when the route had no
/// pattern). Any suspension or I/O inside is the handler's own concern.
pub type Handler<'a> = &'a dyn Fn(&PathCaptures) -> Response;

/// Result of one match attempt. Created and discarded per candidate route.
#[derive(Debug)]
pub enum MatchOutcome {
    /// Verb or path mismatch; the dispatcher moves on to the next route.
    NoMatch,
    /// Verb (and path, if a pattern was supplied) matched.
    ///
    /// `response` is `Some` when a handler ran and produced the route's
    /// response; `None` signals "verb matched, caller should branch
    /// further", mirroring use of a bare verb check to gate a nested block.
    Matched { response: Option<Response> },
}

impl MatchOutcome {
    pub fn is_match(&self) -> bool {
        matches!(self, MatchOutcome::Matched { .. })
    }

    pub fn handler_invoked(&self) -> bool {
        matches!(
            self,
            MatchOutcome::Matched {
                response: Some(_)
            }
        )
    }
}

/// Attempt to match one candidate route against the request.
///
/// Checks `req.method()` against the verb's canonical token, ignoring case.
/// If a `pattern` is supplied, path matching is delegated to `dispatcher`
/// and must succeed against the full path. Only when every supplied check
/// passes is `handler` invoked.
pub fn try_verb(
    req: &dyn RequestView,
    verb: Verb,
    pattern: Option<&str>,
    dispatcher: &dyn PathMatch,
    handler: Option<Handler<'_>>,
) -> MatchOutcome {
    if !verb.matches_method(req.method()) {
        return MatchOutcome::NoMatch;
    }

    let captures = match pattern {
        Some(pattern) => match dispatcher.match_path(req, pattern) {
            Some(captures) => captures,
            None => return MatchOutcome::NoMatch,
        },
        None => PathCaptures::default(),
    };

    MatchOutcome::Matched {
        response: handler.map(|handler| handler(&captures)),
    }
}
