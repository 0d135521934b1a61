//! The supported verb set.
//!
//! # Responsibilities
//! - Enumerate the HTTP verbs this crate can dispatch on
//! - Map each verb to its canonical uppercase token
//! - Parse verb names case-insensitively (config files, transport reports)
//!
//! # Design Decisions
//! - GET and POST are deliberately absent; dispatchers already handle them
//! - One canonical token per verb; all comparisons go through it
//! - Unknown tokens are a parse error, never a silent fallback

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// An HTTP request method beyond GET/POST that routes can dispatch on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Verb {
    Delete,
    Head,
    Options,
    Link,
    Patch,
    Put,
    Trace,
    Unlink,
}

impl Verb {
    /// Every verb this crate knows about, in registration order.
    pub const ALL: [Verb; 8] = [
        Verb::Delete,
        Verb::Head,
        Verb::Options,
        Verb::Link,
        Verb::Patch,
        Verb::Put,
        Verb::Trace,
        Verb::Unlink,
    ];

    /// The canonical uppercase token used for method comparison.
    pub fn token(self) -> &'static str {
        match self {
            Verb::Delete => "DELETE",
            Verb::Head => "HEAD",
            Verb::Options => "OPTIONS",
            Verb::Link => "LINK",
            Verb::Patch => "PATCH",
            Verb::Put => "PUT",
            Verb::Trace => "TRACE",
            Verb::Unlink => "UNLINK",
        }
    }

    /// Returns true if `method` names this verb, ignoring ASCII case.
    pub fn matches_method(self, method: &str) -> bool {
        method.eq_ignore_ascii_case(self.token())
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Error returned when a string does not name a supported verb.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported verb: {0:?}")]
pub struct UnknownVerb(pub String);

impl FromStr for Verb {
    type Err = UnknownVerb;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Verb::ALL
            .into_iter()
            .find(|v| v.matches_method(s))
            .ok_or_else(|| UnknownVerb(s.to_string()))
    }
}
