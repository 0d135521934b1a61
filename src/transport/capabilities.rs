//! Transport capability table.
//!
//! # Responsibilities
//! - Declare which verbs the transport can report on incoming requests
//! - Answer the registry's startup queries
//!
//! # Design Decisions
//! - Explicit interface instead of runtime reflection on the request type
//! - Queried once per verb at startup, never on the request path

use std::collections::HashSet;

use crate::verb::Verb;

/// Startup-time capability query: can this transport report `verb` as a
/// request method?
pub trait TransportCapabilities {
    fn supports_method_predicate(&self, verb: Verb) -> bool;
}

/// Capability table over an explicit verb set.
#[derive(Debug, Clone, Default)]
pub struct StaticCapabilities {
    supported: HashSet<Verb>,
}

impl StaticCapabilities {
    /// A table supporting exactly the given verbs.
    pub fn new(verbs: impl IntoIterator<Item = Verb>) -> Self {
        Self {
            supported: verbs.into_iter().collect(),
        }
    }

    /// A table supporting the full verb set. Most transports land here.
    pub fn all() -> Self {
        Self::new(Verb::ALL)
    }
}

impl TransportCapabilities for StaticCapabilities {
    fn supports_method_predicate(&self, verb: Verb) -> bool {
        self.supported.contains(&verb)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_supports_every_verb() {
        let caps = StaticCapabilities::all();
        for verb in Verb::ALL {
            assert!(caps.supports_method_predicate(verb));
        }
    }

    #[test]
    fn test_partial_table() {
        let caps = StaticCapabilities::new([Verb::Delete, Verb::Put]);
        assert!(caps.supports_method_predicate(Verb::Delete));
        assert!(caps.supports_method_predicate(Verb::Put));
        assert!(!caps.supports_method_predicate(Verb::Link));
        assert!(!caps.supports_method_predicate(Verb::Trace));
    }

    #[test]
    fn test_empty_table_supports_nothing() {
        let caps = StaticCapabilities::default();
        assert!(!caps.supports_method_predicate(Verb::Head));
    }
}
