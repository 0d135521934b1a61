//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Reject verb names outside the supported set
//! - Reject duplicate verb entries before they become startup errors
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: RouterConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::collections::HashSet;
use std::fmt;

use crate::config::schema::RouterConfig;
use crate::verb::Verb;

/// A single semantic problem found in a config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// `verbs` entry that does not name a supported verb.
    UnknownVerb(String),
    /// The same verb listed more than once (case-insensitively).
    DuplicateVerb(Verb),
    /// Empty verb list: the router would never match anything.
    NoVerbs,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::UnknownVerb(name) => write!(f, "unknown verb {name:?}"),
            ValidationError::DuplicateVerb(verb) => write!(f, "verb {verb} listed twice"),
            ValidationError::NoVerbs => write!(f, "verb list is empty"),
        }
    }
}

/// Check a parsed config for semantic problems, collecting every error.
pub fn validate_config(config: &RouterConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();
    let mut seen: HashSet<Verb> = HashSet::new();

    if config.verbs.is_empty() {
        errors.push(ValidationError::NoVerbs);
    }

    for name in &config.verbs {
        match name.parse::<Verb>() {
            Ok(verb) => {
                if !seen.insert(verb) {
                    errors.push(ValidationError::DuplicateVerb(verb));
                }
            }
            Err(_) => errors.push(ValidationError::UnknownVerb(name.clone())),
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
