//! Verb registration table.
//!
//! # Responsibilities
//! - Build the verb → accessor table once at application startup
//! - Skip verbs the transport cannot report (conditional registration)
//! - Reject duplicate registration at startup, not at request time
//!
//! # Design Decisions
//! - Immutable after `build()` (thread-safe without locks; share via Arc)
//! - Skipped verbs leave no accessor behind, so absence is observable
//! - Duplicate registration is a configuration error and fails fast

use std::collections::HashMap;

use tracing::{debug, info};

use crate::config::schema::RouterConfig;
use crate::routing::dispatch::PathMatch;
use crate::routing::matcher::{self, Handler, MatchOutcome};
use crate::transport::{RequestView, TransportCapabilities};
use crate::verb::{UnknownVerb, Verb};

/// Startup registration failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// The same verb was registered twice.
    #[error("duplicate registration for verb {0}")]
    DuplicateRegistration(Verb),

    /// A configured verb name does not name a supported verb.
    #[error(transparent)]
    UnknownVerb(#[from] UnknownVerb),
}

/// Per-verb matching surface handed to route-definition code.
///
/// Bound to one verb at registration; forwards every call to the matcher.
#[derive(Debug, Clone, Copy)]
pub struct VerbAccessor {
    verb: Verb,
}

impl VerbAccessor {
    pub fn verb(&self) -> Verb {
        self.verb
    }

    /// Attempt this verb against the request, optionally with a path
    /// pattern and handler. A `Matched` outcome short-circuits routing.
    pub fn try_match(
        &self,
        req: &dyn RequestView,
        pattern: Option<&str>,
        dispatcher: &dyn PathMatch,
        handler: Option<Handler<'_>>,
    ) -> MatchOutcome {
        matcher::try_verb(req, self.verb, pattern, dispatcher, handler)
    }
}

/// Builds the registration table during startup.
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    accessors: HashMap<Verb, VerbAccessor>,
    skipped: Vec<Verb>,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an accessor for `verb`, provided the transport can report
    /// that method. Unsupported verbs are skipped, not errors; registering
    /// the same verb twice fails fast.
    pub fn register(
        &mut self,
        verb: Verb,
        capabilities: &dyn TransportCapabilities,
    ) -> Result<(), RegistryError> {
        if !capabilities.supports_method_predicate(verb) {
            debug!(%verb, "transport does not report this method, skipping registration");
            self.skipped.push(verb);
            return Ok(());
        }

        if self.accessors.contains_key(&verb) {
            return Err(RegistryError::DuplicateRegistration(verb));
        }

        self.accessors.insert(verb, VerbAccessor { verb });
        Ok(())
    }

    /// Register the full verb set.
    pub fn register_all(
        &mut self,
        capabilities: &dyn TransportCapabilities,
    ) -> Result<(), RegistryError> {
        for verb in Verb::ALL {
            self.register(verb, capabilities)?;
        }
        Ok(())
    }

    /// Freeze the table. Registered after this point is read-only.
    pub fn build(self) -> VerbRegistry {
        info!(
            registered = self.accessors.len(),
            skipped = self.skipped.len(),
            "verb registry built"
        );
        VerbRegistry {
            accessors: self.accessors,
        }
    }
}

/// Immutable verb → accessor table, built once before any request is
/// served and shared read-only across request-handling contexts.
#[derive(Debug)]
pub struct VerbRegistry {
    accessors: HashMap<Verb, VerbAccessor>,
}

impl VerbRegistry {
    /// Build a registry from the configured verb list and the transport's
    /// capability table. Config validation has already rejected unknown
    /// names, but a registry built from an unvalidated config still fails
    /// loudly here rather than dropping the entry.
    pub fn from_config(
        config: &RouterConfig,
        capabilities: &dyn TransportCapabilities,
    ) -> Result<Self, RegistryError> {
        let mut builder = RegistryBuilder::new();
        for name in &config.verbs {
            let verb: Verb = name.parse()?;
            builder.register(verb, capabilities)?;
        }
        Ok(builder.build())
    }

    /// The accessor for `verb`, absent when the verb was never registered
    /// or the transport does not support it.
    pub fn accessor(&self, verb: Verb) -> Option<&VerbAccessor> {
        self.accessors.get(&verb)
    }

    pub fn is_registered(&self, verb: Verb) -> bool {
        self.accessors.contains_key(&verb)
    }

    pub fn len(&self) -> usize {
        self.accessors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accessors.is_empty()
    }
}
