//! Verb-dispatch routing primitives.
//!
//! This crate adds request matching for the HTTP verbs beyond GET and POST:
//! DELETE, HEAD, OPTIONS, LINK, PATCH, PUT, TRACE and UNLINK. It does not own
//! a route tree or a server; it is the matching layer a dispatcher calls once
//! per candidate route.
//!
//! # Architecture Overview
//!
//! ```text
//!   Transport Layer (external)          Dispatcher (external)
//!   parses method + path                owns the route tree
//!         │                                   │
//!         │ RequestView                       │ PathMatch
//!         ▼                                   ▼
//!   ┌────────────────────────────────────────────────┐
//!   │                  verb-router                   │
//!   │                                                │
//!   │  config ──▶ registry (built once at startup)   │
//!   │                 │                              │
//!   │                 ▼      per candidate route     │
//!   │           VerbAccessor ──▶ try_verb            │
//!   │                              │                 │
//!   │                              ▼                 │
//!   │                         MatchOutcome           │
//!   └────────────────────────────────────────────────┘
//! ```
//!
//! At startup the registry is built from the configured verb list, querying
//! the transport's capability table so that only verbs the transport can
//! actually report get an accessor. The registry is immutable afterwards and
//! safe to share across request-handling tasks without locking.

pub mod config;
pub mod observability;
pub mod routing;
pub mod transport;
pub mod verb;

pub use config::schema::RouterConfig;
pub use routing::matcher::MatchOutcome;
pub use routing::registry::{RegistryError, VerbRegistry};
pub use verb::Verb;
