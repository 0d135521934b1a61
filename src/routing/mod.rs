//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming Request (method, path)
//!     → registry.rs (look up the verb's accessor)
//!     → matcher.rs (method check, then optional path check)
//!     → Return: Matched (short-circuit routing) or NoMatch (next route)
//!
//! Registry Compilation (at startup):
//!     configured verb list
//!     → filter by transport capabilities
//!     → Freeze as immutable VerbRegistry
//! ```
//!
//! # Design Decisions
//! - Registry compiled at startup, immutable at runtime
//! - Matching is a pure function of (request, verb, pattern, handler)
//! - No regex in the hot path (segment matching only)
//! - NoMatch is a normal outcome, never an error

pub mod dispatch;
pub mod matcher;
pub mod registry;
