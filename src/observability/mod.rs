//! Observability subsystem.
//!
//! # Design Decisions
//! - Structured logging via the tracing crate
//! - Registration decisions are logged once at startup; the match path
//!   itself emits nothing (it runs once per candidate route)

pub mod logging;
