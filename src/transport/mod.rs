//! Transport layer seam.
//!
//! # Data Flow
//! ```text
//! Raw connection (external transport)
//!     → parsed into method + path + headers
//!     → exposed here as a read-only RequestView
//!
//! At startup:
//!     TransportCapabilities queried once per verb
//!     → registry registers accessors only for supported verbs
//! ```
//!
//! # Design Decisions
//! - This crate never owns a socket; the transport stays external
//! - Capability probing is an explicit interface, queried at startup only
//! - Requests are read-only views; matching never mutates them

pub mod capabilities;
pub mod request;

pub use capabilities::{StaticCapabilities, TransportCapabilities};
pub use request::RequestView;
