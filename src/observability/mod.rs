//! Observability subsystem.
//!
//! Structured log events through `tracing`; request spans come from
//! `tower_http::trace` and carry the `x-request-id`.

pub mod logging;

pub use logging::init_logging;
