//! Observability
//!
//! Structured logging for the lookup tools. Hosts that bring their own
//! `tracing` subscriber can skip initialization entirely; the tools only
//! emit events.

pub mod logging;

pub use logging::{init_default_logging, init_logging, LogFormat};

// Span macro for structured logging
pub use logging::lookup_span;
