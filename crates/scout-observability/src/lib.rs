//! # scout-observability
//!
//! Tracing setup, span macros for the exploration loop, and metrics
//! derived from a session's audit log.

pub mod metrics;
pub mod setup;
pub mod spans;

pub use metrics::ExplorationMetrics;
pub use setup::{init_tracing, init_tracing_with_filter, LogFormat};
