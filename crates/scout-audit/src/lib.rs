//! # scout-audit
//!
//! Append-only audit log. Every entry is chained to its predecessor by a
//! blake3 hash, so any edit, insertion, or removal is detectable. Optional
//! sinks mirror entries to durable storage; the in-process log is
//! authoritative.

pub mod chain;
pub mod log;
pub mod sinks;

pub use chain::{entry_hash, ChainBreak};
pub use log::AuditLog;
pub use sinks::{JsonLinesSink, MemorySink};
