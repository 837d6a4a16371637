//! # scout-confidence
//!
//! Pure confidence-update library. No I/O, no hidden state: identical inputs
//! always produce identical output, which is what makes audit replays and
//! hash-chain comparisons meaningful.

pub mod engine;
pub mod formula;

pub use engine::ConfidenceEngine;
pub use formula::ConfidenceBreakdown;
