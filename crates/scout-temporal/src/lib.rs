//! # scout-temporal
//!
//! Historical-timing prior for confidence updates.
//!
//! `multiplier = clamp(seasonality × recurrence × momentum, 0.75, 1.40)`,
//! resolved through an entity → cluster → global → neutral fallback chain.
//! Never fails: missing or degenerate history yields the neutral 1.0.

pub mod aggregate;
pub mod engine;
pub mod factors;
pub mod store;

pub use aggregate::aggregate;
pub use engine::TemporalPriorService;
pub use store::InMemoryHistoryStore;
