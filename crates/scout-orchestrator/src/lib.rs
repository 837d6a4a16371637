//! # scout-orchestrator
//!
//! Drives one exploration session to a terminal state: pick a category,
//! fetch a candidate, validate it, update confidence, charge the budget,
//! append to the audit log, commit. Several sessions can run side by side
//! with [`run_sessions`].

pub mod engine;
pub mod pool;
pub mod retry;
pub mod selection;
pub mod session;

pub use engine::ExplorationOrchestrator;
pub use pool::run_sessions;
pub use session::{ExplorationSession, SessionReport};
