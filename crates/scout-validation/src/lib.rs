//! # scout-validation
//!
//! The governance pass that turns one evidence candidate into a
//! classification with an ordered, auditable list of reasons.
//!
//! ## Stages
//! 1. **Rule filter**: shape checks, duplicate detection by normalized content hash
//! 2. **Verification**: reachability, entity reference, recency (no model opinion involved)
//! 3. **Classification**: fixed four-criterion rubric, unverified downgrade, weak-signal dedup
//! 4. **Final confirmation**: reasons must agree with the classification
//!
//! The validator never mutates anything. The orchestrator records accepted
//! decisions into the [`EvidenceLedger`] after the fact.

pub mod engine;
pub mod ledger;
pub mod normalize;
pub mod probe;
pub mod signals;
pub mod stages;

pub use engine::{EvidenceValidator, ValidationContext};
pub use ledger::EvidenceLedger;
pub use probe::FormatOnlyProbe;
pub use signals::ActionSignal;
