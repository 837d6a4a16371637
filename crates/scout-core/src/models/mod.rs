mod audit_entry;
mod candidate;
mod category;
mod category_state;
mod confidence;
mod cost;
mod decision;
mod entity;
mod history;
mod session_status;
mod temporal_prior;

pub use audit_entry::{AuditDraft, AuditLogEntry, EvidenceOutcome};
pub use candidate::{EvidenceCandidate, SourceKind};
pub use category::Category;
pub use category_state::CategoryState;
pub use confidence::Confidence;
pub use cost::CostUsd;
pub use decision::{Classification, Criterion, Decision, RubricReason};
pub use entity::{ClusterId, EntityId, EntityProfile};
pub use history::SignalHistory;
pub use session_status::SessionStatus;
pub use temporal_prior::{PriorLevel, TemporalPrior};
