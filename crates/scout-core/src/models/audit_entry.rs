use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Category, CostUsd, Decision, EntityId, PriorLevel};

/// What the adapter produced for an iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvidenceOutcome {
    Evidence,
    NoEvidence,
    Malformed,
}

/// Everything an audit entry records except its position in the chain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditDraft {
    pub entity_id: EntityId,
    pub iteration: u32,
    pub category: Category,
    pub outcome: EvidenceOutcome,
    pub source_url: Option<String>,
    pub decision: Decision,
    pub prior_confidence: f64,
    pub temporal_multiplier: f64,
    pub prior_level: PriorLevel,
    pub delta_applied: f64,
    pub new_confidence: f64,
    pub cost_incurred: CostUsd,
    /// Session spend after this iteration's charge.
    pub spent_cost: CostUsd,
    pub timestamp: DateTime<Utc>,
}

/// One immutable, hash-chained record per iteration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditLogEntry {
    pub sequence_number: u64,
    #[serde(flatten)]
    pub draft: AuditDraft,
    /// Chain hash of the preceding entry; empty for the first entry.
    pub previous_hash: String,
    /// blake3 over this entry's fields chained with `previous_hash`.
    pub content_hash: String,
}

impl AuditLogEntry {
    pub fn prior_confidence(&self) -> f64 {
        self.draft.prior_confidence
    }

    pub fn new_confidence(&self) -> f64 {
        self.draft.new_confidence
    }

    pub fn decision(&self) -> &Decision {
        &self.draft.decision
    }

    pub fn delta_applied(&self) -> f64 {
        self.draft.delta_applied
    }

    pub fn cost_incurred(&self) -> CostUsd {
        self.draft.cost_incurred
    }
}
