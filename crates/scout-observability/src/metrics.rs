//! Per-session metrics aggregated from the audit log.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use scout_core::models::{AuditLogEntry, Category, Classification, CostUsd, EvidenceOutcome};

/// Counters for one category.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryMetrics {
    pub iterations: u64,
    pub accepted: u64,
    pub weak_accepted: u64,
    /// REJECT outcomes, including no-evidence iterations.
    pub rejected: u64,
    pub no_evidence: u64,
    /// Confidence gained in this category.
    pub confidence_gained: f64,
}

/// Serializable snapshot of a session's exploration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExplorationMetrics {
    pub iterations: u64,
    pub accepted: u64,
    pub weak_accepted: u64,
    /// REJECT outcomes, including no-evidence and malformed iterations.
    /// Matches the sum of `CategoryState::rejected_count`.
    pub rejected: u64,
    /// No-evidence iterations, also counted in `rejected`.
    pub no_evidence: u64,
    /// Malformed candidates, also counted in `rejected`.
    pub malformed: u64,
    /// Evidence decisions that passed verification.
    pub verified: u64,
    pub total_cost: CostUsd,
    pub final_confidence: Option<f64>,
    pub per_category: BTreeMap<Category, CategoryMetrics>,
}

impl ExplorationMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Aggregate every entry of a log.
    pub fn from_audit_log(entries: &[AuditLogEntry]) -> Self {
        let mut metrics = Self::new();
        for entry in entries {
            metrics.record(entry);
        }
        metrics
    }

    /// Fold one entry in.
    pub fn record(&mut self, entry: &AuditLogEntry) {
        let draft = &entry.draft;
        let cat = self.per_category.entry(draft.category).or_default();
        self.iterations += 1;
        cat.iterations += 1;
        cat.confidence_gained += draft.new_confidence - draft.prior_confidence;

        match draft.outcome {
            EvidenceOutcome::NoEvidence => {
                self.no_evidence += 1;
                self.rejected += 1;
                cat.no_evidence += 1;
                cat.rejected += 1;
            }
            EvidenceOutcome::Malformed => {
                self.malformed += 1;
                self.rejected += 1;
                cat.rejected += 1;
            }
            EvidenceOutcome::Evidence => {
                if draft.decision.verified() {
                    self.verified += 1;
                }
                match draft.decision.classification() {
                    Classification::Accept => {
                        self.accepted += 1;
                        cat.accepted += 1;
                    }
                    Classification::WeakAccept => {
                        self.weak_accepted += 1;
                        cat.weak_accepted += 1;
                    }
                    Classification::Reject => {
                        self.rejected += 1;
                        cat.rejected += 1;
                    }
                }
            }
        }

        self.total_cost = self.total_cost + draft.cost_incurred;
        self.final_confidence = Some(draft.new_confidence);
    }

    /// Share of evidence-bearing iterations that counted (ACCEPT or WEAK_ACCEPT).
    pub fn yield_rate(&self) -> f64 {
        let with_evidence = self.iterations - self.no_evidence;
        if with_evidence == 0 {
            return 0.0;
        }
        (self.accepted + self.weak_accepted) as f64 / with_evidence as f64
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
