//! Audit drafts and sinks for chain tests.

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Duration;
use scout_core::errors::AuditError;
use scout_core::models::{
    AuditDraft, AuditLogEntry, Category, Classification, CostUsd, Criterion, Decision, EntityId,
    EvidenceOutcome, PriorLevel, RubricReason,
};
use scout_core::traits::IAuditSink;

use crate::base_time;

/// A plausible draft for iteration `iteration`, moving confidence from
/// `prior` to `new`.
pub fn draft(iteration: u32, classification: Classification, prior: f64, new: f64) -> AuditDraft {
    let decision = Decision::new(
        classification,
        vec![RubricReason::pass(Criterion::New, "fixture")],
        format!("hash-{iteration}"),
        format!("fp-{iteration}"),
        classification == Classification::Accept,
    );
    AuditDraft {
        entity_id: EntityId::new("ent-rovers"),
        iteration,
        category: Category::DigitalInfrastructure,
        outcome: EvidenceOutcome::Evidence,
        source_url: Some(format!("https://riversiderovers.com/news/{iteration}")),
        decision,
        prior_confidence: prior,
        temporal_multiplier: 1.0,
        prior_level: PriorLevel::Neutral,
        delta_applied: new - prior,
        new_confidence: new,
        cost_incurred: CostUsd::from_usd(0.03),
        spent_cost: CostUsd::from_micros(30_000 * u64::from(iteration)),
        timestamp: base_time() + Duration::seconds(i64::from(iteration)),
    }
}

/// Sink that accepts writes until sequence number `fail_at`, then fails.
#[derive(Debug)]
pub struct FailingSink {
    fail_at: u64,
    writes: AtomicU64,
}

impl FailingSink {
    pub fn failing_at(fail_at: u64) -> Self {
        Self {
            fail_at,
            writes: AtomicU64::new(0),
        }
    }

    /// Successful writes so far.
    pub fn writes(&self) -> u64 {
        self.writes.load(Ordering::SeqCst)
    }
}

impl IAuditSink for FailingSink {
    fn write(&self, entry: &AuditLogEntry) -> Result<(), AuditError> {
        if entry.sequence_number >= self.fail_at {
            return Err(AuditError::WriteFailed {
                sequence_number: entry.sequence_number,
                reason: "disk full".to_string(),
            });
        }
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
