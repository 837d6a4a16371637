//! EvidenceValidator: runs the four stages and returns an immutable Decision.

use std::sync::Arc;

use scout_core::config::ValidationConfig;
use scout_core::errors::ValidationError;
use scout_core::models::{
    Category, Classification, Criterion, Decision, EntityProfile, EvidenceCandidate,
};
use scout_core::traits::IReachabilityProbe;
use tracing::{debug, warn};

use crate::ledger::EvidenceLedger;
use crate::probe::FormatOnlyProbe;
use crate::stages::classification::{self, RubricInput};
use crate::stages::rule_filter::{self, FilterOutcome};
use crate::stages::{confirmation, verification};

/// Session context the validator reads but never writes.
pub struct ValidationContext<'a> {
    pub entity: &'a EntityProfile,
    pub category: Category,
    pub ledger: &'a EvidenceLedger,
}

/// The governance pass.
///
/// Deterministic given a candidate, a context, and a deterministic probe.
/// Classification is never retried.
pub struct EvidenceValidator {
    config: ValidationConfig,
    probe: Arc<dyn IReachabilityProbe>,
}

impl EvidenceValidator {
    /// Create a validator using the URL-format reachability probe.
    pub fn new(config: ValidationConfig) -> Self {
        Self {
            config,
            probe: Arc::new(FormatOnlyProbe),
        }
    }

    /// Replace the reachability probe.
    pub fn with_probe(mut self, probe: Arc<dyn IReachabilityProbe>) -> Self {
        self.probe = probe;
        self
    }

    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }

    /// Classify one candidate.
    ///
    /// Returns `MalformedEvidence` for shape failures (the caller logs a
    /// REJECT) and `InconsistentDecision` if the final confirmation finds the
    /// decision contradicting its reasons.
    pub fn validate(
        &self,
        candidate: &EvidenceCandidate,
        ctx: &ValidationContext<'_>,
    ) -> Result<Decision, ValidationError> {
        let mut reasons = Vec::new();

        // Stage 1: rule filter.
        let (content_hash, normalized) = match rule_filter::run(candidate, ctx.ledger, &mut reasons)
        {
            Ok(FilterOutcome::Pass {
                content_hash,
                normalized,
            }) => (content_hash, normalized),
            Ok(FilterOutcome::Duplicate { content_hash }) => {
                debug!(
                    category = %ctx.category,
                    source_url = candidate.source_url(),
                    "duplicate evidence rejected"
                );
                let decision = Decision::new(
                    Classification::Reject,
                    reasons,
                    content_hash,
                    String::new(),
                    false,
                );
                confirmation::run(&decision)?;
                return Ok(decision);
            }
            Err(e) => {
                warn!(category = %ctx.category, error = %e, "malformed evidence");
                return Err(e);
            }
        };

        // Stage 2: verification.
        let verification = verification::run(
            candidate,
            ctx.entity,
            self.probe.as_ref(),
            &self.config,
            &mut reasons,
        );

        // Stage 3: rubric.
        let outcome = classification::run(
            &RubricInput {
                candidate,
                entity: ctx.entity,
                category: ctx.category,
                ledger: ctx.ledger,
                content_hash: &content_hash,
                normalized: &normalized,
                verification: &verification,
            },
            &self.config,
            &mut reasons,
        );

        let decision = Decision::new(
            outcome.classification,
            reasons,
            content_hash,
            outcome.fingerprint,
            verification.verified,
        );

        // Stage 4: final confirmation.
        confirmation::run(&decision)?;

        if let Some(note) = decision.reason(Criterion::VerificationDowngrade) {
            warn!(
                category = %ctx.category,
                source_url = candidate.source_url(),
                note = %note.detail,
                "unverified evidence downgraded"
            );
        }

        debug!(
            category = %ctx.category,
            classification = %decision.classification(),
            verified = decision.verified(),
            "evidence classified"
        );
        Ok(decision)
    }
}

impl Default for EvidenceValidator {
    fn default() -> Self {
        Self::new(ValidationConfig::default())
    }
}
