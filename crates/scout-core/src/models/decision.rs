use serde::{Deserialize, Serialize};
use std::fmt;

/// Output classification of the governance pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Classification {
    Accept,
    WeakAccept,
    Reject,
}

impl Classification {
    pub fn as_str(self) -> &'static str {
        match self {
            Classification::Accept => "ACCEPT",
            Classification::WeakAccept => "WEAK_ACCEPT",
            Classification::Reject => "REJECT",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which check a reason line refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Criterion {
    // Stage 1: rule filter.
    Shape,
    Duplicate,
    // Stage 2: evidence verification.
    Reachable,
    NameReference,
    Recency,
    // Stage 3: rubric.
    New,
    EntitySpecific,
    FutureAction,
    CredibleSource,
    // Stage 3 adjustments.
    VerificationDowngrade,
    WeakFingerprint,
    // Adapter returned nothing.
    NoEvidence,
}

impl Criterion {
    /// The four rubric criteria, in evaluation order.
    pub const RUBRIC: [Criterion; 4] = [
        Criterion::New,
        Criterion::EntitySpecific,
        Criterion::FutureAction,
        Criterion::CredibleSource,
    ];

    /// A failed line for one of these criteria justifies a REJECT on its own.
    pub fn is_rejection_note(self) -> bool {
        matches!(
            self,
            Criterion::Shape | Criterion::Duplicate | Criterion::WeakFingerprint | Criterion::NoEvidence
        )
    }
}

/// One ordered line of a decision's audit trail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RubricReason {
    pub criterion: Criterion,
    pub passed: bool,
    pub detail: String,
}

impl RubricReason {
    pub fn pass(criterion: Criterion, detail: impl Into<String>) -> Self {
        Self {
            criterion,
            passed: true,
            detail: detail.into(),
        }
    }

    pub fn fail(criterion: Criterion, detail: impl Into<String>) -> Self {
        Self {
            criterion,
            passed: false,
            detail: detail.into(),
        }
    }
}

/// The validator's verdict for one candidate. Immutable once produced;
/// reasons are for audit only, never for re-scoring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Decision {
    classification: Classification,
    reasons: Vec<RubricReason>,
    /// Normalized content hash of the excerpt (empty when there was none).
    content_hash: String,
    /// Signal fingerprint used for weak-accept deduplication.
    fingerprint: String,
    /// Outcome of the evidence-verification stage.
    verified: bool,
}

impl Decision {
    pub fn new(
        classification: Classification,
        reasons: Vec<RubricReason>,
        content_hash: String,
        fingerprint: String,
        verified: bool,
    ) -> Self {
        Self {
            classification,
            reasons,
            content_hash,
            fingerprint,
            verified,
        }
    }

    /// REJECT for a candidate that failed shape checks.
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::new(
            Classification::Reject,
            vec![RubricReason::fail(Criterion::Shape, reason)],
            String::new(),
            String::new(),
            false,
        )
    }

    /// REJECT-equivalent for an iteration where the adapter had nothing.
    pub fn no_evidence(detail: impl Into<String>) -> Self {
        Self::new(
            Classification::Reject,
            vec![RubricReason::fail(Criterion::NoEvidence, detail)],
            String::new(),
            String::new(),
            false,
        )
    }

    pub fn classification(&self) -> Classification {
        self.classification
    }

    pub fn reasons(&self) -> &[RubricReason] {
        &self.reasons
    }

    pub fn content_hash(&self) -> &str {
        &self.content_hash
    }

    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }

    pub fn verified(&self) -> bool {
        self.verified
    }

    /// Look up the reason line for a criterion, if one was recorded.
    pub fn reason(&self, criterion: Criterion) -> Option<&RubricReason> {
        self.reasons.iter().find(|r| r.criterion == criterion)
    }

    /// Whether a criterion was recorded as passed.
    pub fn passed(&self, criterion: Criterion) -> bool {
        self.reason(criterion).is_some_and(|r| r.passed)
    }
}
