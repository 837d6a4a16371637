//! Stage 1: shape checks and duplicate detection.

use scout_core::errors::ValidationError;
use scout_core::models::{Criterion, EvidenceCandidate, RubricReason};
use url::Url;

use crate::ledger::EvidenceLedger;
use crate::normalize::{content_hash, normalize};

/// What survived the rule filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterOutcome {
    Pass {
        content_hash: String,
        normalized: String,
    },
    /// Already logged in this session (or a seeded earlier one).
    Duplicate { content_hash: String },
}

/// Run shape checks, then duplicate detection.
///
/// Shape failures are errors, not decisions: the orchestrator turns them
/// into a logged REJECT.
pub fn run(
    candidate: &EvidenceCandidate,
    ledger: &EvidenceLedger,
    reasons: &mut Vec<RubricReason>,
) -> Result<FilterOutcome, ValidationError> {
    check_shape(candidate)?;
    reasons.push(RubricReason::pass(Criterion::Shape, "excerpt and url well-formed"));

    let normalized = normalize(candidate.raw_excerpt());
    let hash = content_hash(candidate.raw_excerpt());
    if ledger.has_seen(&hash) {
        reasons.push(RubricReason::fail(
            Criterion::Duplicate,
            format!("content hash {} already logged", &hash[..12]),
        ));
        return Ok(FilterOutcome::Duplicate { content_hash: hash });
    }
    reasons.push(RubricReason::pass(Criterion::Duplicate, "content hash unseen"));

    Ok(FilterOutcome::Pass {
        content_hash: hash,
        normalized,
    })
}

fn check_shape(candidate: &EvidenceCandidate) -> Result<(), ValidationError> {
    let malformed = |reason: String| ValidationError::MalformedEvidence {
        source_url: candidate.source_url().to_string(),
        reason,
    };

    if candidate.raw_excerpt().trim().is_empty() {
        return Err(malformed("empty excerpt".to_string()));
    }
    if normalize(candidate.raw_excerpt()).is_empty() {
        return Err(malformed("excerpt has no words".to_string()));
    }

    let url = Url::parse(candidate.source_url()).map_err(|e| malformed(format!("bad url: {e}")))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(malformed(format!("unsupported scheme {}", url.scheme())));
    }
    if url.host_str().map_or(true, str::is_empty) {
        return Err(malformed("url has no host".to_string()));
    }
    Ok(())
}
