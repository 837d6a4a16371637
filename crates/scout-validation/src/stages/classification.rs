//! Stage 3: the fixed rubric.
//!
//! ACCEPT needs all four criteria: new, entity-specific, future action,
//! credible source. WEAK_ACCEPT needs "new" plus one or two of the other
//! three. Everything else is REJECT. Two adjustments follow: an unverified
//! ACCEPT becomes WEAK_ACCEPT, and a WEAK_ACCEPT whose signal fingerprint was
//! already weakly counted in this category becomes REJECT.

use scout_core::config::ValidationConfig;
use scout_core::models::{
    Category, Classification, Criterion, EntityProfile, EvidenceCandidate, RubricReason,
    SourceKind,
};

use crate::ledger::EvidenceLedger;
use crate::normalize::tokens;
use crate::probe::{host_matches, host_of};
use crate::signals::{self, SignalScan};
use crate::stages::verification::Verification;

/// Inputs the rubric reads.
pub struct RubricInput<'a> {
    pub candidate: &'a EvidenceCandidate,
    pub entity: &'a EntityProfile,
    pub category: Category,
    pub ledger: &'a EvidenceLedger,
    pub content_hash: &'a str,
    pub normalized: &'a str,
    pub verification: &'a Verification,
}

/// Rubric verdict.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RubricOutcome {
    pub classification: Classification,
    pub fingerprint: String,
}

pub fn run(
    input: &RubricInput<'_>,
    config: &ValidationConfig,
    reasons: &mut Vec<RubricReason>,
) -> RubricOutcome {
    let scan = signals::scan(input.normalized);
    let fingerprint = fingerprint(input.candidate.source_kind(), &scan, input.normalized, config);

    let is_new = !input.ledger.has_seen(input.content_hash);
    reasons.push(if is_new {
        RubricReason::pass(Criterion::New, "not previously logged")
    } else {
        RubricReason::fail(Criterion::New, "previously logged")
    });

    let specific = input.verification.mention.canonical;
    reasons.push(if specific {
        RubricReason::pass(Criterion::EntitySpecific, "explicit name match")
    } else {
        RubricReason::fail(Criterion::EntitySpecific, "no explicit name match")
    });

    let future = !scan.is_empty();
    reasons.push(if future {
        let kinds: Vec<&str> = scan.signals.iter().map(|s| s.as_str()).collect();
        RubricReason::pass(Criterion::FutureAction, kinds.join(","))
    } else {
        RubricReason::fail(Criterion::FutureAction, "no forward-looking signal")
    });

    let (credible, credibility_detail) = credibility(input.candidate, input.entity, config);
    reasons.push(RubricReason {
        criterion: Criterion::CredibleSource,
        passed: credible,
        detail: credibility_detail,
    });

    let others = [specific, future, credible].iter().filter(|p| **p).count();
    let mut classification = match (is_new, others) {
        (true, 3) => Classification::Accept,
        (true, 1..=2) => Classification::WeakAccept,
        _ => Classification::Reject,
    };

    if classification == Classification::Accept && !input.verification.verified {
        reasons.push(RubricReason::fail(
            Criterion::VerificationDowngrade,
            "unverified evidence capped at WEAK_ACCEPT",
        ));
        classification = Classification::WeakAccept;
    }

    if classification == Classification::WeakAccept {
        if input.ledger.is_weakly_counted(input.category, &fingerprint) {
            reasons.push(RubricReason::fail(
                Criterion::WeakFingerprint,
                "already weakly counted",
            ));
            classification = Classification::Reject;
        } else {
            reasons.push(RubricReason::pass(
                Criterion::WeakFingerprint,
                "first weak signal with this fingerprint",
            ));
        }
    }

    RubricOutcome {
        classification,
        fingerprint,
    }
}

fn credibility(
    candidate: &EvidenceCandidate,
    entity: &EntityProfile,
    config: &ValidationConfig,
) -> (bool, String) {
    let host = host_of(candidate.source_url()).unwrap_or_default();
    let official_host = entity
        .official_domains
        .iter()
        .any(|d| host_matches(&host, d));

    match candidate.source_kind() {
        SourceKind::OfficialSite | SourceKind::JobBoard | SourceKind::Filing => (
            true,
            format!("{} source", candidate.source_kind().as_str()),
        ),
        SourceKind::PressRelease => {
            if official_host {
                (true, format!("press release on official host {host}"))
            } else if config
                .trusted_press_domains
                .iter()
                .any(|d| host_matches(&host, d))
            {
                (true, format!("press release via trusted outlet {host}"))
            } else {
                (false, format!("press release via unverified outlet {host}"))
            }
        }
        SourceKind::Other => {
            if official_host {
                (true, format!("official host {host}"))
            } else {
                (false, format!("unrecognized source {host}"))
            }
        }
    }
}

/// Signal fingerprint: "the same signal, phrased differently".
///
/// With action signals present it is the source kind plus the set of matched
/// signal kinds, so synonyms ("hiring", "recruiting") collide; otherwise the
/// longest distinct content tokens stand in.
pub fn fingerprint(
    source_kind: SourceKind,
    scan: &SignalScan,
    normalized: &str,
    config: &ValidationConfig,
) -> String {
    let basis = if scan.is_empty() {
        let mut distinct: Vec<String> = tokens(normalized)
            .into_iter()
            .filter(|t| t.chars().count() >= 4)
            .collect();
        distinct.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
        distinct.dedup();
        distinct.truncate(config.fingerprint_tokens);
        distinct.sort();
        format!("tok:{}", distinct.join(" "))
    } else {
        let signals: Vec<&str> = scan.signals.iter().map(|s| s.as_str()).collect();
        format!("sig:{}:{}", source_kind.as_str(), signals.join(","))
    };
    blake3::hash(basis.as_bytes()).to_hex().to_string()
}
