//! EvidenceValidator tests: the rubric, verification downgrade, duplicate
//! and weak-fingerprint dedup, and malformed input.

use chrono::{DateTime, Duration, Utc};
use scout_core::config::ValidationConfig;
use scout_core::errors::ValidationError;
use scout_core::models::{
    Category, Classification, Criterion, Decision, EntityProfile, EvidenceCandidate, SourceKind,
};
use scout_core::traits::{IReachabilityProbe, ProbeOutcome};
use scout_validation::{EvidenceLedger, EvidenceValidator, ValidationContext};
use std::sync::Arc;
use test_fixtures::{base_time, candidates, rovers};

fn classify(
    validator: &EvidenceValidator,
    entity: &EntityProfile,
    ledger: &EvidenceLedger,
    candidate: &EvidenceCandidate,
) -> Decision {
    let ctx = ValidationContext {
        entity,
        category: Category::DigitalInfrastructure,
        ledger,
    };
    validator.validate(candidate, &ctx).unwrap()
}

// ── Rubric ──────────────────────────────────────────────────────────────

#[test]
fn official_procurement_notice_is_accepted() {
    let validator = EvidenceValidator::default();
    let entity = rovers();
    let ledger = EvidenceLedger::new();

    let decision = classify(&validator, &entity, &ledger, &candidates::accept(1));
    assert_eq!(decision.classification(), Classification::Accept);
    assert!(decision.verified());
    for criterion in Criterion::RUBRIC {
        assert!(decision.passed(criterion), "{criterion:?} should pass");
    }
    assert_eq!(decision.content_hash().len(), 64);
    assert!(!decision.fingerprint().is_empty());
}

#[test]
fn alias_only_mention_is_weak_accept() {
    let validator = EvidenceValidator::default();
    let entity = rovers();
    let ledger = EvidenceLedger::new();

    let decision = classify(&validator, &entity, &ledger, &candidates::alias_hiring(1));
    assert_eq!(decision.classification(), Classification::WeakAccept);
    assert!(!decision.passed(Criterion::EntitySpecific));
    assert!(decision.passed(Criterion::NameReference));
    assert!(decision.passed(Criterion::FutureAction));
    assert!(decision.passed(Criterion::CredibleSource));
}

#[test]
fn generic_roundup_is_rejected() {
    let validator = EvidenceValidator::default();
    let entity = rovers();
    let ledger = EvidenceLedger::new();

    let decision = classify(&validator, &entity, &ledger, &candidates::reject(1));
    assert_eq!(decision.classification(), Classification::Reject);
    assert!(!decision.passed(Criterion::EntitySpecific));
    assert!(!decision.passed(Criterion::FutureAction));
    assert!(!decision.passed(Criterion::CredibleSource));
}

#[test]
fn press_release_credibility_depends_on_outlet() {
    let mut config = scout_core::config::ValidationConfig::default();
    config.trusted_press_domains = vec!["prnewswire.com".to_string()];
    let validator = EvidenceValidator::new(config);
    let entity = rovers();
    let ledger = EvidenceLedger::new();

    let excerpt = "Riverside Rovers opens a tender for a new CRM platform.";
    let trusted = EvidenceCandidate::new(
        "https://www.prnewswire.com/news/rovers-tender",
        SourceKind::PressRelease,
        excerpt,
        base_time(),
    );
    let untrusted = EvidenceCandidate::new(
        "https://cheap-wire.biz/news/rovers-tender",
        SourceKind::PressRelease,
        excerpt,
        base_time(),
    );

    let d1 = classify(&validator, &entity, &ledger, &trusted);
    assert_eq!(d1.classification(), Classification::Accept);
    let d2 = classify(&validator, &entity, &ledger, &untrusted);
    assert_eq!(d2.classification(), Classification::WeakAccept);
    assert!(!d2.passed(Criterion::CredibleSource));
}

// ── Verification ────────────────────────────────────────────────────────

#[test]
fn unreachable_source_caps_accept_at_weak() {
    let validator = EvidenceValidator::default();
    let entity = rovers();
    let ledger = EvidenceLedger::new();

    let decision = classify(&validator, &entity, &ledger, &candidates::unreachable_accept(1));
    assert_eq!(decision.classification(), Classification::WeakAccept);
    assert!(!decision.verified());
    assert!(!decision.passed(Criterion::Reachable));
    assert!(decision.reason(Criterion::VerificationDowngrade).is_some());
}

#[test]
fn stale_publication_is_unverified() {
    let validator = EvidenceValidator::default();
    let entity = rovers();
    let ledger = EvidenceLedger::new();

    let stale = candidates::accept(2).with_published_at(base_time() - Duration::days(800));
    let decision = classify(&validator, &entity, &ledger, &stale);
    assert_eq!(decision.classification(), Classification::WeakAccept);
    assert!(!decision.passed(Criterion::Recency));
}

#[test]
fn publication_after_retrieval_is_unverified() {
    let validator = EvidenceValidator::default();
    let entity = rovers();
    let ledger = EvidenceLedger::new();

    let future = candidates::accept(3).with_published_at(base_time() + Duration::days(10));
    let decision = classify(&validator, &entity, &ledger, &future);
    assert_eq!(decision.classification(), Classification::WeakAccept);
    assert!(!decision.verified());

    let within_tolerance =
        candidates::accept(4).with_published_at(base_time() + Duration::hours(2));
    let decision = classify(&validator, &entity, &ledger, &within_tolerance);
    assert_eq!(decision.classification(), Classification::Accept);
}

#[test]
fn out_of_range_tolerance_fails_recency_instead_of_panicking() {
    let validator = EvidenceValidator::new(ValidationConfig {
        future_tolerance_hours: i64::MAX / 2,
        ..ValidationConfig::default()
    });
    let entity = rovers();
    let ledger = EvidenceLedger::new();

    let dated = candidates::accept(40).with_published_at(base_time());
    let decision = classify(&validator, &entity, &ledger, &dated);
    assert_eq!(decision.classification(), Classification::WeakAccept);
    assert!(!decision.passed(Criterion::Recency));
}

#[test]
fn retrieval_at_the_end_of_time_fails_recency() {
    let validator = EvidenceValidator::default();
    let entity = rovers();
    let ledger = EvidenceLedger::new();

    let template = candidates::accept(41);
    let far = EvidenceCandidate::new(
        template.source_url(),
        template.source_kind(),
        template.raw_excerpt(),
        DateTime::<Utc>::MAX_UTC,
    )
    .with_published_at(base_time());
    let decision = classify(&validator, &entity, &ledger, &far);
    assert_eq!(decision.classification(), Classification::WeakAccept);
    assert!(!decision.passed(Criterion::Recency));
}

#[test]
fn accented_names_match_regardless_of_case() {
    let validator = EvidenceValidator::default();
    let entity = EntityProfile::new("ent-elan", "Élan Athletic")
        .with_official_domains(["elanathletic.fr"]);
    let ledger = EvidenceLedger::new();

    let candidate = EvidenceCandidate::new(
        "https://elanathletic.fr/actualites/appel-offres",
        SourceKind::OfficialSite,
        "ÉLAN ATHLETIC has issued an RFP to replace its ticketing platform.",
        base_time(),
    );
    let decision = classify(&validator, &entity, &ledger, &candidate);
    assert!(decision.passed(Criterion::EntitySpecific));
    assert_eq!(decision.classification(), Classification::Accept);
}

struct AlwaysDown;

impl IReachabilityProbe for AlwaysDown {
    fn probe(&self, _source_url: &str) -> ProbeOutcome {
        ProbeOutcome::unreachable("recorded 503")
    }
}

#[test]
fn injected_probe_drives_reachability() {
    let validator = EvidenceValidator::default().with_probe(Arc::new(AlwaysDown));
    let entity = rovers();
    let ledger = EvidenceLedger::new();

    let decision = classify(&validator, &entity, &ledger, &candidates::accept(5));
    assert_eq!(decision.classification(), Classification::WeakAccept);
    assert_eq!(
        decision.reason(Criterion::Reachable).map(|r| r.detail.as_str()),
        Some("recorded 503")
    );
}

// ── Deduplication ───────────────────────────────────────────────────────

#[test]
fn logged_content_is_rejected_as_duplicate() {
    let validator = EvidenceValidator::default();
    let entity = rovers();
    let mut ledger = EvidenceLedger::new();

    let candidate = candidates::accept(6);
    let first = classify(&validator, &entity, &ledger, &candidate);
    assert_eq!(first.classification(), Classification::Accept);
    ledger.record(Category::DigitalInfrastructure, &first);

    // Same excerpt from a different URL, re-punctuated.
    let rephrased = EvidenceCandidate::new(
        "https://mirror.sportsnews.net/copy",
        SourceKind::Other,
        candidate.raw_excerpt().to_uppercase().replace('.', " !"),
        base_time(),
    );
    let second = classify(&validator, &entity, &ledger, &rephrased);
    assert_eq!(second.classification(), Classification::Reject);
    assert!(!second.passed(Criterion::Duplicate));
    assert_eq!(second.content_hash(), first.content_hash());
}

#[test]
fn seeded_ledger_rejects_earlier_evidence() {
    let validator = EvidenceValidator::default();
    let entity = rovers();
    let fresh = classify(&validator, &entity, &EvidenceLedger::new(), &candidates::accept(7));

    let seeded = EvidenceLedger::with_prior_hashes([fresh.content_hash().to_string()]);
    let again = classify(&validator, &entity, &seeded, &candidates::accept(7));
    assert_eq!(again.classification(), Classification::Reject);
}

#[test]
fn second_weak_signal_with_same_fingerprint_is_rejected() {
    let validator = EvidenceValidator::default();
    let entity = rovers();
    let mut ledger = EvidenceLedger::new();

    let first = classify(&validator, &entity, &ledger, &candidates::unreachable_accept(10));
    assert_eq!(first.classification(), Classification::WeakAccept);
    ledger.record(Category::DigitalInfrastructure, &first);

    let second = classify(&validator, &entity, &ledger, &candidates::unreachable_accept(11));
    assert_ne!(second.content_hash(), first.content_hash());
    assert_eq!(second.fingerprint(), first.fingerprint());
    assert_eq!(second.classification(), Classification::Reject);
    assert!(!second.passed(Criterion::WeakFingerprint));
}

#[test]
fn reworded_weak_signal_counts_once() {
    let validator = EvidenceValidator::default();
    let entity = rovers();
    let mut ledger = EvidenceLedger::new();
    let posting = |n: u32, excerpt: &str| {
        EvidenceCandidate::new(
            format!("https://jobs.sportsjobs.net/rrfc/{n}"),
            SourceKind::JobBoard,
            excerpt,
            base_time(),
        )
    };

    let ctx = ValidationContext {
        entity: &entity,
        category: Category::Leadership,
        ledger: &ledger,
    };
    let first = validator
        .validate(&posting(1, "RRFC is hiring a data engineer."), &ctx)
        .unwrap();
    assert_eq!(first.classification(), Classification::WeakAccept);
    ledger.record(Category::Leadership, &first);

    let ctx = ValidationContext {
        entity: &entity,
        category: Category::Leadership,
        ledger: &ledger,
    };
    let second = validator
        .validate(&posting(2, "RRFC is recruiting a data engineer."), &ctx)
        .unwrap();
    assert_ne!(second.content_hash(), first.content_hash());
    assert_eq!(second.fingerprint(), first.fingerprint());
    assert_eq!(second.classification(), Classification::Reject);
    assert!(!second.passed(Criterion::WeakFingerprint));
}

#[test]
fn weak_fingerprints_are_scoped_per_category() {
    let validator = EvidenceValidator::default();
    let entity = rovers();
    let mut ledger = EvidenceLedger::new();

    let first = classify(&validator, &entity, &ledger, &candidates::unreachable_accept(12));
    ledger.record(Category::Commercial, &first);

    // Counted under COMMERCIAL, so DIGITAL_INFRASTRUCTURE still takes it.
    let second = classify(&validator, &entity, &ledger, &candidates::unreachable_accept(13));
    assert_eq!(second.classification(), Classification::WeakAccept);
}

#[test]
fn distinct_accepts_are_not_fingerprint_deduplicated() {
    let validator = EvidenceValidator::default();
    let entity = rovers();
    let mut ledger = EvidenceLedger::new();

    for n in 20..23 {
        let decision = classify(&validator, &entity, &ledger, &candidates::accept(n));
        assert_eq!(decision.classification(), Classification::Accept, "candidate {n}");
        ledger.record(Category::DigitalInfrastructure, &decision);
    }
    assert_eq!(ledger.seen_count(), 3);
}

// ── Malformed input ─────────────────────────────────────────────────────

#[test]
fn malformed_candidates_are_errors() {
    let validator = EvidenceValidator::default();
    let entity = rovers();
    let ledger = EvidenceLedger::new();
    let ctx = ValidationContext {
        entity: &entity,
        category: Category::Leadership,
        ledger: &ledger,
    };

    let cases = [
        ("https://riversiderovers.com/a", "   "),
        ("https://riversiderovers.com/b", "!!! ??? ..."),
        ("not a url", "Riverside Rovers issues RFP"),
        ("mailto:cto@riversiderovers.com", "Riverside Rovers issues RFP"),
    ];
    for (url, excerpt) in cases {
        let candidate = EvidenceCandidate::new(url, SourceKind::Other, excerpt, base_time());
        let err = validator.validate(&candidate, &ctx).unwrap_err();
        assert!(
            matches!(err, ValidationError::MalformedEvidence { .. }),
            "{url:?} / {excerpt:?}: {err}"
        );
    }
}

// ── Determinism ─────────────────────────────────────────────────────────

#[test]
fn validation_is_deterministic() {
    let validator = EvidenceValidator::default();
    let entity = rovers();
    let ledger = EvidenceLedger::new();

    for candidate in [
        candidates::accept(30),
        candidates::alias_hiring(30),
        candidates::reject(30),
        candidates::unreachable_accept(30),
    ] {
        let a = classify(&validator, &entity, &ledger, &candidate);
        let b = classify(&validator, &entity, &ledger, &candidate);
        assert_eq!(a, b);
    }
}
