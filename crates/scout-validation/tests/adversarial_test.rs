//! Low-quality candidates from the golden adversarial set must never count.

use scout_core::models::{Category, Classification, EvidenceCandidate};
use scout_validation::{EvidenceLedger, EvidenceValidator, ValidationContext};
use test_fixtures::{load_fixture_value, rovers};

#[test]
fn adversarial_candidates_are_all_rejected() {
    let cases = load_fixture_value("adversarial_candidates.json");
    let cases = cases.as_array().expect("fixture is an array");
    assert!(!cases.is_empty());

    let validator = EvidenceValidator::default();
    let entity = rovers();
    let ledger = EvidenceLedger::new();

    for category in Category::ALL {
        let ctx = ValidationContext {
            entity: &entity,
            category,
            ledger: &ledger,
        };
        for case in cases {
            let label = case["label"].as_str().unwrap_or("?");
            let candidate: EvidenceCandidate =
                serde_json::from_value(case["candidate"].clone()).unwrap();
            let decision = validator.validate(&candidate, &ctx).unwrap();
            assert_eq!(
                decision.classification(),
                Classification::Reject,
                "{label} in {category}: {:?}",
                decision.reasons()
            );
        }
    }
}
