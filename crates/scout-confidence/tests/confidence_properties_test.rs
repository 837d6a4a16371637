use proptest::prelude::*;
use scout_confidence::ConfidenceEngine;
use scout_core::models::{CategoryState, Classification, Confidence};

fn arb_classification() -> impl Strategy<Value = Classification> {
    prop_oneof![
        Just(Classification::Accept),
        Just(Classification::WeakAccept),
        Just(Classification::Reject),
    ]
}

proptest! {
    #[test]
    fn bounded_and_non_decreasing(
        start in 0.0f64..1.2,
        accepted in 0u32..50,
        temporal in -5.0f64..5.0,
        classification in arb_classification(),
    ) {
        let engine = ConfidenceEngine::new();
        let state = CategoryState { accepted_count: accepted, ..CategoryState::default() };
        let prior = Confidence::new(start);
        let next = engine.apply(prior, classification, &state, temporal);
        prop_assert!(next.value() >= prior.value());
        prop_assert!((0.20..=0.95).contains(&next.value()));
    }

    #[test]
    fn multiplier_strictly_decreasing(k in 0u32..10_000) {
        let a = CategoryState { accepted_count: k, ..CategoryState::default() };
        let b = CategoryState { accepted_count: k + 1, ..CategoryState::default() };
        prop_assert!(a.multiplier() > b.multiplier());
        prop_assert!(b.multiplier() > 0.0 && a.multiplier() <= 1.0);
    }

    #[test]
    fn sequences_stay_monotonic(
        stream in proptest::collection::vec((arb_classification(), 0.5f64..1.6), 1..80),
    ) {
        let engine = ConfidenceEngine::new();
        let mut state = CategoryState::new();
        let mut confidence = Confidence::default();
        for (classification, temporal) in stream {
            let next = engine.apply(confidence, classification, &state, temporal);
            prop_assert!(next.value() >= confidence.value());
            state.record(classification);
            confidence = next;
        }
    }
}
