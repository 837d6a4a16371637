use scout_confidence::{formula, ConfidenceEngine};
use scout_core::config::DeltaTable;
use scout_core::models::{CategoryState, Classification, Confidence};

fn state_with_accepts(k: u32) -> CategoryState {
    CategoryState {
        accepted_count: k,
        ..CategoryState::default()
    }
}

// ── Scenario: ACCEPT on iterations 1, 9, 17 of one category ──────────────

#[test]
fn repeated_accepts_in_one_category_diminish() {
    let engine = ConfidenceEngine::new();
    let mut state = CategoryState::new();
    let mut confidence = Confidence::default();

    confidence = engine.apply(confidence, Classification::Accept, &state, 1.0);
    state.record(Classification::Accept);
    assert!((confidence.value() - 0.26).abs() < 1e-9, "got {confidence}");

    confidence = engine.apply(confidence, Classification::Accept, &state, 1.0);
    state.record(Classification::Accept);
    assert!((confidence.value() - 0.29).abs() < 1e-9, "got {confidence}");

    confidence = engine.apply(confidence, Classification::Accept, &state, 1.0);
    assert!((confidence.value() - 0.31).abs() < 1e-9, "got {confidence}");
}

#[test]
fn weak_accept_adds_two_points_at_neutral() {
    let engine = ConfidenceEngine::new();
    let next = engine.apply(
        Confidence::new(0.5),
        Classification::WeakAccept,
        &state_with_accepts(0),
        1.0,
    );
    assert!((next.value() - 0.52).abs() < 1e-9);
}

#[test]
fn reject_never_decreases_confidence() {
    let engine = ConfidenceEngine::new();
    for start in [0.20, 0.37, 0.95] {
        let next = engine.apply(
            Confidence::new(start),
            Classification::Reject,
            &state_with_accepts(0),
            1.4,
        );
        assert_eq!(next.value(), start);
    }
}

#[test]
fn temporal_multiplier_is_clamped() {
    let engine = ConfidenceEngine::new();
    let state = state_with_accepts(0);

    let high = engine.breakdown(Confidence::default(), Classification::Accept, &state, 9.0);
    assert_eq!(high.temporal_multiplier, 1.40);
    assert!((high.new_confidence - (0.20 + 0.06 * 1.40)).abs() < 1e-12);

    let low = engine.breakdown(Confidence::default(), Classification::Accept, &state, 0.1);
    assert_eq!(low.temporal_multiplier, 0.75);

    let nan = engine.breakdown(Confidence::default(), Classification::Accept, &state, f64::NAN);
    assert_eq!(nan.temporal_multiplier, 1.0);
}

#[test]
fn result_is_clamped_to_max() {
    let engine = ConfidenceEngine::new();
    let breakdown = engine.breakdown(
        Confidence::new(0.93),
        Classification::Accept,
        &state_with_accepts(0),
        1.4,
    );
    assert_eq!(breakdown.new_confidence, 0.95);
    assert!((breakdown.delta_applied - 0.02).abs() < 1e-12);
}

#[test]
fn custom_reject_delta_is_used_but_never_negative() {
    let positive = ConfidenceEngine::with_deltas(DeltaTable {
        reject: 0.001,
        ..DeltaTable::default()
    });
    let next = positive.apply(Confidence::new(0.5), Classification::Reject, &state_with_accepts(0), 1.0);
    assert!((next.value() - 0.501).abs() < 1e-12);

    let negative = DeltaTable {
        reject: -0.05,
        ..DeltaTable::default()
    };
    assert_eq!(formula::base_delta(&negative, Classification::Reject), 0.0);
}

#[test]
fn identical_inputs_produce_identical_output() {
    let engine = ConfidenceEngine::new();
    let state = state_with_accepts(2);
    let a = engine.breakdown(Confidence::new(0.44), Classification::Accept, &state, 1.13);
    let b = engine.breakdown(Confidence::new(0.44), Classification::Accept, &state, 1.13);
    assert_eq!(a, b);
    assert_eq!(a.new_confidence.to_bits(), b.new_confidence.to_bits());
}
