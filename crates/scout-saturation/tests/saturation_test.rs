use proptest::prelude::*;
use scout_core::config::SaturationConfig;
use scout_saturation::{is_saturated, SaturationDetector};

// ── Free function ───────────────────────────────────────────────────────

#[test]
fn short_window_is_never_saturated() {
    assert!(!is_saturated(&[0.2; 9], 10, 0.01));
    assert!(!is_saturated(&[], 10, 0.01));
}

#[test]
fn flat_full_window_is_saturated() {
    assert!(is_saturated(&[0.2; 10], 10, 0.01));
}

#[test]
fn one_real_step_in_the_window_is_not_saturated() {
    let mut w = vec![0.30; 10];
    w[0] = 0.28;
    assert!(!is_saturated(&w, 10, 0.01));
}

#[test]
fn only_the_trailing_samples_count() {
    let mut w = vec![0.2, 0.26];
    w.extend([0.29; 10]);
    assert!(is_saturated(&w, 10, 0.01));
}

// ── Detector ────────────────────────────────────────────────────────────

#[test]
fn detector_trips_after_a_flat_run() {
    let mut d = SaturationDetector::default();
    d.observe(0.26);
    for _ in 0..9 {
        d.observe(0.29);
        assert!(!d.is_saturated());
    }
    d.observe(0.29);
    assert!(d.is_saturated());
    assert_eq!(d.len(), 10);
}

#[test]
fn detector_window_evicts_oldest() {
    let mut d = SaturationDetector::new(&SaturationConfig {
        window: 3,
        epsilon: 0.01,
    });
    for v in [0.2, 0.3, 0.4, 0.4, 0.4] {
        d.observe(v);
    }
    assert_eq!(d.samples().collect::<Vec<_>>(), vec![0.4, 0.4, 0.4]);
    assert!(d.is_saturated());
}

#[test]
fn zero_sized_window_never_trips() {
    let mut d = SaturationDetector::new(&SaturationConfig {
        window: 0,
        epsilon: 0.01,
    });
    d.observe(0.2);
    assert!(d.is_empty());
    assert!(!d.is_saturated());
}

proptest! {
    #[test]
    fn rising_by_more_than_epsilon_never_saturates(start in 0.2f64..0.5, step in 0.011f64..0.05) {
        let mut d = SaturationDetector::default();
        for i in 0..20 {
            d.observe(start + step * i as f64);
            prop_assert!(!d.is_saturated());
        }
    }
}
