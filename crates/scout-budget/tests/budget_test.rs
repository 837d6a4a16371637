//! BudgetController tests: cap checks, charging, iteration counting.

use proptest::prelude::*;
use scout_budget::{Budget, BudgetController};
use scout_core::config::BudgetConfig;
use scout_core::errors::BudgetError;
use scout_core::models::CostUsd;

fn controller() -> BudgetController {
    BudgetController::default()
}

// ── may_continue ────────────────────────────────────────────────────────

#[test]
fn fresh_budget_may_continue() {
    let budget = Budget::new(0.75, 26, 600.0);
    assert!(controller().may_continue(&budget));
}

#[test]
fn zero_caps_admit_nothing() {
    let c = controller();
    assert!(!c.may_continue(&Budget::new(0.0, 10, 60.0)));
    assert!(!c.may_continue(&Budget::new(1.0, 0, 60.0)));
    assert!(!c.may_continue(&Budget::new(1.0, 10, 0.0)));
    assert!(!c.may_continue(&Budget::new(1.0, 10, f64::NAN)));
}

#[test]
fn spending_exactly_the_cap_stops_the_session() {
    let c = controller();
    let mut budget = Budget::new(0.75, 100, 600.0);
    for _ in 0..25 {
        assert!(c.may_continue(&budget));
        budget = c.charge(&budget, CostUsd::from_usd(0.03)).unwrap();
    }
    assert_eq!(budget.spent(), budget.max_cost());
    assert!(!c.may_continue(&budget));
}

#[test]
fn wall_clock_cap_stops_the_session() {
    let c = controller();
    let budget = Budget::new(1.0, 10, 30.0);
    let budget = c.record_elapsed(&budget, 29.9);
    assert!(c.may_continue(&budget));
    let budget = c.record_elapsed(&budget, 30.0);
    assert!(!c.may_continue(&budget));
}

// ── charge ──────────────────────────────────────────────────────────────

#[test]
fn overrun_is_refused_and_leaves_budget_untouched() {
    let c = controller();
    let budget = Budget::new(0.05, 10, 60.0);
    let budget = c.charge(&budget, CostUsd::from_usd(0.03)).unwrap();
    let before = budget;

    let err = c.charge(&budget, CostUsd::from_usd(0.03)).unwrap_err();
    assert_eq!(
        err,
        BudgetError::Overrun {
            charge_micros: 30_000,
            spent_micros: 30_000,
            max_micros: 50_000,
        }
    );
    assert_eq!(budget, before);
}

#[test]
fn charge_returns_a_copy() {
    let c = controller();
    let budget = Budget::new(1.0, 10, 60.0);
    let charged = c.charge(&budget, CostUsd::from_usd(0.25)).unwrap();
    assert_eq!(budget.spent(), CostUsd::ZERO);
    assert_eq!(charged.spent(), CostUsd::from_usd(0.25));
}

// ── iterations & elapsed ────────────────────────────────────────────────

#[test]
fn iteration_cap_is_enforced() {
    let c = controller();
    let mut budget = Budget::new(1.0, 2, 60.0);
    budget = c.record_iteration(&budget).unwrap();
    budget = c.record_iteration(&budget).unwrap();
    assert_eq!(budget.iterations_used(), 2);
    assert_eq!(
        c.record_iteration(&budget).unwrap_err(),
        BudgetError::IterationCapReached { used: 2, max: 2 }
    );
}

#[test]
fn elapsed_never_decreases() {
    let c = controller();
    let budget = c.record_elapsed(&Budget::new(1.0, 10, 60.0), 12.0);
    assert_eq!(c.record_elapsed(&budget, 5.0).elapsed_seconds(), 12.0);
    assert_eq!(c.record_elapsed(&budget, f64::INFINITY).elapsed_seconds(), 12.0);
    assert_eq!(c.record_elapsed(&budget, 13.5).elapsed_seconds(), 13.5);
}

#[test]
fn remaining_reports_headroom() {
    let c = controller();
    let budget = Budget::new(0.75, 26, 100.0);
    let budget = c.charge(&budget, CostUsd::from_usd(0.30)).unwrap();
    let budget = c.record_iteration(&budget).unwrap();
    let budget = c.record_elapsed(&budget, 40.0);

    let left = c.remaining(&budget);
    assert_eq!(left.cost, CostUsd::from_usd(0.45));
    assert_eq!(left.iterations, 25);
    assert_eq!(left.wall_clock_seconds, 60.0);
}

// ── Pricing ─────────────────────────────────────────────────────────────

#[test]
fn iteration_cost_includes_retries() {
    let c = BudgetController::new(BudgetConfig {
        iteration_cost_usd: 0.03,
        no_evidence_cost_usd: 0.01,
        retry_cost_usd: 0.005,
    });
    assert_eq!(c.iteration_cost(true, 0), CostUsd::from_usd(0.03));
    assert_eq!(c.iteration_cost(false, 0), CostUsd::from_usd(0.01));
    assert_eq!(c.iteration_cost(false, 2), CostUsd::from_usd(0.02));
    assert_eq!(c.iteration_cost(true, 1), CostUsd::from_usd(0.035));
}

#[test]
fn budget_serializes_for_reports() {
    let budget = Budget::new(0.75, 26, 600.0);
    let json = serde_json::to_value(budget).unwrap();
    assert_eq!(json["max_iterations"], 26);
    assert_eq!(json["iterations_used"], 0);
}

// ── Properties ──────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn spend_never_exceeds_cap(
        cap in 0u64..2_000_000,
        charges in prop::collection::vec(0u64..200_000, 0..50),
    ) {
        let c = controller();
        let mut budget = Budget::new(cap as f64 / 1_000_000.0, 1_000, 600.0);
        for charge in charges {
            if let Ok(next) = c.charge(&budget, CostUsd::from_micros(charge)) {
                prop_assert!(next.spent() >= budget.spent());
                budget = next;
            }
            prop_assert!(budget.spent() <= budget.max_cost());
        }
    }

    #[test]
    fn iterations_never_exceed_cap(max in 0u32..40, attempts in 0usize..60) {
        let c = controller();
        let mut budget = Budget::new(1.0, max, 600.0);
        for _ in 0..attempts {
            if let Ok(next) = c.record_iteration(&budget) {
                budget = next;
            }
        }
        prop_assert!(budget.iterations_used() <= max);
    }
}
