//! BudgetController: cap checks and charging.

use scout_core::config::BudgetConfig;
use scout_core::errors::BudgetError;
use scout_core::models::CostUsd;
use tracing::debug;

use crate::budget::{Budget, Remaining};

/// Enforces budget caps and prices iterations.
///
/// Every method is pure over its `Budget` argument: the input is never
/// modified and an updated copy is returned.
#[derive(Debug, Clone, Default)]
pub struct BudgetController {
    config: BudgetConfig,
}

impl BudgetController {
    pub fn new(config: BudgetConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &BudgetConfig {
        &self.config
    }

    /// Whether another iteration may start.
    pub fn may_continue(&self, budget: &Budget) -> bool {
        budget.spent() < budget.max_cost()
            && budget.iterations_used() < budget.max_iterations()
            && budget.elapsed_seconds() < budget.max_wall_clock_seconds()
    }

    /// Add `cost` to the spend. Fails without changing anything if the
    /// result would exceed the cap.
    pub fn charge(&self, budget: &Budget, cost: CostUsd) -> Result<Budget, BudgetError> {
        let overrun = || BudgetError::Overrun {
            charge_micros: cost.micros(),
            spent_micros: budget.spent().micros(),
            max_micros: budget.max_cost().micros(),
        };
        let spent = budget.spent().checked_add(cost).ok_or_else(overrun)?;
        if spent > budget.max_cost() {
            return Err(overrun());
        }
        debug!(charge = %cost, spent = %spent, cap = %budget.max_cost(), "budget charged");
        Ok(budget.with_spent(spent))
    }

    /// Count one committed iteration.
    pub fn record_iteration(&self, budget: &Budget) -> Result<Budget, BudgetError> {
        if budget.iterations_used() >= budget.max_iterations() {
            return Err(BudgetError::IterationCapReached {
                used: budget.iterations_used(),
                max: budget.max_iterations(),
            });
        }
        Ok(budget.with_iterations_used(budget.iterations_used() + 1))
    }

    /// Set total elapsed wall-clock time. Elapsed time never moves
    /// backwards; a smaller or non-finite reading is ignored.
    pub fn record_elapsed(&self, budget: &Budget, elapsed_seconds: f64) -> Budget {
        if !elapsed_seconds.is_finite() || elapsed_seconds <= budget.elapsed_seconds() {
            return *budget;
        }
        budget.with_elapsed(elapsed_seconds)
    }

    pub fn remaining(&self, budget: &Budget) -> Remaining {
        Remaining {
            cost: budget.max_cost().saturating_sub(budget.spent()),
            iterations: budget.max_iterations().saturating_sub(budget.iterations_used()),
            wall_clock_seconds: (budget.max_wall_clock_seconds() - budget.elapsed_seconds())
                .max(0.0),
        }
    }

    /// Price of one iteration: the evidence or no-evidence rate plus one
    /// retry charge per adapter retry.
    pub fn iteration_cost(&self, had_evidence: bool, retries: u32) -> CostUsd {
        let base = if had_evidence {
            self.config.iteration_cost_usd
        } else {
            self.config.no_evidence_cost_usd
        };
        let retry = CostUsd::from_usd(self.config.retry_cost_usd);
        CostUsd::from_micros(
            CostUsd::from_usd(base)
                .micros()
                .saturating_add(retry.micros().saturating_mul(u64::from(retries))),
        )
    }
}
