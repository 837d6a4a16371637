use serde::{Deserialize, Serialize};

use scout_core::models::CostUsd;

/// Hard limits for one session plus what has been used so far.
///
/// There are no setters. Use [`crate::BudgetController`] to advance usage.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Budget {
    max_cost: CostUsd,
    max_iterations: u32,
    max_wall_clock_seconds: f64,
    spent: CostUsd,
    elapsed_seconds: f64,
    iterations_used: u32,
}

impl Budget {
    /// A fresh budget with nothing used.
    ///
    /// A non-finite or negative wall-clock cap is treated as zero, which
    /// admits no iterations.
    pub fn new(max_cost_usd: f64, max_iterations: u32, max_wall_clock_seconds: f64) -> Self {
        let max_wall_clock_seconds = if max_wall_clock_seconds.is_finite() {
            max_wall_clock_seconds.max(0.0)
        } else {
            0.0
        };
        Self {
            max_cost: CostUsd::from_usd(max_cost_usd),
            max_iterations,
            max_wall_clock_seconds,
            spent: CostUsd::ZERO,
            elapsed_seconds: 0.0,
            iterations_used: 0,
        }
    }

    pub fn max_cost(&self) -> CostUsd {
        self.max_cost
    }

    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    pub fn max_wall_clock_seconds(&self) -> f64 {
        self.max_wall_clock_seconds
    }

    pub fn spent(&self) -> CostUsd {
        self.spent
    }

    pub fn elapsed_seconds(&self) -> f64 {
        self.elapsed_seconds
    }

    pub fn iterations_used(&self) -> u32 {
        self.iterations_used
    }

    pub(crate) fn with_spent(mut self, spent: CostUsd) -> Self {
        self.spent = spent;
        self
    }

    pub(crate) fn with_elapsed(mut self, elapsed_seconds: f64) -> Self {
        self.elapsed_seconds = elapsed_seconds;
        self
    }

    pub(crate) fn with_iterations_used(mut self, iterations_used: u32) -> Self {
        self.iterations_used = iterations_used;
        self
    }
}

/// Headroom left under each cap.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Remaining {
    pub cost: CostUsd,
    pub iterations: u32,
    pub wall_clock_seconds: f64,
}
