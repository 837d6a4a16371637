use serde::{Deserialize, Serialize};

use super::defaults;

/// Per-iteration cost schedule. Caps come from session admission, not here.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BudgetConfig {
    /// Charged for an iteration that returned a candidate.
    pub iteration_cost_usd: f64,
    /// Charged for an iteration where the adapter had nothing.
    pub no_evidence_cost_usd: f64,
    /// Added per adapter retry. Retries are never free.
    pub retry_cost_usd: f64,
}

impl Default for BudgetConfig {
    fn default() -> Self {
        Self {
            iteration_cost_usd: defaults::DEFAULT_ITERATION_COST_USD,
            no_evidence_cost_usd: defaults::DEFAULT_NO_EVIDENCE_COST_USD,
            retry_cost_usd: defaults::DEFAULT_RETRY_COST_USD,
        }
    }
}
