/// Budget enforcement errors. Always force `BUDGET_EXHAUSTED`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BudgetError {
    #[error("budget overrun: charge {charge_micros} on spent {spent_micros} exceeds cap {max_micros} (micro-USD)")]
    Overrun {
        charge_micros: u64,
        spent_micros: u64,
        max_micros: u64,
    },

    #[error("iteration cap reached: {used}/{max}")]
    IterationCapReached { used: u32, max: u32 },
}
