use scout_core::config::DeltaTable;
use scout_core::models::{CategoryState, Classification, Confidence};

use crate::formula::{self, ConfidenceBreakdown};

/// Confidence engine applying the additive update formula.
///
/// REJECT never lowers confidence. Its delta comes from the table like the
/// others and is floored at zero.
#[derive(Debug, Clone, Default)]
pub struct ConfidenceEngine {
    deltas: DeltaTable,
}

impl ConfidenceEngine {
    /// Create an engine with the standard deltas (0.06 / 0.02 / 0.00).
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with a custom delta table.
    pub fn with_deltas(deltas: DeltaTable) -> Self {
        Self { deltas }
    }

    pub fn deltas(&self) -> &DeltaTable {
        &self.deltas
    }

    /// Apply one decision to the current confidence.
    pub fn apply(
        &self,
        confidence: Confidence,
        classification: Classification,
        category_state: &CategoryState,
        temporal_multiplier: f64,
    ) -> Confidence {
        Confidence::new(formula::compute(
            &self.deltas,
            confidence.value(),
            classification,
            category_state,
            temporal_multiplier,
        ))
    }

    /// Apply with a full breakdown of each factor.
    pub fn breakdown(
        &self,
        confidence: Confidence,
        classification: Classification,
        category_state: &CategoryState,
        temporal_multiplier: f64,
    ) -> ConfidenceBreakdown {
        formula::compute_breakdown(
            &self.deltas,
            confidence.value(),
            classification,
            category_state,
            temporal_multiplier,
        )
    }
}
