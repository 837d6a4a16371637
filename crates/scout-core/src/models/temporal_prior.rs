use serde::{Deserialize, Serialize};

use crate::constants::TEMPORAL_NEUTRAL;

/// Which step of the fallback chain produced a temporal prior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriorLevel {
    Entity,
    Cluster,
    Global,
    Neutral,
}

/// A resolved temporal multiplier with its factor breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TemporalPrior {
    /// Clamped product of the three factors.
    pub multiplier: f64,
    pub level: PriorLevel,
    pub seasonality: f64,
    pub recurrence: f64,
    pub momentum: f64,
}

impl TemporalPrior {
    /// The end of the fallback chain.
    pub fn neutral() -> Self {
        Self {
            multiplier: TEMPORAL_NEUTRAL,
            level: PriorLevel::Neutral,
            seasonality: TEMPORAL_NEUTRAL,
            recurrence: TEMPORAL_NEUTRAL,
            momentum: TEMPORAL_NEUTRAL,
        }
    }
}

impl Default for TemporalPrior {
    fn default() -> Self {
        Self::neutral()
    }
}
