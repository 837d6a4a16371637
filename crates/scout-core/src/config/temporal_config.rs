use serde::{Deserialize, Serialize};

use super::defaults;

/// Temporal prior configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TemporalConfig {
    /// Minimum confirmed signals before a history level is trusted.
    pub min_samples: u32,
    /// Trailing window used for momentum, in days.
    pub momentum_window_days: u32,
}

impl Default for TemporalConfig {
    fn default() -> Self {
        Self {
            min_samples: defaults::DEFAULT_MIN_SAMPLES,
            momentum_window_days: defaults::DEFAULT_MOMENTUM_WINDOW_DAYS,
        }
    }
}
