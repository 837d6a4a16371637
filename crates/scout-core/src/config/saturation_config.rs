use serde::{Deserialize, Serialize};

use super::defaults;

/// Saturation detector configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SaturationConfig {
    /// Trailing confidence samples considered.
    pub window: usize,
    /// A full window spanning less than this is saturated.
    pub epsilon: f64,
}

impl Default for SaturationConfig {
    fn default() -> Self {
        Self {
            window: defaults::DEFAULT_SATURATION_WINDOW,
            epsilon: defaults::DEFAULT_SATURATION_EPSILON,
        }
    }
}
