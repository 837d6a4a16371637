use serde::{Deserialize, Serialize};

use super::defaults;

/// Base confidence deltas per classification.
///
/// REJECT defaults to zero. Negative values are refused by
/// `ScoutConfig::validate`; confidence never decreases.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeltaTable {
    pub accept: f64,
    pub weak_accept: f64,
    pub reject: f64,
}

impl Default for DeltaTable {
    fn default() -> Self {
        Self {
            accept: defaults::DEFAULT_ACCEPT_DELTA,
            weak_accept: defaults::DEFAULT_WEAK_ACCEPT_DELTA,
            reject: defaults::DEFAULT_REJECT_DELTA,
        }
    }
}
