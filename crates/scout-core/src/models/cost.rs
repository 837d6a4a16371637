use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Add;

use crate::constants::MICROS_PER_USD;

/// A monetary amount in whole micro-dollars.
///
/// Spend is accumulated in integers so that cap comparisons are exact and
/// replays produce identical audit hashes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CostUsd(u64);

impl CostUsd {
    pub const ZERO: CostUsd = CostUsd(0);

    /// Build from whole micro-dollars.
    pub const fn from_micros(micros: u64) -> Self {
        Self(micros)
    }

    /// Build from a dollar amount, rounded to the nearest micro-dollar.
    /// Negative and non-finite inputs map to zero.
    pub fn from_usd(usd: f64) -> Self {
        if !usd.is_finite() || usd <= 0.0 {
            return Self::ZERO;
        }
        Self((usd * MICROS_PER_USD as f64).round() as u64)
    }

    pub fn micros(self) -> u64 {
        self.0
    }

    pub fn as_usd(self) -> f64 {
        self.0 as f64 / MICROS_PER_USD as f64
    }

    pub fn checked_add(self, rhs: CostUsd) -> Option<CostUsd> {
        self.0.checked_add(rhs.0).map(CostUsd)
    }

    pub fn saturating_sub(self, rhs: CostUsd) -> CostUsd {
        CostUsd(self.0.saturating_sub(rhs.0))
    }
}

impl Add for CostUsd {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        CostUsd(self.0.saturating_add(rhs.0))
    }
}

impl fmt::Display for CostUsd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${:.4}", self.as_usd())
    }
}
