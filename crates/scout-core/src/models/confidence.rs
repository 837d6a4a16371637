use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::{CONFIDENCE_MAX, CONFIDENCE_START};

/// Session confidence clamped to [0.20, 0.95].
/// Represents how strongly the evidence so far implies an upcoming procurement.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Confidence(f64);

impl Confidence {
    /// Lower bound and starting value for every session.
    pub const START: f64 = CONFIDENCE_START;
    /// Upper bound. Reaching it is one of the two lock-in conditions.
    pub const MAX: f64 = CONFIDENCE_MAX;

    /// Create a new Confidence, clamping to [START, MAX]. NaN maps to START.
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self(Self::START);
        }
        Self(value.clamp(Self::START, Self::MAX))
    }

    /// Get the raw f64 value.
    pub fn value(self) -> f64 {
        self.0
    }

    /// Whether the upper bound has been reached.
    pub fn is_max(self) -> bool {
        self.0 >= Self::MAX
    }
}

impl Default for Confidence {
    fn default() -> Self {
        Self(Self::START)
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}", self.0)
    }
}

impl From<f64> for Confidence {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<Confidence> for f64 {
    fn from(c: Confidence) -> Self {
        c.0
    }
}
