use serde::{Deserialize, Serialize};

use super::Classification;

/// Per-category bookkeeping for one session.
///
/// The multiplier is never stored; it is always derived from
/// `accepted_count` so the two can't drift apart.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryState {
    pub accepted_count: u32,
    pub weak_accepted_count: u32,
    pub rejected_count: u32,
    /// Consecutive iterations in which the adapter had nothing for this category.
    pub consecutive_empty: u32,
}

impl CategoryState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Diminishing-returns multiplier: `1 / (1 + accepted_count)`.
    ///
    /// Always in (0, 1], strictly decreasing in `accepted_count`.
    pub fn multiplier(&self) -> f64 {
        1.0 / (1.0 + self.accepted_count as f64)
    }

    /// Count a decision. Any outcome that reached the validator resets the
    /// empty streak.
    pub fn record(&mut self, classification: Classification) {
        match classification {
            Classification::Accept => self.accepted_count += 1,
            Classification::WeakAccept => self.weak_accepted_count += 1,
            Classification::Reject => self.rejected_count += 1,
        }
        self.consecutive_empty = 0;
    }

    /// Count an iteration where the adapter returned no evidence.
    /// It is a REJECT-equivalent outcome.
    pub fn record_empty(&mut self) {
        self.rejected_count += 1;
        self.consecutive_empty += 1;
    }

    /// Total decisions recorded for this category.
    pub fn total(&self) -> u32 {
        self.accepted_count + self.weak_accepted_count + self.rejected_count
    }
}
