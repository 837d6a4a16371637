use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Aggregated historical signal data for one key (entity, cluster, or
/// global) and one category. Recomputed out-of-band; read-only here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalHistory {
    /// Confirmed signals per calendar month, January first.
    pub monthly_signal_counts: [u32; 12],
    pub last_confirmed_signal: Option<DateTime<Utc>>,
    /// Expected days between confirmed signals.
    pub mean_interval_days: Option<f64>,
    /// Confirmed signals in the trailing momentum window.
    pub recent_signal_count: u32,
    /// Long-run average signals per momentum window.
    pub baseline_signals_per_window: f64,
}

impl SignalHistory {
    /// Total confirmed signals behind this aggregate.
    pub fn sample_size(&self) -> u32 {
        self.monthly_signal_counts.iter().sum()
    }
}

impl Default for SignalHistory {
    fn default() -> Self {
        Self {
            monthly_signal_counts: [0; 12],
            last_confirmed_signal: None,
            mean_interval_days: None,
            recent_signal_count: 0,
            baseline_signals_per_window: 0.0,
        }
    }
}
