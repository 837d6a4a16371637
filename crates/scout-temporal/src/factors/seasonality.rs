use chrono::{DateTime, Datelike, Utc};
use scout_core::models::SignalHistory;

/// Seasonality factor: `(count[month] + 1) / (mean_monthly + 1)`.
///
/// Laplace smoothing keeps sparse months from collapsing to zero.
/// A flat history gives 1.0.
pub fn calculate(history: &SignalHistory, reference_time: DateTime<Utc>) -> f64 {
    let month = reference_time.month0() as usize;
    let total: u32 = history.monthly_signal_counts.iter().sum();
    let mean = total as f64 / 12.0;
    (history.monthly_signal_counts[month] as f64 + 1.0) / (mean + 1.0)
}
