use chrono::{DateTime, Utc};
use scout_core::models::SignalHistory;

/// Recurrence factor: `0.85 + 0.15 × clamp(days_since_last / mean_interval, 0, 2)`.
///
/// Range: 0.85 – 1.15. Just after a signal the next one is unlikely; past
/// the expected interval it is overdue. Without an interval estimate or a
/// last signal the factor is 1.0.
pub fn calculate(history: &SignalHistory, reference_time: DateTime<Utc>) -> f64 {
    let (Some(last), Some(interval)) = (history.last_confirmed_signal, history.mean_interval_days)
    else {
        return 1.0;
    };
    if !interval.is_finite() || interval <= 0.0 {
        return 1.0;
    }

    let days_since = (reference_time - last).num_seconds().max(0) as f64 / 86400.0;
    let ratio = (days_since / interval).clamp(0.0, 2.0);
    0.85 + 0.15 * ratio
}
