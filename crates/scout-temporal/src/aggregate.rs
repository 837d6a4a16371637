//! Build a `SignalHistory` from confirmed signal timestamps.

use chrono::{DateTime, Datelike, Duration, Utc};
use scout_core::models::SignalHistory;

/// Aggregate confirmed signal times observed up to `as_of`.
///
/// Signals after `as_of` are ignored. The baseline is the average number
/// of signals per `window_days` over the span from the first signal to
/// `as_of`, never over less than one window.
pub fn aggregate(signals: &[DateTime<Utc>], as_of: DateTime<Utc>, window_days: u32) -> SignalHistory {
    let mut times: Vec<DateTime<Utc>> = signals.iter().copied().filter(|t| *t <= as_of).collect();
    times.sort();

    let mut history = SignalHistory::default();
    let Some(first) = times.first().copied() else {
        return history;
    };

    for t in &times {
        history.monthly_signal_counts[t.month0() as usize] += 1;
    }
    history.last_confirmed_signal = times.last().copied();

    if times.len() >= 2 {
        let gaps: f64 = times
            .windows(2)
            .map(|w| (w[1] - w[0]).num_seconds() as f64 / 86400.0)
            .sum();
        history.mean_interval_days = Some(gaps / (times.len() - 1) as f64);
    }

    let window_days = window_days.max(1);
    let window_start = as_of - Duration::days(i64::from(window_days));
    history.recent_signal_count = times.iter().filter(|t| **t > window_start).count() as u32;

    let span_days = ((as_of - first).num_seconds() as f64 / 86400.0).max(f64::from(window_days));
    history.baseline_signals_per_window = times.len() as f64 * f64::from(window_days) / span_days;

    history
}
