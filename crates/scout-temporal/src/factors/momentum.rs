use scout_core::models::SignalHistory;

const MOMENTUM_MIN: f64 = 0.8;
const MOMENTUM_MAX: f64 = 1.25;

/// Momentum factor: `sqrt(recent / baseline)`, clamped to [0.8, 1.25].
///
/// No baseline means no trend to compare against: 1.0.
pub fn calculate(history: &SignalHistory) -> f64 {
    let baseline = history.baseline_signals_per_window;
    if !baseline.is_finite() || baseline <= 0.0 {
        return 1.0;
    }
    (history.recent_signal_count as f64 / baseline)
        .sqrt()
        .clamp(MOMENTUM_MIN, MOMENTUM_MAX)
}
