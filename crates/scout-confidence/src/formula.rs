use serde::{Deserialize, Serialize};

use scout_core::config::DeltaTable;
use scout_core::constants::{
    CONFIDENCE_MAX, CONFIDENCE_START, TEMPORAL_MULTIPLIER_MAX, TEMPORAL_MULTIPLIER_MIN,
    TEMPORAL_NEUTRAL,
};
use scout_core::models::{CategoryState, Classification};

/// Additive update formula.
///
/// ```text
/// delta = baseDelta(classification)
///   × categoryMultiplier          // 1 / (1 + accepted_count)
///   × clamp(temporal, 0.75, 1.40)
/// newConfidence = clamp(confidence + delta, 0.20, 0.95)
/// ```
pub fn compute(
    deltas: &DeltaTable,
    confidence: f64,
    classification: Classification,
    state: &CategoryState,
    temporal_multiplier: f64,
) -> f64 {
    compute_breakdown(deltas, confidence, classification, state, temporal_multiplier)
        .new_confidence
}

/// Every factor of one update, for audit entries and debugging.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceBreakdown {
    pub prior_confidence: f64,
    pub base_delta: f64,
    pub category_multiplier: f64,
    pub temporal_multiplier: f64,
    /// Change actually applied after clamping to the confidence bounds.
    pub delta_applied: f64,
    pub new_confidence: f64,
}

pub fn compute_breakdown(
    deltas: &DeltaTable,
    confidence: f64,
    classification: Classification,
    state: &CategoryState,
    temporal_multiplier: f64,
) -> ConfidenceBreakdown {
    let prior = clamp_confidence(confidence);
    let base_delta = base_delta(deltas, classification);
    let category_multiplier = state.multiplier();
    let temporal = clamp_temporal(temporal_multiplier);

    let raw = prior + base_delta * category_multiplier * temporal;
    let new_confidence = clamp_confidence(raw);

    ConfidenceBreakdown {
        prior_confidence: prior,
        base_delta,
        category_multiplier,
        temporal_multiplier: temporal,
        delta_applied: new_confidence - prior,
        new_confidence,
    }
}

/// Base delta selected by classification. Negative table entries are
/// floored at zero: the update is purely additive.
pub fn base_delta(deltas: &DeltaTable, classification: Classification) -> f64 {
    let delta = match classification {
        Classification::Accept => deltas.accept,
        Classification::WeakAccept => deltas.weak_accept,
        Classification::Reject => deltas.reject,
    };
    if delta.is_finite() {
        delta.max(0.0)
    } else {
        0.0
    }
}

/// Clamp a temporal multiplier to [0.75, 1.40]; non-finite values are neutral.
pub fn clamp_temporal(multiplier: f64) -> f64 {
    if !multiplier.is_finite() {
        return TEMPORAL_NEUTRAL;
    }
    multiplier.clamp(TEMPORAL_MULTIPLIER_MIN, TEMPORAL_MULTIPLIER_MAX)
}

fn clamp_confidence(value: f64) -> f64 {
    if value.is_nan() {
        return CONFIDENCE_START;
    }
    value.clamp(CONFIDENCE_START, CONFIDENCE_MAX)
}
