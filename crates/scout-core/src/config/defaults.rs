//! Default values for every configuration section.

use crate::constants;

// Confidence
pub const DEFAULT_ACCEPT_DELTA: f64 = constants::ACCEPT_DELTA;
pub const DEFAULT_WEAK_ACCEPT_DELTA: f64 = constants::WEAK_ACCEPT_DELTA;
pub const DEFAULT_REJECT_DELTA: f64 = constants::REJECT_DELTA;

// Validation
pub const DEFAULT_RECENCY_DAYS: i64 = 365;
pub const DEFAULT_FUTURE_TOLERANCE_HOURS: i64 = 24;
pub const DEFAULT_FINGERPRINT_TOKENS: usize = 8;

// Temporal
pub const DEFAULT_MIN_SAMPLES: u32 = 5;
pub const DEFAULT_MOMENTUM_WINDOW_DAYS: u32 = 90;

// Budget
pub const DEFAULT_ITERATION_COST_USD: f64 = 0.03;
pub const DEFAULT_NO_EVIDENCE_COST_USD: f64 = 0.01;
pub const DEFAULT_RETRY_COST_USD: f64 = 0.005;

// Saturation
pub const DEFAULT_SATURATION_WINDOW: usize = constants::SATURATION_WINDOW;
pub const DEFAULT_SATURATION_EPSILON: f64 = constants::SATURATION_EPSILON;

// Orchestrator
pub const DEFAULT_ADAPTER_TIMEOUT_MS: u64 = 30_000;
pub const DEFAULT_MAX_ADAPTER_RETRIES: u32 = 2;
pub const DEFAULT_RETRY_BACKOFF_MS: u64 = 250;
pub const DEFAULT_MAX_CONSECUTIVE_EMPTY: u32 = 3;
