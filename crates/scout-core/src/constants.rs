/// Scout system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Starting confidence for every session, also the lower clamp bound.
pub const CONFIDENCE_START: f64 = 0.20;

/// Upper clamp bound for confidence.
pub const CONFIDENCE_MAX: f64 = 0.95;

/// Base delta for an ACCEPT decision.
pub const ACCEPT_DELTA: f64 = 0.06;

/// Base delta for a WEAK_ACCEPT decision.
pub const WEAK_ACCEPT_DELTA: f64 = 0.02;

/// Base delta for a REJECT decision. Confidence is purely additive: absence
/// of evidence is never punished. Tunable through `DeltaTable`, but never
/// below zero.
pub const REJECT_DELTA: f64 = 0.00;

/// Lower clamp bound for the temporal multiplier.
pub const TEMPORAL_MULTIPLIER_MIN: f64 = 0.75;

/// Upper clamp bound for the temporal multiplier.
pub const TEMPORAL_MULTIPLIER_MAX: f64 = 1.40;

/// Neutral temporal multiplier, the terminal step of the fallback chain.
pub const TEMPORAL_NEUTRAL: f64 = 1.0;

/// Number of trailing confidence samples the saturation detector watches.
pub const SATURATION_WINDOW: usize = 10;

/// Saturation trips when `max - min` over a full window is below this.
pub const SATURATION_EPSILON: f64 = 0.01;

/// Hard ceiling on adapter retries per iteration, regardless of config.
pub const MAX_ADAPTER_RETRIES_CEILING: u32 = 5;

/// Upper bound for the publication-date tolerance past retrieval (one year).
pub const MAX_FUTURE_TOLERANCE_HOURS: i64 = 24 * 366;

/// Micro-dollars per US dollar.
pub const MICROS_PER_USD: u64 = 1_000_000;
