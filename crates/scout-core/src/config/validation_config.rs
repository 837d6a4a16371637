use serde::{Deserialize, Serialize};

use super::defaults;

/// Evidence validator configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Dated evidence older than this (relative to retrieval) fails recency.
    pub recency_days: i64,
    /// Publication dates further than this past retrieval fail recency.
    pub future_tolerance_hours: i64,
    /// Press outlets whose releases count as credible.
    pub trusted_press_domains: Vec<String>,
    /// Distinct tokens hashed into a fingerprint when no action signal matched.
    pub fingerprint_tokens: usize,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            recency_days: defaults::DEFAULT_RECENCY_DAYS,
            future_tolerance_hours: defaults::DEFAULT_FUTURE_TOLERANCE_HOURS,
            trusted_press_domains: vec![
                "prnewswire.com".to_string(),
                "businesswire.com".to_string(),
                "globenewswire.com".to_string(),
                "reuters.com".to_string(),
                "apnews.com".to_string(),
            ],
            fingerprint_tokens: defaults::DEFAULT_FINGERPRINT_TOKENS,
        }
    }
}
