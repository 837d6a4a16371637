use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::defaults;

/// Exploration loop configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OrchestratorConfig {
    /// Per-call timeout for the evidence adapter.
    pub adapter_timeout_ms: u64,
    /// Retries after a transient adapter failure. Capped at 5.
    pub max_adapter_retries: u32,
    /// Base backoff, doubled per retry.
    pub retry_backoff_ms: u64,
    /// Consecutive empty fetches before a category is considered exhausted.
    pub max_consecutive_empty: u32,
}

impl OrchestratorConfig {
    pub fn adapter_timeout(&self) -> Duration {
        Duration::from_millis(self.adapter_timeout_ms)
    }

    /// Backoff before retry number `attempt` (1-based).
    pub fn backoff(&self, attempt: u32) -> Duration {
        let factor = 1u64 << attempt.saturating_sub(1).min(16);
        Duration::from_millis(self.retry_backoff_ms.saturating_mul(factor))
    }
}

impl Default for OrchestratorConfig {
    fn default() -> Self {
        Self {
            adapter_timeout_ms: defaults::DEFAULT_ADAPTER_TIMEOUT_MS,
            max_adapter_retries: defaults::DEFAULT_MAX_ADAPTER_RETRIES,
            retry_backoff_ms: defaults::DEFAULT_RETRY_BACKOFF_MS,
            max_consecutive_empty: defaults::DEFAULT_MAX_CONSECUTIVE_EMPTY,
        }
    }
}
