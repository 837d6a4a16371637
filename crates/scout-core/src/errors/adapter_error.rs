/// Evidence adapter errors. Both variants are transient: the orchestrator
/// retries a bounded number of times, then treats the iteration as
/// `NoEvidenceAvailable`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AdapterError {
    #[error("adapter call timed out after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    #[error("adapter unavailable: {reason}")]
    Unavailable { reason: String },
}
