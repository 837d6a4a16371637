/// Audit log errors. Fatal to the session when raised while appending.
#[derive(Debug, thiserror::Error)]
pub enum AuditError {
    #[error("audit sink write failed at sequence {sequence_number}: {reason}")]
    WriteFailed { sequence_number: u64, reason: String },

    #[error("audit log load failed for {path}: {reason}")]
    LoadFailed { path: String, reason: String },

    #[error("audit entry serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}
