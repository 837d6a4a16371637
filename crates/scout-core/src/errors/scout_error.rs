use super::{AdapterError, AuditError, BudgetError, ConfigError, ValidationError};

/// Top-level error for the Scout workspace.
#[derive(Debug, thiserror::Error)]
pub enum ScoutError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Adapter(#[from] AdapterError),

    #[error(transparent)]
    Budget(#[from] BudgetError),

    #[error(transparent)]
    Audit(#[from] AuditError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("invalid session: {reason}")]
    InvalidSession { reason: String },

    #[error("session task aborted: {reason}")]
    SessionTask { reason: String },
}

/// Convenience alias used across the workspace.
pub type ScoutResult<T> = Result<T, ScoutError>;
