use crate::errors::AuditError;
use crate::models::AuditLogEntry;

/// Durable mirror for the audit log. The in-process log stays authoritative.
pub trait IAuditSink: Send + Sync {
    /// Persist one entry. A failure here is fatal to the session.
    fn write(&self, entry: &AuditLogEntry) -> Result<(), AuditError>;
}
