use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle status of an exploration session.
///
/// `Running` is the only non-terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SessionStatus {
    Running,
    /// Confidence gains flattened out over the trailing window.
    Saturated,
    /// A cost, iteration, or wall-clock cap was hit.
    BudgetExhausted,
    /// Confidence reached the maximum with an ACCEPT in every category.
    LockedIn,
    /// Operator abort.
    Cancelled,
    /// Stopped by a fatal error (audit write failure, inconsistent decision).
    Failed,
}

impl SessionStatus {
    pub fn is_terminal(self) -> bool {
        !matches!(self, SessionStatus::Running)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SessionStatus::Running => "RUNNING",
            SessionStatus::Saturated => "SATURATED",
            SessionStatus::BudgetExhausted => "BUDGET_EXHAUSTED",
            SessionStatus::LockedIn => "LOCKED_IN",
            SessionStatus::Cancelled => "CANCELLED",
            SessionStatus::Failed => "FAILED",
        }
    }
}

impl fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
