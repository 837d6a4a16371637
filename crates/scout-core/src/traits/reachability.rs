/// Result of probing a source URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeOutcome {
    pub reachable: bool,
    pub detail: String,
}

impl ProbeOutcome {
    pub fn reachable(detail: impl Into<String>) -> Self {
        Self {
            reachable: true,
            detail: detail.into(),
        }
    }

    pub fn unreachable(detail: impl Into<String>) -> Self {
        Self {
            reachable: false,
            detail: detail.into(),
        }
    }
}

/// Source reachability check used by evidence verification.
///
/// Must answer from already-materialized information (a format check, a
/// cached probe result recorded with the candidate) so that validating the
/// same candidate twice gives the same answer.
pub trait IReachabilityProbe: Send + Sync {
    fn probe(&self, source_url: &str) -> ProbeOutcome;
}
