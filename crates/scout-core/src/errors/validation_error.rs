/// Evidence validator errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Candidate failed basic shape checks. Recovered locally as REJECT.
    #[error("malformed evidence from {source_url:?}: {reason}")]
    MalformedEvidence { source_url: String, reason: String },

    /// The emitted decision contradicts its own reasons. Indicates a
    /// validator logic bug; never auto-corrected.
    #[error("inconsistent decision ({classification}): {details}")]
    InconsistentDecision {
        classification: String,
        details: String,
    },
}
