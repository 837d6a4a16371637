use std::future::Future;

use crate::errors::AdapterError;
use crate::models::{Category, EntityProfile, EvidenceCandidate};

/// What the adapter found for one request.
#[derive(Debug, Clone, PartialEq)]
pub enum AdapterResponse {
    Candidate(EvidenceCandidate),
    /// Nothing new for this category. REJECT-equivalent; still consumes an
    /// iteration and the (smaller) no-evidence cost.
    NoEvidenceAvailable,
}

/// External search/scrape collaborator.
///
/// Implementations own their I/O and may be non-deterministic; the
/// orchestrator wraps every call in its own timeout and never holds a lock
/// across it.
pub trait IEvidenceAdapter: Send + Sync {
    fn fetch_candidate(
        &self,
        entity: &EntityProfile,
        category: Category,
    ) -> impl Future<Output = Result<AdapterResponse, AdapterError>> + Send;
}
