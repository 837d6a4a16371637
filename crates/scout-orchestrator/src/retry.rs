//! Adapter calls with per-call timeout and bounded, backed-off retries.

use scout_core::config::OrchestratorConfig;
use scout_core::constants::MAX_ADAPTER_RETRIES_CEILING;
use scout_core::errors::AdapterError;
use scout_core::models::{Category, EntityProfile, EvidenceCandidate};
use scout_core::traits::{AdapterResponse, Cancellable, CancellationToken, IEvidenceAdapter};
use tracing::warn;

/// What one iteration got from the adapter.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchOutcome {
    /// `None` means no evidence, either reported or after retries ran out.
    pub candidate: Option<EvidenceCandidate>,
    /// Retries performed. Each one is charged.
    pub retries: u32,
    /// The error that ended the attempts, when they ran out.
    pub last_error: Option<AdapterError>,
}

/// Call the adapter, retrying transient failures.
///
/// Timeouts and `Unavailable` errors are retried up to
/// `max_adapter_retries` times (never more than the hard ceiling) with
/// exponential backoff. Cancellation stops further retries.
pub async fn fetch_with_retry<A: IEvidenceAdapter>(
    adapter: &A,
    entity: &EntityProfile,
    category: Category,
    config: &OrchestratorConfig,
    cancel: &CancellationToken,
) -> FetchOutcome {
    let max_retries = config.max_adapter_retries.min(MAX_ADAPTER_RETRIES_CEILING);
    let mut retries = 0;

    loop {
        let result = match tokio::time::timeout(
            config.adapter_timeout(),
            adapter.fetch_candidate(entity, category),
        )
        .await
        {
            Ok(result) => result,
            Err(_) => Err(AdapterError::Timeout {
                timeout_ms: config.adapter_timeout_ms,
            }),
        };

        match result {
            Ok(AdapterResponse::Candidate(candidate)) => {
                return FetchOutcome {
                    candidate: Some(candidate),
                    retries,
                    last_error: None,
                }
            }
            Ok(AdapterResponse::NoEvidenceAvailable) => {
                return FetchOutcome {
                    candidate: None,
                    retries,
                    last_error: None,
                }
            }
            Err(e) if retries >= max_retries || cancel.is_cancelled() => {
                warn!(%category, retries, error = %e, "adapter retries exhausted, treating as no evidence");
                return FetchOutcome {
                    candidate: None,
                    retries,
                    last_error: Some(e),
                };
            }
            Err(e) => {
                retries += 1;
                let backoff = config.backoff(retries);
                warn!(
                    %category,
                    attempt = retries,
                    backoff_ms = backoff.as_millis() as u64,
                    error = %e,
                    "adapter call failed, retrying"
                );
                tokio::time::sleep(backoff).await;
            }
        }
    }
}
