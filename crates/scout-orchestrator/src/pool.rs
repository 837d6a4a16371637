//! Concurrent execution of independent sessions.

use tokio::task::JoinSet;
use tracing::error;

use scout_core::errors::ScoutError;
use scout_core::traits::IEvidenceAdapter;

use crate::engine::ExplorationOrchestrator;
use crate::session::SessionReport;

/// Run every orchestrator to completion on a `JoinSet`.
///
/// Sessions share nothing mutable; results come back in input order.
pub async fn run_sessions<A>(
    orchestrators: Vec<ExplorationOrchestrator<A>>,
) -> Vec<Result<SessionReport, ScoutError>>
where
    A: IEvidenceAdapter + 'static,
{
    let total = orchestrators.len();
    let mut set = JoinSet::new();
    for (index, mut orchestrator) in orchestrators.into_iter().enumerate() {
        set.spawn(async move { (index, orchestrator.run().await) });
    }

    let mut results: Vec<Option<Result<SessionReport, ScoutError>>> =
        (0..total).map(|_| None).collect();
    while let Some(joined) = set.join_next().await {
        match joined {
            Ok((index, result)) => results[index] = Some(result),
            Err(e) => error!(error = %e, "session task aborted"),
        }
    }

    results
        .into_iter()
        .map(|r| {
            r.unwrap_or_else(|| {
                Err(ScoutError::SessionTask {
                    reason: "task panicked or was cancelled".to_string(),
                })
            })
        })
        .collect()
}
