//! A scripted evidence adapter for orchestrator tests.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use scout_core::errors::AdapterError;
use scout_core::models::{Category, EntityProfile, EvidenceCandidate};
use scout_core::traits::{AdapterResponse, IEvidenceAdapter};

/// One scripted adapter reply.
#[derive(Debug, Clone)]
pub enum Scripted {
    Candidate(EvidenceCandidate),
    NoEvidence,
    Fail(AdapterError),
    /// Sleep before answering with the inner reply.
    Delay(Duration, Box<Scripted>),
}

/// Replays a fixed sequence of replies in call order, regardless of which
/// category was requested. Once the script runs out, every call returns
/// `NoEvidenceAvailable`.
#[derive(Debug, Default)]
pub struct ScriptedAdapter {
    script: Mutex<VecDeque<Scripted>>,
    calls: AtomicU32,
    requested: Mutex<Vec<Category>>,
}

impl ScriptedAdapter {
    pub fn new<I>(script: I) -> Self
    where
        I: IntoIterator<Item = Scripted>,
    {
        Self {
            script: Mutex::new(script.into_iter().collect()),
            calls: AtomicU32::new(0),
            requested: Mutex::new(Vec::new()),
        }
    }

    /// Shorthand for a script made only of candidates.
    pub fn from_candidates<I>(candidates: I) -> Self
    where
        I: IntoIterator<Item = EvidenceCandidate>,
    {
        Self::new(candidates.into_iter().map(Scripted::Candidate))
    }

    /// Number of `fetch_candidate` calls made so far, retries included.
    pub fn calls(&self) -> u32 {
        self.calls.load(Ordering::SeqCst)
    }

    /// Categories requested, in call order.
    pub fn requested(&self) -> Vec<Category> {
        self.requested
            .lock()
            .map(|r| r.clone())
            .unwrap_or_default()
    }

    fn next(&self, category: Category) -> Option<Scripted> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut requested) = self.requested.lock() {
            requested.push(category);
        }
        self.script.lock().ok().and_then(|mut s| s.pop_front())
    }
}

impl IEvidenceAdapter for ScriptedAdapter {
    async fn fetch_candidate(
        &self,
        _entity: &EntityProfile,
        category: Category,
    ) -> Result<AdapterResponse, AdapterError> {
        let mut reply = self.next(category);
        loop {
            match reply {
                None | Some(Scripted::NoEvidence) => return Ok(AdapterResponse::NoEvidenceAvailable),
                Some(Scripted::Candidate(c)) => return Ok(AdapterResponse::Candidate(c)),
                Some(Scripted::Fail(e)) => return Err(e),
                Some(Scripted::Delay(d, inner)) => {
                    tokio::time::sleep(d).await;
                    reply = Some(*inner);
                }
            }
        }
    }
}
