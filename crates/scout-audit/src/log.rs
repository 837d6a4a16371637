//! AuditLog: the authoritative in-process chain.

use std::collections::HashMap;
use std::sync::Arc;

use scout_confidence::ConfidenceEngine;
use scout_core::errors::AuditError;
use scout_core::models::{
    AuditDraft, AuditLogEntry, Category, CategoryState, Confidence, EvidenceOutcome,
};
use scout_core::traits::IAuditSink;
use tracing::{error, warn};

use crate::chain::{self, ChainBreak};

/// Append-only, hash-chained log for one session.
pub struct AuditLog {
    entries: Vec<AuditLogEntry>,
    head: String,
    sink: Option<Arc<dyn IAuditSink>>,
}

impl AuditLog {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            head: String::new(),
            sink: None,
        }
    }

    /// Mirror every appended entry to `sink`.
    pub fn with_sink(mut self, sink: Arc<dyn IAuditSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Load a persisted log for inspection. Nothing is checked here; call
    /// [`AuditLog::verify`].
    pub fn from_entries(entries: Vec<AuditLogEntry>, head: impl Into<String>) -> Self {
        Self {
            entries,
            head: head.into(),
            sink: None,
        }
    }

    /// Chain `draft` onto the log and return its content hash.
    ///
    /// The sink is written before the entry is stored, so a sink failure
    /// leaves the log exactly as it was.
    pub fn append(&mut self, draft: AuditDraft) -> Result<String, AuditError> {
        let sequence_number = self.entries.len() as u64 + 1;
        let previous_hash = self.head.clone();
        let content_hash = chain::entry_hash(sequence_number, &draft, &previous_hash)?;
        let entry = AuditLogEntry {
            sequence_number,
            draft,
            previous_hash,
            content_hash: content_hash.clone(),
        };

        if let Some(sink) = &self.sink {
            if let Err(e) = sink.write(&entry) {
                error!(sequence_number, error = %e, "audit sink write failed");
                return Err(e);
            }
        }

        self.entries.push(entry);
        self.head = content_hash.clone();
        Ok(content_hash)
    }

    /// Recompute the chain from the first entry.
    pub fn verify(&self) -> bool {
        match self.check() {
            Ok(()) => true,
            Err(brk) => {
                warn!(?brk, "audit chain verification failed");
                false
            }
        }
    }

    /// Like [`AuditLog::verify`] but reports the first break.
    pub fn check(&self) -> Result<(), ChainBreak> {
        chain::verify_chain(&self.entries, &self.head)
    }

    pub fn entries(&self) -> &[AuditLogEntry] {
        &self.entries
    }

    pub fn head(&self) -> &str {
        &self.head
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Rebuild the confidence trajectory from logged decisions alone.
    ///
    /// Starts from the initial confidence and re-applies each entry's
    /// classification with the category counts as they stood before it and
    /// the logged temporal multiplier. For a faithful log the result equals
    /// the recorded `new_confidence` values.
    pub fn replay_confidence(&self, engine: &ConfidenceEngine) -> Vec<f64> {
        let mut confidence = Confidence::default();
        let mut states: HashMap<Category, CategoryState> = HashMap::new();
        let mut trajectory = Vec::with_capacity(self.entries.len());

        for entry in &self.entries {
            let state = states.entry(entry.draft.category).or_default();
            let classification = entry.decision().classification();
            confidence = engine.apply(
                confidence,
                classification,
                state,
                entry.draft.temporal_multiplier,
            );
            match entry.draft.outcome {
                EvidenceOutcome::NoEvidence => state.record_empty(),
                EvidenceOutcome::Evidence | EvidenceOutcome::Malformed => {
                    state.record(classification)
                }
            }
            trajectory.push(confidence.value());
        }
        trajectory
    }
}

impl Default for AuditLog {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for AuditLog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuditLog")
            .field("len", &self.entries.len())
            .field("head", &self.head)
            .field("has_sink", &self.sink.is_some())
            .finish()
    }
}
