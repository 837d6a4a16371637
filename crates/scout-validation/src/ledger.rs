//! Per-session memory of what evidence has already been counted.

use std::collections::{HashMap, HashSet};

use scout_core::models::{Category, Classification, Decision};

/// Seen content hashes and weakly-counted signal fingerprints.
///
/// Owned by the session and passed to the validator by shared reference;
/// only the orchestrator records into it, after a decision is committed.
#[derive(Debug, Clone, Default)]
pub struct EvidenceLedger {
    seen_hashes: HashSet<String>,
    weak_fingerprints: HashMap<Category, HashSet<String>>,
}

impl EvidenceLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed with content hashes logged by earlier explorations of the entity.
    pub fn with_prior_hashes<I>(hashes: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        Self {
            seen_hashes: hashes.into_iter().collect(),
            weak_fingerprints: HashMap::new(),
        }
    }

    pub fn has_seen(&self, content_hash: &str) -> bool {
        self.seen_hashes.contains(content_hash)
    }

    pub fn is_weakly_counted(&self, category: Category, fingerprint: &str) -> bool {
        self.weak_fingerprints
            .get(&category)
            .is_some_and(|set| set.contains(fingerprint))
    }

    /// Record a committed decision.
    pub fn record(&mut self, category: Category, decision: &Decision) {
        if !decision.content_hash().is_empty() {
            self.seen_hashes.insert(decision.content_hash().to_string());
        }
        if decision.classification() == Classification::WeakAccept
            && !decision.fingerprint().is_empty()
        {
            self.weak_fingerprints
                .entry(category)
                .or_default()
                .insert(decision.fingerprint().to_string());
        }
    }

    pub fn seen_count(&self) -> usize {
        self.seen_hashes.len()
    }
}
