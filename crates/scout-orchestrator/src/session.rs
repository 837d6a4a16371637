//! Session state and its serializable summary.

use std::collections::{BTreeMap, HashSet};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use scout_budget::Budget;
use scout_core::errors::ScoutError;
use scout_core::models::{
    Category, CategoryState, Confidence, CostUsd, Decision, EntityId, EntityProfile,
    SessionStatus,
};
use scout_observability::ExplorationMetrics;
use scout_validation::EvidenceLedger;

/// One bounded exploration of one entity.
///
/// Read-only outside this crate. The orchestrator is the only writer, and
/// nothing changes once the status is terminal.
#[derive(Debug, Clone)]
pub struct ExplorationSession {
    id: Uuid,
    entity: EntityProfile,
    categories: Vec<Category>,
    category_states: BTreeMap<Category, CategoryState>,
    confidence: Confidence,
    budget: Budget,
    status: SessionStatus,
    iteration_count: u32,
    ledger: EvidenceLedger,
    started_at: Option<DateTime<Utc>>,
    finished_at: Option<DateTime<Utc>>,
    failure: Option<String>,
}

impl ExplorationSession {
    /// Create a RUNNING session over every category.
    pub fn new(entity: EntityProfile, budget: Budget) -> Self {
        Self::build(entity, Category::ALL.to_vec(), budget)
    }

    /// Create a RUNNING session over an ordered subset of categories.
    ///
    /// The subset must be non-empty and free of duplicates.
    pub fn with_categories(
        entity: EntityProfile,
        categories: Vec<Category>,
        budget: Budget,
    ) -> Result<Self, ScoutError> {
        if categories.is_empty() {
            return Err(ScoutError::InvalidSession {
                reason: "at least one category is required".to_string(),
            });
        }
        let mut seen = HashSet::new();
        if let Some(dup) = categories.iter().find(|c| !seen.insert(**c)) {
            return Err(ScoutError::InvalidSession {
                reason: format!("category {dup} listed twice"),
            });
        }
        Ok(Self::build(entity, categories, budget))
    }

    fn build(entity: EntityProfile, categories: Vec<Category>, budget: Budget) -> Self {
        let category_states = categories
            .iter()
            .map(|c| (*c, CategoryState::new()))
            .collect();
        Self {
            id: Uuid::new_v4(),
            entity,
            categories,
            category_states,
            confidence: Confidence::default(),
            budget,
            status: SessionStatus::Running,
            iteration_count: 0,
            ledger: EvidenceLedger::new(),
            started_at: None,
            finished_at: None,
            failure: None,
        }
    }

    /// Seed the duplicate ledger, e.g. with content hashes from earlier
    /// explorations of the same entity.
    pub fn with_ledger(mut self, ledger: EvidenceLedger) -> Self {
        self.ledger = ledger;
        self
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn entity(&self) -> &EntityProfile {
        &self.entity
    }

    pub fn entity_id(&self) -> &EntityId {
        &self.entity.id
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn category_state(&self, category: Category) -> CategoryState {
        self.category_states
            .get(&category)
            .cloned()
            .unwrap_or_default()
    }

    pub fn category_states(&self) -> &BTreeMap<Category, CategoryState> {
        &self.category_states
    }

    pub fn confidence(&self) -> Confidence {
        self.confidence
    }

    pub fn budget(&self) -> &Budget {
        &self.budget
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn iteration_count(&self) -> u32 {
        self.iteration_count
    }

    pub fn ledger(&self) -> &EvidenceLedger {
        &self.ledger
    }

    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        self.started_at
    }

    pub fn finished_at(&self) -> Option<DateTime<Utc>> {
        self.finished_at
    }

    /// Why the session FAILED, if it did.
    pub fn failure(&self) -> Option<&str> {
        self.failure.as_deref()
    }

    /// Every explored category has at least one ACCEPT.
    pub fn every_category_accepted(&self) -> bool {
        self.category_states.values().all(|s| s.accepted_count > 0)
    }

    pub(crate) fn mark_started(&mut self, now: DateTime<Utc>) {
        if self.started_at.is_none() {
            self.started_at = Some(now);
        }
    }

    pub(crate) fn set_budget(&mut self, budget: Budget) {
        if !self.status.is_terminal() {
            self.budget = budget;
        }
    }

    /// Commit one iteration's tentative results.
    pub(crate) fn commit(
        &mut self,
        category: Category,
        state: CategoryState,
        confidence: Confidence,
        budget: Budget,
        decision: &Decision,
    ) {
        if self.status.is_terminal() {
            return;
        }
        self.category_states.insert(category, state);
        self.confidence = Confidence::new(confidence.value().max(self.confidence.value()));
        self.budget = budget;
        self.ledger.record(category, decision);
        self.iteration_count += 1;
    }

    pub(crate) fn terminate(
        &mut self,
        status: SessionStatus,
        now: DateTime<Utc>,
        failure: Option<String>,
    ) -> SessionStatus {
        if self.status.is_terminal() {
            return self.status;
        }
        self.status = status;
        self.finished_at = Some(now);
        self.failure = failure;
        self.status
    }
}

/// Serializable summary of a session at a point in time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionReport {
    pub session_id: Uuid,
    pub entity_id: EntityId,
    pub status: SessionStatus,
    pub confidence: f64,
    pub iteration_count: u32,
    pub spent: CostUsd,
    pub max_cost: CostUsd,
    pub elapsed_seconds: f64,
    pub category_states: BTreeMap<Category, CategoryState>,
    pub started_at: Option<DateTime<Utc>>,
    pub finished_at: Option<DateTime<Utc>>,
    pub failure: Option<String>,
    /// Head of the audit hash chain.
    pub audit_head: String,
    pub metrics: ExplorationMetrics,
}

impl SessionReport {
    pub(crate) fn from_session(
        session: &ExplorationSession,
        audit_head: &str,
        metrics: ExplorationMetrics,
    ) -> Self {
        Self {
            session_id: session.id(),
            entity_id: session.entity_id().clone(),
            status: session.status(),
            confidence: session.confidence().value(),
            iteration_count: session.iteration_count(),
            spent: session.budget().spent(),
            max_cost: session.budget().max_cost(),
            elapsed_seconds: session.budget().elapsed_seconds(),
            category_states: session.category_states().clone(),
            started_at: session.started_at(),
            finished_at: session.finished_at(),
            failure: session.failure.clone(),
            audit_head: audit_head.to_string(),
            metrics,
        }
    }
}
