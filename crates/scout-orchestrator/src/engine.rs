//! ExplorationOrchestrator: the per-session state machine.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{debug, error, info, warn, Instrument};

use scout_audit::AuditLog;
use scout_budget::BudgetController;
use scout_confidence::ConfidenceEngine;
use scout_core::config::{OrchestratorConfig, ScoutConfig};
use scout_core::errors::{ScoutError, ValidationError};
use scout_core::models::{
    AuditDraft, Category, Confidence, Decision, EvidenceOutcome, SessionStatus,
};
use scout_core::traits::{
    Cancellable, CancellationToken, Clock, IAuditSink, IEvidenceAdapter, IReachabilityProbe,
    SystemClock,
};
use scout_observability::{iteration_span, session_span, validation_span, ExplorationMetrics};
use scout_saturation::SaturationDetector;
use scout_temporal::TemporalPriorService;
use scout_validation::{EvidenceValidator, ValidationContext};

use crate::retry::{self, FetchOutcome};
use crate::selection::CategorySelector;
use crate::session::{ExplorationSession, SessionReport};

/// Runs one [`ExplorationSession`] to a terminal state.
pub struct ExplorationOrchestrator<A: IEvidenceAdapter> {
    session: ExplorationSession,
    adapter: Arc<A>,
    validator: EvidenceValidator,
    temporal: Arc<TemporalPriorService>,
    confidence: ConfidenceEngine,
    budget: BudgetController,
    saturation: SaturationDetector,
    selector: CategorySelector,
    audit: AuditLog,
    clock: Arc<dyn Clock>,
    cancel: CancellationToken,
    config: OrchestratorConfig,
}

impl<A: IEvidenceAdapter> ExplorationOrchestrator<A> {
    /// Wire a session to its collaborators. History defaults to none
    /// (neutral priors), time to the system clock.
    pub fn new(session: ExplorationSession, adapter: Arc<A>, config: &ScoutConfig) -> Self {
        Self {
            session,
            adapter,
            validator: EvidenceValidator::new(config.validation.clone()),
            temporal: Arc::new(TemporalPriorService::neutral()),
            confidence: ConfidenceEngine::with_deltas(config.confidence),
            budget: BudgetController::new(config.budget.clone()),
            saturation: SaturationDetector::new(&config.saturation),
            selector: CategorySelector::new(config.orchestrator.max_consecutive_empty),
            audit: AuditLog::new(),
            clock: Arc::new(SystemClock),
            cancel: CancellationToken::new(),
            config: config.orchestrator.clone(),
        }
    }

    pub fn with_temporal(mut self, temporal: Arc<TemporalPriorService>) -> Self {
        self.temporal = temporal;
        self
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn with_cancellation(mut self, cancel: CancellationToken) -> Self {
        self.cancel = cancel;
        self
    }

    pub fn with_audit_sink(mut self, sink: Arc<dyn IAuditSink>) -> Self {
        self.audit = AuditLog::new().with_sink(sink);
        self
    }

    pub fn with_probe(mut self, probe: Arc<dyn IReachabilityProbe>) -> Self {
        self.validator = self.validator.with_probe(probe);
        self
    }

    pub fn session(&self) -> &ExplorationSession {
        &self.session
    }

    pub fn audit_log(&self) -> &AuditLog {
        &self.audit
    }

    /// A token that cancels this session from anywhere.
    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    pub fn report(&self) -> SessionReport {
        SessionReport::from_session(
            &self.session,
            self.audit.head(),
            ExplorationMetrics::from_audit_log(self.audit.entries()),
        )
    }

    /// Step until the session is terminal.
    ///
    /// Fatal errors (audit write failure, inconsistent decision) leave the
    /// session FAILED and are returned; [`Self::report`] still works after.
    pub async fn run(&mut self) -> Result<SessionReport, ScoutError> {
        let span = session_span!(self.session.entity_id(), self.session.id());
        async {
            info!(
                categories = self.session.categories().len(),
                max_cost = %self.session.budget().max_cost(),
                max_iterations = self.session.budget().max_iterations(),
                "exploration started"
            );
            while self.step().await? == SessionStatus::Running {}
            Ok(self.report())
        }
        .instrument(span)
        .await
    }

    /// Run at most one iteration and return the resulting status.
    ///
    /// A terminal session is left untouched.
    pub async fn step(&mut self) -> Result<SessionStatus, ScoutError> {
        if self.session.status().is_terminal() {
            return Ok(self.session.status());
        }
        let now = self.clock.now();
        self.session.mark_started(now);
        self.update_elapsed(now);

        if self.cancel.is_cancelled() {
            return Ok(self.finish(SessionStatus::Cancelled, None));
        }
        if !self.budget.may_continue(self.session.budget()) {
            return Ok(self.finish(SessionStatus::BudgetExhausted, None));
        }
        let Some(category) = self.selector.select(&self.session) else {
            info!("every category exhausted");
            return Ok(self.finish(SessionStatus::Saturated, None));
        };

        let iteration = self.session.iteration_count() + 1;
        let span = iteration_span!(iteration, category);
        self.iterate(category, iteration).instrument(span).await
    }

    async fn iterate(
        &mut self,
        category: Category,
        iteration: u32,
    ) -> Result<SessionStatus, ScoutError> {
        let fetch = retry::fetch_with_retry(
            self.adapter.as_ref(),
            self.session.entity(),
            category,
            &self.config,
            &self.cancel,
        )
        .await;
        if self.cancel.is_cancelled() {
            return Ok(self.finish(SessionStatus::Cancelled, None));
        }

        let now = self.clock.now();
        let (outcome, decision, source_url, reference_time) = match self.classify(category, &fetch, now) {
            Ok(classified) => classified,
            Err(e) => {
                error!(error = %e, "validator produced an inconsistent decision");
                self.finish(SessionStatus::Failed, Some(e.to_string()));
                return Err(e.into());
            }
        };

        let prior = self.temporal.prior(self.session.entity(), category, reference_time);
        let state = self.session.category_state(category);
        let breakdown = self.confidence.breakdown(
            self.session.confidence(),
            decision.classification(),
            &state,
            prior.multiplier,
        );
        let mut next_state = state;
        match outcome {
            EvidenceOutcome::NoEvidence => next_state.record_empty(),
            EvidenceOutcome::Evidence | EvidenceOutcome::Malformed => {
                next_state.record(decision.classification())
            }
        }

        let cost = self
            .budget
            .iteration_cost(outcome != EvidenceOutcome::NoEvidence, fetch.retries);
        let charged = match self
            .budget
            .charge(self.session.budget(), cost)
            .and_then(|b| self.budget.record_iteration(&b))
        {
            Ok(b) => b,
            Err(e) => {
                warn!(error = %e, "iteration would exceed the budget, nothing committed");
                return Ok(self.finish(SessionStatus::BudgetExhausted, None));
            }
        };

        let draft = AuditDraft {
            entity_id: self.session.entity_id().clone(),
            iteration,
            category,
            outcome,
            source_url,
            decision: decision.clone(),
            prior_confidence: breakdown.prior_confidence,
            temporal_multiplier: prior.multiplier,
            prior_level: prior.level,
            delta_applied: breakdown.delta_applied,
            new_confidence: breakdown.new_confidence,
            cost_incurred: cost,
            spent_cost: charged.spent(),
            timestamp: now,
        };
        if let Err(e) = self.audit.append(draft) {
            error!(error = %e, "audit append failed, session aborted");
            self.finish(SessionStatus::Failed, Some(e.to_string()));
            return Err(e.into());
        }

        self.session.commit(
            category,
            next_state,
            Confidence::new(breakdown.new_confidence),
            charged,
            &decision,
        );
        self.selector.mark_visited(category);
        self.saturation.observe(self.session.confidence().value());
        self.update_elapsed(self.clock.now());

        debug!(
            classification = %decision.classification(),
            prior = breakdown.prior_confidence,
            confidence = self.session.confidence().value(),
            cost = %cost,
            retries = fetch.retries,
            "iteration committed"
        );

        if self.session.confidence().is_max() && self.session.every_category_accepted() {
            return Ok(self.finish(SessionStatus::LockedIn, None));
        }
        if self.saturation.is_saturated() {
            return Ok(self.finish(SessionStatus::Saturated, None));
        }
        if !self.budget.may_continue(self.session.budget()) {
            return Ok(self.finish(SessionStatus::BudgetExhausted, None));
        }
        Ok(SessionStatus::Running)
    }

    /// Turn a fetch into a decision. Malformed candidates become a logged
    /// REJECT; only an inconsistent decision is an error.
    fn classify(
        &self,
        category: Category,
        fetch: &FetchOutcome,
        now: DateTime<Utc>,
    ) -> Result<(EvidenceOutcome, Decision, Option<String>, DateTime<Utc>), ValidationError> {
        let Some(candidate) = &fetch.candidate else {
            let detail = match &fetch.last_error {
                Some(e) => format!("adapter gave up: {e}"),
                None => "adapter had no evidence".to_string(),
            };
            return Ok((EvidenceOutcome::NoEvidence, Decision::no_evidence(detail), None, now));
        };

        let _span = validation_span!(candidate.source_url()).entered();
        let ctx = ValidationContext {
            entity: self.session.entity(),
            category,
            ledger: self.session.ledger(),
        };
        let source_url = Some(candidate.source_url().to_string());
        match self.validator.validate(candidate, &ctx) {
            Ok(decision) => Ok((
                EvidenceOutcome::Evidence,
                decision,
                source_url,
                candidate.retrieved_at(),
            )),
            Err(ValidationError::MalformedEvidence { reason, .. }) => Ok((
                EvidenceOutcome::Malformed,
                Decision::malformed(reason),
                source_url,
                candidate.retrieved_at(),
            )),
            Err(e) => Err(e),
        }
    }

    fn update_elapsed(&mut self, now: DateTime<Utc>) {
        let Some(started) = self.session.started_at() else {
            return;
        };
        let elapsed = (now - started).num_milliseconds().max(0) as f64 / 1000.0;
        let budget = self.budget.record_elapsed(self.session.budget(), elapsed);
        self.session.set_budget(budget);
    }

    fn finish(&mut self, status: SessionStatus, failure: Option<String>) -> SessionStatus {
        let status = self.session.terminate(status, self.clock.now(), failure);
        info!(
            status = %status,
            iterations = self.session.iteration_count(),
            confidence = self.session.confidence().value(),
            spent = %self.session.budget().spent(),
            "exploration finished"
        );
        status
    }
}
