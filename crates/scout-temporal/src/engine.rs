//! TemporalPriorService: fallback-chain resolution of the temporal multiplier.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use scout_core::config::TemporalConfig;
use scout_core::constants::{TEMPORAL_MULTIPLIER_MAX, TEMPORAL_MULTIPLIER_MIN};
use scout_core::models::{Category, EntityProfile, PriorLevel, SignalHistory, TemporalPrior};
use scout_core::traits::IHistoryStore;
use tracing::trace;

use crate::factors::{momentum, recurrence, seasonality};
use crate::store::InMemoryHistoryStore;

/// Resolves temporal priors from a shared, read-only history store.
pub struct TemporalPriorService {
    store: Arc<dyn IHistoryStore>,
    config: TemporalConfig,
}

impl TemporalPriorService {
    pub fn new(store: Arc<dyn IHistoryStore>, config: TemporalConfig) -> Self {
        Self { store, config }
    }

    /// A service with no history: every prior is neutral.
    pub fn neutral() -> Self {
        Self::new(Arc::new(InMemoryHistoryStore::new()), TemporalConfig::default())
    }

    pub fn config(&self) -> &TemporalConfig {
        &self.config
    }

    /// Temporal prior for `category` of `entity`, evaluated at `reference_time`.
    ///
    /// Tries entity history, then the entity's cluster (from the profile,
    /// else the store), then the global history. A level is used only with
    /// at least `min_samples` confirmed signals.
    pub fn prior(
        &self,
        entity: &EntityProfile,
        category: Category,
        reference_time: DateTime<Utc>,
    ) -> TemporalPrior {
        let cluster = entity
            .cluster_id
            .clone()
            .or_else(|| self.store.cluster_of(&entity.id));

        let resolved = self
            .usable(self.store.entity_history(&entity.id, category))
            .map(|h| (PriorLevel::Entity, h))
            .or_else(|| {
                cluster
                    .as_ref()
                    .and_then(|c| self.usable(self.store.cluster_history(c, category)))
                    .map(|h| (PriorLevel::Cluster, h))
            })
            .or_else(|| {
                self.usable(self.store.global_history(category))
                    .map(|h| (PriorLevel::Global, h))
            });

        let prior = match resolved {
            Some((level, history)) => evaluate(&history, level, reference_time),
            None => TemporalPrior::neutral(),
        };
        trace!(
            entity = %entity.id,
            category = %category,
            level = ?prior.level,
            multiplier = prior.multiplier,
            "temporal prior resolved"
        );
        prior
    }

    fn usable(&self, history: Option<SignalHistory>) -> Option<SignalHistory> {
        history.filter(|h| h.sample_size() >= self.config.min_samples)
    }
}

impl Default for TemporalPriorService {
    fn default() -> Self {
        Self::neutral()
    }
}

/// Combine the three factors for one history level.
fn evaluate(history: &SignalHistory, level: PriorLevel, reference_time: DateTime<Utc>) -> TemporalPrior {
    let seasonality = seasonality::calculate(history, reference_time);
    let recurrence = recurrence::calculate(history, reference_time);
    let momentum = momentum::calculate(history);
    let product = seasonality * recurrence * momentum;

    if !product.is_finite() {
        return TemporalPrior::neutral();
    }
    TemporalPrior {
        multiplier: product.clamp(TEMPORAL_MULTIPLIER_MIN, TEMPORAL_MULTIPLIER_MAX),
        level,
        seasonality,
        recurrence,
        momentum,
    }
}
