//! InMemoryHistoryStore: DashMap-backed history for concurrent readers.

use dashmap::DashMap;
use scout_core::models::{Category, ClusterId, EntityId, SignalHistory};
use scout_core::traits::IHistoryStore;

/// History store held in memory.
///
/// Loading methods take `&self` so a store can be filled after being
/// wrapped in an `Arc`; sessions only ever read it.
#[derive(Debug, Default)]
pub struct InMemoryHistoryStore {
    entity: DashMap<(EntityId, Category), SignalHistory>,
    clusters: DashMap<EntityId, ClusterId>,
    cluster: DashMap<(ClusterId, Category), SignalHistory>,
    global: DashMap<Category, SignalHistory>,
}

impl InMemoryHistoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_entity(&self, entity: EntityId, category: Category, history: SignalHistory) {
        self.entity.insert((entity, category), history);
    }

    pub fn assign_cluster(&self, entity: EntityId, cluster: ClusterId) {
        self.clusters.insert(entity, cluster);
    }

    pub fn insert_cluster(&self, cluster: ClusterId, category: Category, history: SignalHistory) {
        self.cluster.insert((cluster, category), history);
    }

    pub fn insert_global(&self, category: Category, history: SignalHistory) {
        self.global.insert(category, history);
    }
}

impl IHistoryStore for InMemoryHistoryStore {
    fn entity_history(&self, entity: &EntityId, category: Category) -> Option<SignalHistory> {
        self.entity
            .get(&(entity.clone(), category))
            .map(|r| r.value().clone())
    }

    fn cluster_of(&self, entity: &EntityId) -> Option<ClusterId> {
        self.clusters.get(entity).map(|r| r.value().clone())
    }

    fn cluster_history(&self, cluster: &ClusterId, category: Category) -> Option<SignalHistory> {
        self.cluster
            .get(&(cluster.clone(), category))
            .map(|r| r.value().clone())
    }

    fn global_history(&self, category: Category) -> Option<SignalHistory> {
        self.global.get(&category).map(|r| r.value().clone())
    }
}
