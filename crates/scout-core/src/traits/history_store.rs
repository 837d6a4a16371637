use crate::models::{Category, ClusterId, EntityId, SignalHistory};

/// Read-only access to aggregated signal history.
///
/// Shared across concurrently running sessions, so implementations must be
/// safe for concurrent readers. There is no write path.
pub trait IHistoryStore: Send + Sync {
    fn entity_history(&self, entity: &EntityId, category: Category) -> Option<SignalHistory>;

    fn cluster_of(&self, entity: &EntityId) -> Option<ClusterId>;

    fn cluster_history(&self, cluster: &ClusterId, category: Category) -> Option<SignalHistory>;

    fn global_history(&self, category: Category) -> Option<SignalHistory>;
}
