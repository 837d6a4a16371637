//! Category selection: batch round-robin favouring under-explored categories.

use std::collections::BTreeSet;

use scout_core::models::Category;

use crate::session::ExplorationSession;

/// Tracks which categories have had a turn in the current batch.
///
/// Within a batch every live category is visited once; among the unvisited
/// ones the lowest `accepted_count` goes first, ties broken by the fixed
/// category order. A category is exhausted, and skipped for good, once its
/// empty streak reaches `max_consecutive_empty`.
#[derive(Debug, Clone)]
pub struct CategorySelector {
    visited: BTreeSet<Category>,
    max_consecutive_empty: u32,
}

impl CategorySelector {
    pub fn new(max_consecutive_empty: u32) -> Self {
        Self {
            visited: BTreeSet::new(),
            max_consecutive_empty,
        }
    }

    pub fn is_exhausted(&self, session: &ExplorationSession, category: Category) -> bool {
        session.category_state(category).consecutive_empty >= self.max_consecutive_empty
    }

    /// Next category to explore, or `None` when every category is exhausted.
    pub fn select(&mut self, session: &ExplorationSession) -> Option<Category> {
        let live: Vec<Category> = session
            .categories()
            .iter()
            .copied()
            .filter(|c| !self.is_exhausted(session, *c))
            .collect();
        if live.is_empty() {
            return None;
        }

        if live.iter().all(|c| self.visited.contains(c)) {
            self.visited.clear();
        }

        live.into_iter()
            .filter(|c| !self.visited.contains(c))
            .min_by_key(|c| (session.category_state(*c).accepted_count, c.ordinal()))
    }

    /// Record that `category` had its turn.
    pub fn mark_visited(&mut self, category: Category) {
        self.visited.insert(category);
    }
}
