//! Search outcome.

use crate::stats::SearchStats;

/// Path found by a search plus its counters.
///
/// An empty path means no solution, except for the trivial case under
/// [`TrivialPathPolicy::Empty`](searchforge_config::TrivialPathPolicy::Empty)
/// where the caller has to compare the initial state and the goal itself.
#[derive(Debug, Clone)]
pub struct SearchResult<S> {
    /// States from the initial state to the goal, inclusive.
    pub path: Vec<S>,
    /// Counters collected during the search.
    pub stats: SearchStats,
}

impl<S> SearchResult<S> {
    /// Creates a result for a found path.
    pub fn found(path: Vec<S>, mut stats: SearchStats) -> Self {
        stats.finish();
        Self { path, stats }
    }

    /// Creates a failure result with valid counters.
    pub fn not_found(mut stats: SearchStats) -> Self {
        stats.finish();
        Self {
            path: Vec::new(),
            stats,
        }
    }

    /// Returns true if the path is non-empty.
    pub fn is_solved(&self) -> bool {
        !self.path.is_empty()
    }

    /// Number of edges on the path.
    pub fn hops(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    pub fn nodes_expanded(&self) -> u64 {
        self.stats.nodes_expanded
    }

    pub fn max_frontier_size(&self) -> usize {
        self.stats.max_frontier_size
    }

    /// Splits into `(path, nodes_expanded, max_frontier_size)`.
    pub fn into_parts(self) -> (Vec<S>, u64, usize) {
        let nodes_expanded = self.stats.nodes_expanded;
        let max_frontier_size = self.stats.max_frontier_size;
        (self.path, nodes_expanded, max_frontier_size)
    }
}
