//! Search statistics.
//!
//! Stack-allocated counters for one search call.

use std::time::{Duration, Instant};

/// Counters collected while a search runs.
///
/// # Example
///
/// ```
/// use searchforge_search::SearchStats;
///
/// let mut stats = SearchStats::default();
/// stats.start();
/// stats.observe_frontier(3);
/// stats.record_expansion();
/// stats.observe_frontier(2);
/// stats.finish();
///
/// assert_eq!(stats.nodes_expanded, 1);
/// assert_eq!(stats.max_frontier_size, 3);
/// ```
#[derive(Debug, Default, Clone)]
pub struct SearchStats {
    start_time: Option<Instant>,
    elapsed: Option<Duration>,
    /// Nodes whose successors were generated.
    pub nodes_expanded: u64,
    /// Child nodes created.
    pub nodes_generated: u64,
    /// Outdated frontier entries discarded on pop.
    pub stale_skipped: u64,
    /// Largest frontier observed.
    pub max_frontier_size: usize,
}

impl SearchStats {
    /// Marks the start of searching.
    pub fn start(&mut self) {
        self.start_time = Some(Instant::now());
        self.elapsed = None;
    }

    /// Freezes the elapsed time.
    pub fn finish(&mut self) {
        self.elapsed = Some(self.running_time());
    }

    /// Returns the elapsed time, frozen once [`finish`](Self::finish) ran.
    pub fn elapsed(&self) -> Duration {
        self.elapsed.unwrap_or_else(|| self.running_time())
    }

    fn running_time(&self) -> Duration {
        self.start_time.map(|t| t.elapsed()).unwrap_or_default()
    }

    /// Records a node expansion.
    pub fn record_expansion(&mut self) {
        self.nodes_expanded += 1;
    }

    /// Records a generated child node.
    pub fn record_generated(&mut self) {
        self.nodes_generated += 1;
    }

    /// Records a stale frontier entry.
    pub fn record_stale(&mut self) {
        self.stale_skipped += 1;
    }

    /// Updates the frontier high-water mark.
    pub fn observe_frontier(&mut self, size: usize) {
        self.max_frontier_size = self.max_frontier_size.max(size);
    }

    /// Returns true once `limit` expansions were made.
    pub fn limit_reached(&self, limit: Option<u64>) -> bool {
        limit.is_some_and(|limit| self.nodes_expanded >= limit)
    }

    /// Returns the expansion rate.
    pub fn nodes_per_second(&self) -> u64 {
        let secs = self.elapsed().as_secs_f64();
        if secs > 0.0 {
            (self.nodes_expanded as f64 / secs) as u64
        } else {
            0
        }
    }
}
