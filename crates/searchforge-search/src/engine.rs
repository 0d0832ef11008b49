//! Common search engine interface.

use std::fmt::Debug;

use searchforge_config::TrivialPathPolicy;
use searchforge_core::SearchProblem;
use tracing::{info, warn};

use crate::result::SearchResult;
use crate::stats::SearchStats;

/// A search algorithm over problems of type `P`.
///
/// Informed engines narrow `P` further (A* needs
/// [`Heuristic`](searchforge_core::Heuristic)).
pub trait SearchEngine<P: SearchProblem>: Debug {
    /// Runs one search from `problem.init_state()` to the designated goal.
    fn search(&mut self, problem: &P) -> SearchResult<P::State>;

    /// Returns the engine name used in log events.
    fn engine_name(&self) -> &'static str;
}

pub(crate) fn log_search_start<S: Debug>(engine: &'static str, init: &S, goal: Option<&S>) {
    info!(
        event = "search_start",
        engine = engine,
        init = ?init,
        goal = ?goal,
    );
}

pub(crate) fn log_search_end<S>(engine: &'static str, result: &SearchResult<S>) {
    info!(
        event = "search_end",
        engine = engine,
        solved = result.is_solved(),
        path_len = result.path.len() as u64,
        nodes_expanded = result.stats.nodes_expanded,
        nodes_generated = result.stats.nodes_generated,
        max_frontier_size = result.stats.max_frontier_size as u64,
        speed = result.stats.nodes_per_second(),
        duration_ms = result.stats.elapsed().as_millis() as u64,
    );
}

pub(crate) fn log_limit_reached(engine: &'static str, limit: Option<u64>) {
    warn!(
        event = "expansion_limit",
        engine = engine,
        limit = limit.unwrap_or_default(),
        "Expansion limit reached before the goal was found"
    );
}

/// Result for a search whose initial state already is the goal.
pub(crate) fn trivial_result<S: Clone>(
    policy: TrivialPathPolicy,
    init: &S,
    stats: SearchStats,
) -> SearchResult<S> {
    match policy {
        TrivialPathPolicy::SingleState => SearchResult::found(vec![init.clone()], stats),
        TrivialPathPolicy::Empty => SearchResult::not_found(stats),
    }
}
