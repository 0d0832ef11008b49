//! Bidirectional breadth-first search.
//!
//! Two frontiers grow from the source and from the goal. Each outer
//! iteration drains the whole current source layer, then the whole current
//! goal layer. Expanding complete layers is what makes the first meeting
//! point lie on a shortest path; draining one side past its layer boundary
//! can report a longer path.
//!
//! The goal side expands with the same action enumeration as the source
//! side, so the problem's actions must be reversible (undirected graphs,
//! grids).

use std::collections::{HashMap, VecDeque};

use searchforge_config::{SearchConfig, SearchForgeConfig};
use searchforge_core::{NodeArena, NodeId, SearchProblem};
use tracing::debug;

use crate::engine::{log_limit_reached, log_search_end, log_search_start, trivial_result};
use crate::result::SearchResult;
use crate::stats::SearchStats;
use crate::SearchEngine;

/// Bidirectional search engine.
///
/// # Example
///
/// ```
/// use searchforge_core::GraphProblem;
/// use searchforge_search::bidirectional_search;
///
/// let problem = GraphProblem::new(&[0, 1, 2, 3, 4], &[(0, 1), (1, 2), (2, 3), (3, 4)], 0, vec![4]).unwrap();
/// let result = bidirectional_search(&problem);
///
/// assert_eq!(result.path, vec![0, 1, 2, 3, 4]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct BidirectionalSearch {
    config: SearchConfig,
}

impl BidirectionalSearch {
    /// Creates a new bidirectional search engine.
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    /// Creates an engine from the `[search]` section of a full config.
    pub fn from_config(config: &SearchForgeConfig) -> Self {
        Self::new(config.search.clone())
    }
}

/// Frontier, arena and reached table rooted at one endpoint.
struct Side<P: SearchProblem> {
    arena: NodeArena<P::State, P::Action, P::Cost>,
    frontier: VecDeque<NodeId>,
    // Every state this side discovered, mapped to its node.
    reached: HashMap<P::State, NodeId>,
}

impl<P: SearchProblem> Side<P> {
    fn new(root_state: &P::State) -> Self {
        let mut arena = NodeArena::new();
        let root = arena.root(root_state.clone());
        Self {
            arena,
            frontier: VecDeque::from([root]),
            reached: HashMap::from([(root_state.clone(), root)]),
        }
    }
}

enum LayerOutcome<S> {
    /// Path from this side's root to the other side's root.
    Met(Vec<S>),
    Exhausted,
    LimitReached,
}

/// Expands every node that is in `side`'s frontier when the call starts.
fn expand_layer<P: SearchProblem>(
    problem: &P,
    side: &mut Side<P>,
    other: &Side<P>,
    stats: &mut SearchStats,
    limit: Option<u64>,
) -> LayerOutcome<P::State> {
    let layer_size = side.frontier.len();
    for _ in 0..layer_size {
        if stats.limit_reached(limit) {
            return LayerOutcome::LimitReached;
        }
        let Some(node) = side.frontier.pop_front() else {
            break;
        };
        stats.record_expansion();

        for action in problem.actions(side.arena.state(node)) {
            let child = side.arena.child_node(problem, node, action);
            stats.record_generated();
            let state = side.arena.state(child);
            if side.reached.contains_key(state) {
                continue;
            }
            if let Some(&meeting) = other.reached.get(state) {
                debug!(event = "frontiers_met", state = ?state);
                let mut path = side.arena.path_to(child);
                let mut other_half = other.arena.path_to(meeting);
                // Both halves end with the meeting state.
                other_half.pop();
                path.extend(other_half.into_iter().rev());
                return LayerOutcome::Met(path);
            }
            side.reached.insert(state.clone(), child);
            side.frontier.push_back(child);
        }
    }
    LayerOutcome::Exhausted
}

impl<P: SearchProblem> SearchEngine<P> for BidirectionalSearch {
    fn search(&mut self, problem: &P) -> SearchResult<P::State> {
        let engine = <Self as SearchEngine<P>>::engine_name(self);
        let limit = self.config.expansion_limit;
        let mut stats = SearchStats::default();
        stats.start();

        let source = problem.init_state();
        let destination = problem.goal_state();
        log_search_start(engine, source, destination);

        let Some(destination) = destination else {
            let result = SearchResult::not_found(stats);
            log_search_end(engine, &result);
            return result;
        };
        if source == destination {
            let result = trivial_result(self.config.trivial_path, source, stats);
            log_search_end(engine, &result);
            return result;
        }

        let mut forward = Side::<P>::new(source);
        let mut backward = Side::<P>::new(destination);

        let path = loop {
            if forward.frontier.is_empty() || backward.frontier.is_empty() {
                break None;
            }
            stats.observe_frontier(forward.frontier.len().max(backward.frontier.len()));

            match expand_layer(problem, &mut forward, &backward, &mut stats, limit) {
                LayerOutcome::Met(path) => break Some(path),
                LayerOutcome::LimitReached => {
                    log_limit_reached(engine, limit);
                    break None;
                }
                LayerOutcome::Exhausted => {}
            }

            match expand_layer(problem, &mut backward, &forward, &mut stats, limit) {
                LayerOutcome::Met(mut path) => {
                    // Built from the destination towards the source.
                    path.reverse();
                    break Some(path);
                }
                LayerOutcome::LimitReached => {
                    log_limit_reached(engine, limit);
                    break None;
                }
                LayerOutcome::Exhausted => {}
            }
        };

        let result = match path {
            Some(path) => SearchResult::found(path, stats),
            None => SearchResult::not_found(stats),
        };
        log_search_end(engine, &result);
        result
    }

    fn engine_name(&self) -> &'static str {
        "Bidirectional"
    }
}

/// Runs bidirectional search with the default configuration.
pub fn bidirectional_search<P: SearchProblem>(problem: &P) -> SearchResult<P::State> {
    BidirectionalSearch::default().search(problem)
}
