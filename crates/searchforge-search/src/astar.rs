//! A* search.
//!
//! Best-first search ordered by `f = g + h`. The best known `g` per state is
//! kept in a table; a successor is queued when its state is new or reached
//! with a strictly lower `g`, even if the state was already dequeued once.
//! Outdated heap entries are left in place and discarded when popped
//! (lazy deletion); such pops do not count as expansions.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use searchforge_config::{SearchConfig, SearchForgeConfig};
use searchforge_core::{Heuristic, NodeArena, NodeId};
use tracing::trace;

use crate::engine::{log_limit_reached, log_search_end, log_search_start};
use crate::result::SearchResult;
use crate::stats::SearchStats;
use crate::SearchEngine;

/// Heap entry ordered by ascending `f`, then by insertion order.
#[derive(Debug)]
struct FrontierEntry<C> {
    f: C,
    sequence: u64,
    node: NodeId,
}

impl<C: Ord> Ord for FrontierEntry<C> {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is a max-heap; smaller f and earlier sequence win.
        other
            .f
            .cmp(&self.f)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

impl<C: Ord> PartialOrd for FrontierEntry<C> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<C: Ord> PartialEq for FrontierEntry<C> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<C: Ord> Eq for FrontierEntry<C> {}

/// A* search engine.
///
/// Optimal when the problem's heuristic is admissible. The trivial case
/// (initial state is the goal) always yields `[init_state]` with zero
/// expansions.
///
/// # Example
///
/// ```
/// use searchforge_core::GridProblem;
/// use searchforge_search::{AStarSearch, SearchEngine};
///
/// // . . .
/// // # # .
/// // . . .
/// let occupied = vec![false, false, false, true, true, false, false, false, false];
/// let problem = GridProblem::new(3, 3, occupied, 0, vec![6]).unwrap();
/// let result = AStarSearch::default().search(&problem);
///
/// assert_eq!(result.path, vec![0, 1, 2, 5, 8, 7, 6]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct AStarSearch {
    config: SearchConfig,
}

impl AStarSearch {
    /// Creates a new A* engine.
    ///
    /// Only `expansion_limit` is read from `config`.
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    /// Creates an engine from the `[search]` section of a full config.
    pub fn from_config(config: &SearchForgeConfig) -> Self {
        Self::new(config.search.clone())
    }
}

impl<P: Heuristic> SearchEngine<P> for AStarSearch {
    fn search(&mut self, problem: &P) -> SearchResult<P::State> {
        let engine = <Self as SearchEngine<P>>::engine_name(self);
        let limit = self.config.expansion_limit;
        let mut stats = SearchStats::default();
        stats.start();

        let init = problem.init_state();
        let goal = problem.goal_state();
        log_search_start(engine, init, goal);

        let Some(goal) = goal else {
            let result = SearchResult::not_found(stats);
            log_search_end(engine, &result);
            return result;
        };
        if init == goal {
            let result = SearchResult::found(vec![init.clone()], stats);
            log_search_end(engine, &result);
            return result;
        }

        let mut arena = NodeArena::new();
        let root = arena.root(init.clone());
        let mut best_cost: HashMap<P::State, P::Cost> = HashMap::new();
        best_cost.insert(init.clone(), arena.get(root).path_cost());

        let mut frontier = BinaryHeap::new();
        let mut sequence = 0u64;
        frontier.push(FrontierEntry {
            f: problem.heuristic(init, goal),
            sequence,
            node: root,
        });

        loop {
            stats.observe_frontier(frontier.len());
            let Some(entry) = frontier.pop() else {
                break;
            };

            let node = arena.get(entry.node);
            let is_stale = best_cost
                .get(node.state())
                .is_some_and(|&best| node.path_cost() > best);
            if is_stale {
                trace!(event = "stale_pop", state = ?node.state());
                stats.record_stale();
                continue;
            }
            if node.state() == goal {
                let result = SearchResult::found(arena.path_to(entry.node), stats);
                log_search_end(engine, &result);
                return result;
            }
            if stats.limit_reached(limit) {
                log_limit_reached(engine, limit);
                break;
            }
            stats.record_expansion();

            for action in problem.actions(arena.state(entry.node)) {
                let child = arena.child_node(problem, entry.node, action);
                stats.record_generated();
                let child_node = arena.get(child);
                let g = child_node.path_cost();
                let improves = best_cost
                    .get(child_node.state())
                    .map_or(true, |&best| best > g);
                if improves {
                    let f = g + problem.heuristic(child_node.state(), goal);
                    best_cost.insert(child_node.state().clone(), g);
                    sequence += 1;
                    frontier.push(FrontierEntry {
                        f,
                        sequence,
                        node: child,
                    });
                }
            }
        }

        let result = SearchResult::not_found(stats);
        log_search_end(engine, &result);
        result
    }

    fn engine_name(&self) -> &'static str {
        "AStar"
    }
}

/// Runs A* with the default configuration.
pub fn a_star_search<P: Heuristic>(problem: &P) -> SearchResult<P::State> {
    AStarSearch::default().search(problem)
}
