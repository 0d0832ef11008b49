//! Breadth-first search.
//!
//! FIFO expansion with the goal test applied when a successor is generated.
//! On unit-cost graphs the returned path has the minimum number of hops, so
//! this engine doubles as the correctness oracle for the others.

use std::collections::{HashSet, VecDeque};

use searchforge_config::{SearchConfig, SearchForgeConfig};
use searchforge_core::{NodeArena, SearchProblem};

use crate::engine::{log_limit_reached, log_search_end, log_search_start, trivial_result};
use crate::result::SearchResult;
use crate::stats::SearchStats;
use crate::SearchEngine;

/// Breadth-first search engine.
///
/// # Example
///
/// ```
/// use searchforge_core::GraphProblem;
/// use searchforge_search::{BreadthFirstSearch, SearchEngine};
///
/// let problem = GraphProblem::new(&[0, 1, 2, 3], &[(0, 1), (1, 2), (2, 3), (0, 2)], 0, vec![3]).unwrap();
/// let result = BreadthFirstSearch::default().search(&problem);
///
/// assert_eq!(result.path, vec![0, 2, 3]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct BreadthFirstSearch {
    config: SearchConfig,
}

impl BreadthFirstSearch {
    /// Creates a new breadth-first search engine.
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    /// Creates an engine from the `[search]` section of a full config.
    pub fn from_config(config: &SearchForgeConfig) -> Self {
        Self::new(config.search.clone())
    }
}

impl<P: SearchProblem> SearchEngine<P> for BreadthFirstSearch {
    fn search(&mut self, problem: &P) -> SearchResult<P::State> {
        let engine = <Self as SearchEngine<P>>::engine_name(self);
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
            let result = trivial_result(self.config.trivial_path, init, stats);
            log_search_end(engine, &result);
            return result;
        }

        let mut arena = NodeArena::new();
        let root = arena.root(init.clone());
        let mut frontier = VecDeque::from([root]);
        // Enqueued or expanded: a state enters at most once.
        let mut reached: HashSet<P::State> = HashSet::from([init.clone()]);

        while !frontier.is_empty() {
            stats.observe_frontier(frontier.len());
            if stats.limit_reached(self.config.expansion_limit) {
                log_limit_reached(engine, self.config.expansion_limit);
                break;
            }
            let Some(node) = frontier.pop_front() else {
                break;
            };
            stats.record_expansion();

            for action in problem.actions(arena.state(node)) {
                let child = arena.child_node(problem, node, action);
                stats.record_generated();
                let state = arena.state(child);
                if reached.contains(state) {
                    continue;
                }
                if state == goal {
                    let result = SearchResult::found(arena.path_to(child), stats);
                    log_search_end(engine, &result);
                    return result;
                }
                reached.insert(state.clone());
                frontier.push_back(child);
            }
        }

        let result = SearchResult::not_found(stats);
        log_search_end(engine, &result);
        result
    }

    fn engine_name(&self) -> &'static str {
        "BreadthFirst"
    }
}

/// Runs breadth-first search with the default configuration.
pub fn breadth_first_search<P: SearchProblem>(problem: &P) -> SearchResult<P::State> {
    BreadthFirstSearch::default().search(problem)
}
