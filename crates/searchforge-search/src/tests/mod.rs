//! Tests for the search engines.
//!
//! Breadth-first search and Dijkstra act as oracles; the fixtures come from
//! `searchforge-test`.

mod astar;
mod events;
mod rrt;

use searchforge_config::{SearchConfig, TrivialPathPolicy};
use searchforge_core::GraphProblem;

/// Path graph `0 - 1 - ... - (n-1)` searched from 0 to `n - 1`.
fn line_graph(n: usize) -> GraphProblem {
    let vertices: Vec<usize> = (0..n).collect();
    let edges: Vec<(usize, usize)> = (1..n).map(|v| (v - 1, v)).collect();
    GraphProblem::new(&vertices, &edges, 0, vec![n - 1]).unwrap()
}

/// Two components `{0, 1, 2}` and `{3, 4}` searched from 0 to 4.
fn disconnected_graph() -> GraphProblem {
    GraphProblem::new(&[0, 1, 2, 3, 4], &[(0, 1), (1, 2), (3, 4)], 0, vec![4]).unwrap()
}

fn limited(limit: u64) -> SearchConfig {
    SearchConfig {
        expansion_limit: Some(limit),
        ..SearchConfig::default()
    }
}

fn with_policy(trivial_path: TrivialPathPolicy) -> SearchConfig {
    SearchConfig {
        trivial_path,
        ..SearchConfig::default()
    }
}
