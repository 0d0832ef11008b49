//! Graph fixtures and shortest-path oracles.
//!
//! The oracles work on plain adjacency data and never touch the engines
//! under test.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap, VecDeque};

use rand::Rng;
use searchforge_core::{GraphProblem, SearchProblem, WeightedGraphProblem};

/// Ten-vertex ring-like graph with chords, searched from 9 to 0.
///
/// Every shortest path has 4 hops (e.g. `9-4-5-6-0` or `9-8-7-1-0`).
pub fn scenario_a_graph() -> GraphProblem {
    let vertices: Vec<usize> = (0..10).collect();
    let mut edges: Vec<(usize, usize)> = (0..9).map(|v| (v, v + 1)).collect();
    edges.extend([(0, 6), (1, 7), (2, 5), (9, 4)]);
    GraphProblem::new(&vertices, &edges, 9, vec![0]).expect("scenario A graph is valid")
}

/// Erdos-Renyi graph on `n` vertices with edge probability `p`, searched
/// from vertex 0 to vertex `n - 1`.
///
/// # Panics
///
/// Panics if `n` is zero.
pub fn random_graph<R: Rng + ?Sized>(n: usize, p: f64, rng: &mut R) -> GraphProblem {
    assert!(n > 0, "random graph needs at least one vertex");
    let vertices: Vec<usize> = (0..n).collect();
    let mut edges = Vec::new();
    for a in 0..n {
        for b in (a + 1)..n {
            if rng.random_bool(p) {
                edges.push((a, b));
            }
        }
    }
    GraphProblem::new(&vertices, &edges, 0, vec![n - 1]).expect("random graph is valid")
}

/// Random weighted graph on `n` vertices with weights in `1..=max_weight`.
///
/// # Panics
///
/// Panics if `n` or `max_weight` is zero.
pub fn random_weighted_graph<R: Rng + ?Sized>(
    n: usize,
    p: f64,
    max_weight: u64,
    rng: &mut R,
) -> WeightedGraphProblem {
    assert!(n > 0, "random graph needs at least one vertex");
    let vertices: Vec<usize> = (0..n).collect();
    let mut edges = Vec::new();
    for a in 0..n {
        for b in (a + 1)..n {
            if rng.random_bool(p) {
                edges.push((a, b, rng.random_range(1..=max_weight)));
            }
        }
    }
    WeightedGraphProblem::new(&vertices, &edges, 0, vec![n - 1])
        .expect("random weighted graph is valid")
}

/// Hop distance from the initial state to the designated goal, or None if
/// unreachable.
pub fn bfs_distance(problem: &GraphProblem) -> Option<usize> {
    let source = *problem.init_state();
    let goal = *problem.goal_state()?;
    let mut distance = HashMap::from([(source, 0usize)]);
    let mut queue = VecDeque::from([source]);
    while let Some(vertex) = queue.pop_front() {
        let d = distance[&vertex];
        if vertex == goal {
            return Some(d);
        }
        for &next in problem.neighbors(vertex) {
            distance.entry(next).or_insert_with(|| {
                queue.push_back(next);
                d + 1
            });
        }
    }
    None
}

/// Dijkstra distance from the initial state to the designated goal.
pub fn dijkstra_distance(problem: &WeightedGraphProblem) -> Option<u64> {
    let source = *problem.init_state();
    let goal = *problem.goal_state()?;
    let mut best: HashMap<usize, u64> = HashMap::from([(source, 0)]);
    let mut heap = BinaryHeap::from([Reverse((0u64, source))]);
    while let Some(Reverse((d, vertex))) = heap.pop() {
        if vertex == goal {
            return Some(d);
        }
        if best.get(&vertex).is_some_and(|&b| d > b) {
            continue;
        }
        for edge in problem.edges(vertex) {
            let candidate = d + edge.weight;
            if best.get(&edge.to).map_or(true, |&b| candidate < b) {
                best.insert(edge.to, candidate);
                heap.push(Reverse((candidate, edge.to)));
            }
        }
    }
    None
}
