//! Undirected graph with non-negative integer edge weights.

use std::collections::HashMap;

use super::{ActionList, Heuristic, SearchProblem};
use crate::error::{Result, SearchForgeError};

/// Traversal of one weighted edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeightedEdge {
    pub to: usize,
    pub weight: u64,
}

/// Weighted undirected graph problem.
///
/// Its [`Heuristic`] is the zero estimate, which is trivially admissible.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeightedGraphProblem {
    adjacency: HashMap<usize, Vec<WeightedEdge>>,
    init_state: usize,
    goal_states: Vec<usize>,
}

impl WeightedGraphProblem {
    /// Builds a weighted graph problem from `(a, b, weight)` edges.
    ///
    /// # Errors
    ///
    /// Returns [`SearchForgeError::InvalidProblem`] for unknown vertices or an
    /// empty goal list.
    pub fn new(
        vertices: &[usize],
        edges: &[(usize, usize, u64)],
        init_state: usize,
        goal_states: Vec<usize>,
    ) -> Result<Self> {
        let mut adjacency: HashMap<usize, Vec<WeightedEdge>> =
            vertices.iter().map(|&v| (v, Vec::new())).collect();

        for &(a, b, weight) in edges {
            if !adjacency.contains_key(&a) || !adjacency.contains_key(&b) {
                return Err(SearchForgeError::InvalidProblem(format!(
                    "edge ({a}, {b}) references an unknown vertex"
                )));
            }
            if let Some(out) = adjacency.get_mut(&a) {
                out.push(WeightedEdge { to: b, weight });
            }
            if a != b {
                if let Some(out) = adjacency.get_mut(&b) {
                    out.push(WeightedEdge { to: a, weight });
                }
            }
        }

        if goal_states.is_empty() {
            return Err(SearchForgeError::InvalidProblem(
                "at least one goal state is required".to_string(),
            ));
        }
        if let Some(unknown) = std::iter::once(&init_state)
            .chain(&goal_states)
            .find(|v| !adjacency.contains_key(v))
        {
            return Err(SearchForgeError::InvalidProblem(format!(
                "state {unknown} is not a vertex"
            )));
        }

        Ok(Self {
            adjacency,
            init_state,
            goal_states,
        })
    }

    /// Returns the outgoing edges of `vertex`.
    pub fn edges(&self, vertex: usize) -> &[WeightedEdge] {
        self.adjacency
            .get(&vertex)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

impl SearchProblem for WeightedGraphProblem {
    type State = usize;
    type Action = WeightedEdge;
    type Cost = u64;

    fn init_state(&self) -> &usize {
        &self.init_state
    }

    fn goal_states(&self) -> &[usize] {
        &self.goal_states
    }

    fn actions(&self, state: &usize) -> ActionList<WeightedEdge> {
        self.edges(*state).iter().copied().collect()
    }

    fn successor(&self, _state: &usize, action: &WeightedEdge) -> (usize, u64) {
        (action.to, action.weight)
    }
}

impl Heuristic for WeightedGraphProblem {
    fn heuristic(&self, _state: &usize, _goal: &usize) -> u64 {
        0
    }
}
