//! Undirected unit-cost graph problem.

use std::collections::HashMap;

use super::{ActionList, SearchProblem};
use crate::error::{Result, SearchForgeError};

/// Undirected graph whose states are vertex ids and whose actions are the
/// neighbor to move to. Every edge costs 1.
///
/// # Example
///
/// ```
/// use searchforge_core::{GraphProblem, SearchProblem};
///
/// let problem = GraphProblem::new(&[0, 1, 2], &[(0, 1), (1, 2)], 0, vec![2]).unwrap();
/// assert_eq!(problem.actions(&1).as_slice(), &[0, 2]);
/// assert!(problem.check_graph_solution(&[0, 1, 2]));
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GraphProblem {
    adjacency: HashMap<usize, Vec<usize>>,
    init_state: usize,
    goal_states: Vec<usize>,
}

impl GraphProblem {
    /// Builds a graph problem from vertex and edge lists.
    ///
    /// # Errors
    ///
    /// Returns [`SearchForgeError::InvalidProblem`] if an edge endpoint, the
    /// initial state or a goal state is not a vertex, or if no goal is given.
    pub fn new(
        vertices: &[usize],
        edges: &[(usize, usize)],
        init_state: usize,
        goal_states: Vec<usize>,
    ) -> Result<Self> {
        let mut adjacency: HashMap<usize, Vec<usize>> =
            vertices.iter().map(|&v| (v, Vec::new())).collect();

        for &(a, b) in edges {
            if !adjacency.contains_key(&a) || !adjacency.contains_key(&b) {
                return Err(SearchForgeError::InvalidProblem(format!(
                    "edge ({a}, {b}) references an unknown vertex"
                )));
            }
            if let Some(neighbors) = adjacency.get_mut(&a) {
                neighbors.push(b);
            }
            if a != b {
                if let Some(neighbors) = adjacency.get_mut(&b) {
                    neighbors.push(a);
                }
            }
        }

        validate_endpoints(&adjacency, init_state, &goal_states)?;

        Ok(Self {
            adjacency,
            init_state,
            goal_states,
        })
    }

    /// Returns the number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns the neighbors of `vertex` in edge insertion order.
    pub fn neighbors(&self, vertex: usize) -> &[usize] {
        self.adjacency
            .get(&vertex)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Returns a copy of this problem with different endpoints.
    pub fn with_endpoints(&self, init_state: usize, goal_states: Vec<usize>) -> Result<Self> {
        validate_endpoints(&self.adjacency, init_state, &goal_states)?;
        Ok(Self {
            adjacency: self.adjacency.clone(),
            init_state,
            goal_states,
        })
    }

    /// Validates a path through the graph, see [`SearchProblem::check_solution`].
    pub fn check_graph_solution(&self, path: &[usize]) -> bool {
        self.check_solution(path)
    }
}

fn validate_endpoints(
    adjacency: &HashMap<usize, Vec<usize>>,
    init_state: usize,
    goal_states: &[usize],
) -> Result<()> {
    if goal_states.is_empty() {
        return Err(SearchForgeError::InvalidProblem(
            "at least one goal state is required".to_string(),
        ));
    }
    if let Some(unknown) = std::iter::once(&init_state)
        .chain(goal_states)
        .find(|v| !adjacency.contains_key(v))
    {
        return Err(SearchForgeError::InvalidProblem(format!(
            "state {unknown} is not a vertex"
        )));
    }
    Ok(())
}

impl SearchProblem for GraphProblem {
    type State = usize;
    type Action = usize;
    type Cost = u64;

    fn init_state(&self) -> &usize {
        &self.init_state
    }

    fn goal_states(&self) -> &[usize] {
        &self.goal_states
    }

    fn actions(&self, state: &usize) -> ActionList<usize> {
        self.neighbors(*state).iter().copied().collect()
    }

    fn successor(&self, _state: &usize, action: &usize) -> (usize, u64) {
        (*action, 1)
    }

    fn step_cost(&self, from: &usize, to: &usize) -> Option<u64> {
        self.neighbors(*from).contains(to).then_some(1)
    }
}
