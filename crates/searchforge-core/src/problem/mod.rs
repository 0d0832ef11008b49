//! State-space problem abstraction.
//!
//! Every search algorithm consumes a [`SearchProblem`]: an initial state, a
//! list of goal states (the first is the designated goal), an action
//! enumeration and a successor function. Informed algorithms additionally
//! require the [`Heuristic`] capability.

mod graph;
mod grid;
mod weighted;


use std::fmt::Debug;
use std::hash::Hash;
use std::ops::Add;

use num_traits::Zero;
use smallvec::SmallVec;

pub use graph::GraphProblem;
pub use grid::{GridAction, GridProblem};
pub use weighted::{WeightedEdge, WeightedGraphProblem};

/// Path cost type.
///
/// Costs are non-negative, totally ordered and additive. Any unsigned
/// integer satisfies this.
pub trait Cost: Copy + Ord + Debug + Zero + Add<Output = Self> {}

impl<T> Cost for T where T: Copy + Ord + Debug + Zero + Add<Output = T> {}

/// Action list returned by [`SearchProblem::actions`].
///
/// Most problems have a small branching factor, so the list stays inline.
pub type ActionList<A> = SmallVec<[A; 8]>;

/// A deterministic state-space search problem.
pub trait SearchProblem {
    /// State identity. Only equality and hashing are assumed.
    type State: Clone + Eq + Hash + Debug;

    /// Problem-defined action (edge) type.
    type Action: Clone + Debug;

    /// Path cost type.
    type Cost: Cost;

    /// Returns the initial state.
    fn init_state(&self) -> &Self::State;

    /// Returns all goal states.
    fn goal_states(&self) -> &[Self::State];

    /// Returns the designated goal (the first goal state).
    fn goal_state(&self) -> Option<&Self::State> {
        self.goal_states().first()
    }

    /// Enumerates the legal actions from `state`. Empty if terminal.
    fn actions(&self, state: &Self::State) -> ActionList<Self::Action>;

    /// Returns the successor of `state` under `action` with the step cost.
    fn successor(&self, state: &Self::State, action: &Self::Action) -> (Self::State, Self::Cost);

    /// Returns the cheapest single-action cost from `from` to `to`, or None
    /// if no action connects them.
    fn step_cost(&self, from: &Self::State, to: &Self::State) -> Option<Self::Cost> {
        self.actions(from)
            .iter()
            .map(|action| self.successor(from, action))
            .filter(|(next, _)| next == to)
            .map(|(_, cost)| cost)
            .min()
    }

    /// Validates a path: it starts at the initial state, ends at a goal state
    /// and every consecutive pair is connected by an action.
    fn check_solution(&self, path: &[Self::State]) -> bool {
        let (Some(first), Some(last)) = (path.first(), path.last()) else {
            return false;
        };
        first == self.init_state()
            && self.goal_states().contains(last)
            && path
                .windows(2)
                .all(|pair| self.step_cost(&pair[0], &pair[1]).is_some())
    }
}

/// Heuristic capability required by informed search.
///
/// For optimality the estimate must be admissible: it never exceeds the
/// true remaining cost from `state` to `goal`.
pub trait Heuristic: SearchProblem {
    fn heuristic(&self, state: &Self::State, goal: &Self::State) -> Self::Cost;
}

/// Wraps a problem with the zero heuristic.
///
/// A* over `UniformCost` is uniform-cost search.
#[derive(Debug, Clone, Copy)]
pub struct UniformCost<'a, P: ?Sized> {
    inner: &'a P,
}

impl<'a, P: ?Sized> UniformCost<'a, P> {
    pub fn new(inner: &'a P) -> Self {
        Self { inner }
    }
}

impl<P: SearchProblem + ?Sized> SearchProblem for UniformCost<'_, P> {
    type State = P::State;
    type Action = P::Action;
    type Cost = P::Cost;

    fn init_state(&self) -> &Self::State {
        self.inner.init_state()
    }

    fn goal_states(&self) -> &[Self::State] {
        self.inner.goal_states()
    }

    fn actions(&self, state: &Self::State) -> ActionList<Self::Action> {
        self.inner.actions(state)
    }

    fn successor(&self, state: &Self::State, action: &Self::Action) -> (Self::State, Self::Cost) {
        self.inner.successor(state, action)
    }
}

impl<P: SearchProblem + ?Sized> Heuristic for UniformCost<'_, P> {
    fn heuristic(&self, _state: &Self::State, _goal: &Self::State) -> Self::Cost {
        P::Cost::zero()
    }
}

/// Sums the cheapest step costs along `path`.
///
/// Returns None if two consecutive states are not connected. An empty or
/// single-state path costs zero.
pub fn path_cost<P: SearchProblem + ?Sized>(problem: &P, path: &[P::State]) -> Option<P::Cost> {
    path.windows(2).try_fold(P::Cost::zero(), |total, pair| {
        problem
            .step_cost(&pair[0], &pair[1])
            .map(|step| total + step)
    })
}
