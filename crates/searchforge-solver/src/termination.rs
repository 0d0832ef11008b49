//! Termination conditions for solver phases.

use std::fmt::Debug;

use rand::Rng;

use crate::scope::SolverScope;

/// Decides when a phase stops stepping.
pub trait Termination<R: Rng>: Debug {
    /// Returns true if the phase should stop.
    fn is_terminated(&self, solver_scope: &SolverScope<R>) -> bool;
}

/// Terminates after a number of steps in the current phase.
///
/// # Example
///
/// ```
/// use searchforge_solver::StepCountTermination;
///
/// // Min-conflicts cap
/// let term = StepCountTermination::new(1000);
/// assert_eq!(term.limit(), 1000);
/// ```
#[derive(Debug, Clone)]
pub struct StepCountTermination {
    limit: u64,
}

impl StepCountTermination {
    pub fn new(limit: u64) -> Self {
        Self { limit }
    }

    pub fn limit(&self) -> u64 {
        self.limit
    }
}

impl<R: Rng> Termination<R> for StepCountTermination {
    fn is_terminated(&self, solver_scope: &SolverScope<R>) -> bool {
        solver_scope.phase_step_count() >= self.limit
    }
}
