//! Solver phases.
//!
//! - [`GreedyConstructionPhase`]: places one queen per column, left to right
//! - [`MinConflictsPhase`]: repairs a full board by moving conflicted queens

mod construction;
mod localsearch;

use std::fmt::Debug;

use rand::Rng;

use crate::scope::SolverScope;

pub use construction::GreedyConstructionPhase;
pub use localsearch::{MinConflictsPhase, RepairOutcome};

/// A phase of the solving process.
///
/// Phases run in sequence against the board held by the solver scope.
pub trait Phase<R: Rng>: Debug {
    /// Executes this phase.
    fn solve(&mut self, solver_scope: &mut SolverScope<R>);

    /// Returns the name of this phase type.
    fn phase_type_name(&self) -> &'static str;
}

#[cfg(test)]
mod tests;
