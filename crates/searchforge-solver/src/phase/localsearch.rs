//! Min-conflicts local search phase.

use rand::Rng;
use tracing::{debug, info, warn};

use super::Phase;
use crate::scope::SolverScope;
use crate::stats::PhaseStats;
use crate::termination::Termination;

/// Result of a min-conflicts repair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepairOutcome {
    /// Conflict-free board reached after `steps` queen moves.
    Solved { assignment: Vec<usize>, steps: u64 },
    /// The termination condition fired first.
    Exhausted { steps: u64 },
}

impl RepairOutcome {
    /// Reads the outcome of the last local search phase from `solver_scope`.
    pub fn from_scope<R: Rng>(solver_scope: &SolverScope<R>) -> Self {
        let steps = solver_scope.phase_step_count();
        if solver_scope.is_budget_exhausted() {
            Self::Exhausted { steps }
        } else {
            Self::Solved {
                assignment: solver_scope.board().assignment().to_vec(),
                steps,
            }
        }
    }

    pub fn is_solved(&self) -> bool {
        matches!(self, Self::Solved { .. })
    }

    pub fn steps(&self) -> u64 {
        match self {
            Self::Solved { steps, .. } | Self::Exhausted { steps } => *steps,
        }
    }

    pub fn assignment(&self) -> Option<&[usize]> {
        match self {
            Self::Solved { assignment, .. } => Some(assignment),
            Self::Exhausted { .. } => None,
        }
    }

    /// Tuple form: `(assignment, steps)` on success, `([], -1)` on failure.
    pub fn into_legacy(self) -> (Vec<usize>, i64) {
        match self {
            Self::Solved { assignment, steps } => {
                (assignment, i64::try_from(steps).unwrap_or(i64::MAX))
            }
            Self::Exhausted { .. } => (Vec::new(), -1),
        }
    }
}

/// Min-conflicts repair of a full board.
///
/// Each step draws random columns until one holds a conflicted queen, then
/// moves that queen to a row with the lowest counter sum (the queen still
/// counts itself at its current row), ties broken uniformly at random. A
/// move may create new conflicts; there is no backtracking.
///
/// Every iteration checks the termination condition first and the board
/// second, so a board that only becomes conflict-free on the last allowed
/// step is still reported as [`RepairOutcome::Exhausted`].
#[derive(Debug, Clone)]
pub struct MinConflictsPhase<T> {
    termination: T,
}

impl<T> MinConflictsPhase<T> {
    pub fn new(termination: T) -> Self {
        Self { termination }
    }
}

impl<R: Rng, T: Termination<R>> Phase<R> for MinConflictsPhase<T> {
    fn solve(&mut self, solver_scope: &mut SolverScope<R>) {
        let phase_type = <Self as Phase<R>>::phase_type_name(self);
        let mut stats = PhaseStats::new(solver_scope.next_phase_index(), phase_type);
        solver_scope.start_phase();

        info!(
            event = "phase_start",
            phase = "Min Conflicts",
            phase_index = stats.phase_index,
            conflicts = solver_scope.board().attacking_pairs(),
        );

        if !solver_scope.board().is_complete() {
            warn!(
                event = "incomplete_board",
                placed = solver_scope.board().placed() as u64,
                size = solver_scope.board().size() as u64,
                "Min-conflicts needs one queen per column"
            );
            solver_scope.mark_budget_exhausted();
        } else {
            loop {
                if self.termination.is_terminated(solver_scope) {
                    solver_scope.mark_budget_exhausted();
                    break;
                }
                if solver_scope.board().is_conflict_free() {
                    break;
                }

                let (board, rng) = solver_scope.board_and_rng();
                let n = board.size();
                let col = loop {
                    let col = rng.random_range(0..n);
                    let conflicted = board.is_conflicted(col);
                    stats.record_sample(conflicted);
                    if conflicted {
                        break col;
                    }
                };
                let candidates = board.min_conflict_rows(col);
                let row = candidates[rng.random_range(0..candidates.len())];
                board.move_queen(col, row);

                let step = solver_scope.increment_step_count();
                stats.record_step();
                debug!(event = "step", step = step, column = col as u64, row = row as u64);
            }
        }

        stats.finish(solver_scope.board().attacking_pairs());
        if solver_scope.is_budget_exhausted() {
            warn!(
                event = "phase_end",
                phase = "Min Conflicts",
                phase_index = stats.phase_index,
                duration_ms = stats.elapsed_ms(),
                steps = stats.step_count,
                conflicts = stats.final_conflicts,
                "Step budget exhausted before reaching a conflict-free board"
            );
        } else {
            info!(
                event = "phase_end",
                phase = "Min Conflicts",
                phase_index = stats.phase_index,
                duration_ms = stats.elapsed_ms(),
                steps = stats.step_count,
                speed = stats.steps_per_second(),
                conflicts = stats.final_conflicts,
            );
        }
        solver_scope.record_phase(stats);
    }

    fn phase_type_name(&self) -> &'static str {
        "MinConflicts"
    }
}
