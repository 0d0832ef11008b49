//! Greedy construction phase.

use rand::Rng;
use tracing::info;

use super::Phase;
use crate::scope::SolverScope;
use crate::stats::PhaseStats;

/// Fills the empty columns of the board from left to right.
///
/// Each queen goes to a row with the lowest sum of row and diagonal counters
/// left by the queens already placed, ties broken uniformly at random. On an
/// empty board every row ties, so column 0 gets a uniform random row. The
/// result may still contain conflicts.
#[derive(Debug, Clone, Default)]
pub struct GreedyConstructionPhase;

impl GreedyConstructionPhase {
    pub fn new() -> Self {
        Self
    }
}

impl<R: Rng> Phase<R> for GreedyConstructionPhase {
    fn solve(&mut self, solver_scope: &mut SolverScope<R>) {
        let phase_type = <Self as Phase<R>>::phase_type_name(self);
        let mut stats = PhaseStats::new(solver_scope.next_phase_index(), phase_type);
        solver_scope.start_phase();

        info!(
            event = "phase_start",
            phase = "Construction Heuristic",
            phase_index = stats.phase_index,
            board_size = solver_scope.board().size() as u64,
        );

        loop {
            let (board, rng) = solver_scope.board_and_rng();
            if board.is_complete() {
                break;
            }
            let col = board.placed();
            let candidates = board.min_conflict_rows(col);
            let row = candidates[rng.random_range(0..candidates.len())];
            board.place_queen(row);

            solver_scope.increment_step_count();
            stats.record_step();
        }

        stats.finish(solver_scope.board().attacking_pairs());
        info!(
            event = "phase_end",
            phase = "Construction Heuristic",
            phase_index = stats.phase_index,
            duration_ms = stats.elapsed_ms(),
            steps = stats.step_count,
            speed = stats.steps_per_second(),
            conflicts = stats.final_conflicts,
        );
        solver_scope.record_phase(stats);
    }

    fn phase_type_name(&self) -> &'static str {
        "GreedyConstruction"
    }
}
