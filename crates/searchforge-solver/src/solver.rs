//! N-Queens solver wiring the construction and local search phases.

use std::time::Duration;

use rand::Rng;
use searchforge_config::{SearchForgeConfig, DEFAULT_STEP_COUNT_LIMIT};
use searchforge_core::Result;
use tracing::info;

use crate::board::ConflictBoard;
use crate::phase::{GreedyConstructionPhase, MinConflictsPhase, Phase, RepairOutcome};
use crate::scope::SolverScope;
use crate::stats::PhaseStats;
use crate::termination::StepCountTermination;

/// Outcome of one solver run.
#[derive(Debug, Clone)]
pub struct NQueensResult {
    /// Board handed to the local search phase.
    pub initial: Vec<usize>,
    pub outcome: RepairOutcome,
    /// One entry per phase that ran, in order.
    pub phase_stats: Vec<PhaseStats>,
    pub elapsed: Duration,
}

impl NQueensResult {
    pub fn is_solved(&self) -> bool {
        self.outcome.is_solved()
    }

    /// Local search steps.
    pub fn steps(&self) -> u64 {
        self.outcome.steps()
    }
}

/// Greedy construction followed by min-conflicts repair.
///
/// The step cap comes from `[local_search] step_count_limit` and the RNG
/// seed from `random_seed`. The config is validated on construction.
///
/// # Example
///
/// ```
/// use searchforge_config::SearchForgeConfig;
/// use searchforge_solver::NQueensSolver;
///
/// let solver = NQueensSolver::new(SearchForgeConfig::default().with_random_seed(7)).unwrap();
/// let result = solver.solve(8);
///
/// if let Some(assignment) = result.outcome.assignment() {
///     assert_eq!(assignment.len(), 8);
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct NQueensSolver {
    config: SearchForgeConfig,
}

impl NQueensSolver {
    /// # Errors
    ///
    /// Returns [`Config`](searchforge_core::SearchForgeError::Config) if
    /// [`SearchForgeConfig::validate`] rejects `config`, e.g. a zero step
    /// limit or reproducible mode without a seed.
    pub fn new(config: SearchForgeConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &SearchForgeConfig {
        &self.config
    }

    /// Solves an `n x n` board with a scope-owned RNG.
    pub fn solve(&self, n: usize) -> NQueensResult {
        let scope = SolverScope::from_config(ConflictBoard::empty(n), &self.config);
        self.run(scope)
    }

    /// Solves an `n x n` board drawing from `rng`.
    pub fn solve_with_rng<R: Rng + ?Sized>(&self, n: usize, rng: &mut R) -> NQueensResult {
        self.run(SolverScope::with_rng(ConflictBoard::empty(n), rng))
    }

    /// Repairs a caller-supplied board; construction places nothing.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidAssignment`](searchforge_core::SearchForgeError::InvalidAssignment)
    /// if a row is out of range.
    pub fn repair(&self, assignment: &[usize]) -> Result<NQueensResult> {
        let board = ConflictBoard::from_assignment(assignment)?;
        Ok(self.run(SolverScope::from_config(board, &self.config)))
    }

    fn run<R: Rng>(&self, mut scope: SolverScope<R>) -> NQueensResult {
        let step_count_limit = self.config.local_search.step_count_limit;
        info!(
            event = "solve_start",
            board_size = scope.board().size() as u64,
            placed = scope.board().placed() as u64,
            step_count_limit = step_count_limit,
        );
        scope.start_solving();

        GreedyConstructionPhase::new().solve(&mut scope);
        let initial = scope.board().assignment().to_vec();

        MinConflictsPhase::new(StepCountTermination::new(step_count_limit)).solve(&mut scope);
        let outcome = RepairOutcome::from_scope(&scope);
        let elapsed = scope.elapsed().unwrap_or_default();

        info!(
            event = "solve_end",
            solved = outcome.is_solved(),
            steps = outcome.steps(),
            total_steps = scope.total_step_count(),
            duration_ms = elapsed.as_millis() as u64,
        );

        let (_, phase_stats) = scope.into_parts();
        NQueensResult {
            initial,
            outcome,
            phase_stats,
            elapsed,
        }
    }
}

/// Builds an `n`-queen assignment greedily, one column at a time.
///
/// # Example
///
/// ```
/// let mut rng = rand::rng();
/// let assignment = searchforge_solver::initialize_greedy_n_queens(6, &mut rng);
/// assert_eq!(assignment.len(), 6);
/// ```
pub fn initialize_greedy_n_queens<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Vec<usize> {
    let mut scope = SolverScope::with_rng(ConflictBoard::empty(n), rng);
    scope.start_solving();
    GreedyConstructionPhase::new().solve(&mut scope);
    let (board, _) = scope.into_parts();
    board.into_assignment()
}

/// Repairs `initialization` with min-conflicts under the default step cap.
///
/// # Errors
///
/// Returns [`InvalidAssignment`](searchforge_core::SearchForgeError::InvalidAssignment)
/// if a row is out of range.
pub fn min_conflicts_n_queens<R: Rng + ?Sized>(
    initialization: &[usize],
    rng: &mut R,
) -> Result<RepairOutcome> {
    let board = ConflictBoard::from_assignment(initialization)?;
    let mut scope = SolverScope::with_rng(board, rng);
    scope.start_solving();
    MinConflictsPhase::new(StepCountTermination::new(DEFAULT_STEP_COUNT_LIMIT)).solve(&mut scope);
    Ok(RepairOutcome::from_scope(&scope))
}

#[cfg(test)]
#[path = "solver_tests.rs"]
mod tests;
