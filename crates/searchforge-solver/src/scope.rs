//! Solver-level scope.

use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use searchforge_config::SearchForgeConfig;

use crate::board::ConflictBoard;
use crate::stats::PhaseStats;

/// Working board, random source and counters shared by the phases of one
/// solve run.
///
/// Generic over the RNG so callers can lend their own (`&mut R` is an RNG
/// too); solver-owned scopes use [`StdRng`].
#[derive(Debug)]
pub struct SolverScope<R: Rng = StdRng> {
    board: ConflictBoard,
    rng: R,
    start_time: Option<Instant>,
    total_step_count: u64,
    phase_step_count: u64,
    budget_exhausted: bool,
    phase_stats: Vec<PhaseStats>,
}

impl SolverScope<StdRng> {
    pub fn new(board: ConflictBoard) -> Self {
        Self::with_rng(board, StdRng::from_os_rng())
    }

    pub fn with_seed(board: ConflictBoard, seed: u64) -> Self {
        Self::with_rng(board, StdRng::seed_from_u64(seed))
    }

    /// Seeds from `random_seed` when set, otherwise from the OS.
    pub fn from_config(board: ConflictBoard, config: &SearchForgeConfig) -> Self {
        match config.random_seed {
            Some(seed) => Self::with_seed(board, seed),
            None => Self::new(board),
        }
    }
}

impl<R: Rng> SolverScope<R> {
    pub fn with_rng(board: ConflictBoard, rng: R) -> Self {
        Self {
            board,
            rng,
            start_time: None,
            total_step_count: 0,
            phase_step_count: 0,
            budget_exhausted: false,
            phase_stats: Vec::new(),
        }
    }

    pub fn start_solving(&mut self) {
        self.start_time = Some(Instant::now());
        self.total_step_count = 0;
        self.phase_step_count = 0;
        self.budget_exhausted = false;
    }

    /// Resets the per-phase step counter and the budget flag.
    pub fn start_phase(&mut self) {
        self.phase_step_count = 0;
        self.budget_exhausted = false;
    }

    pub fn elapsed(&self) -> Option<Duration> {
        self.start_time.map(|t| t.elapsed())
    }

    pub fn board(&self) -> &ConflictBoard {
        &self.board
    }

    pub fn rng(&mut self) -> &mut R {
        &mut self.rng
    }

    /// Borrows the board and the RNG at once.
    pub fn board_and_rng(&mut self) -> (&mut ConflictBoard, &mut R) {
        (&mut self.board, &mut self.rng)
    }

    pub fn increment_step_count(&mut self) -> u64 {
        self.total_step_count += 1;
        self.phase_step_count += 1;
        self.total_step_count
    }

    pub fn total_step_count(&self) -> u64 {
        self.total_step_count
    }

    pub fn phase_step_count(&self) -> u64 {
        self.phase_step_count
    }

    /// Marks that a phase stopped on its termination condition before
    /// reaching a conflict-free board.
    pub fn mark_budget_exhausted(&mut self) {
        self.budget_exhausted = true;
    }

    pub fn is_budget_exhausted(&self) -> bool {
        self.budget_exhausted
    }

    pub fn record_phase(&mut self, stats: PhaseStats) {
        self.phase_stats.push(stats);
    }

    pub fn phase_stats(&self) -> &[PhaseStats] {
        &self.phase_stats
    }

    /// Index for the next phase to run.
    pub fn next_phase_index(&self) -> usize {
        self.phase_stats.len()
    }

    pub fn into_parts(self) -> (ConflictBoard, Vec<PhaseStats>) {
        (self.board, self.phase_stats)
    }
}

#[cfg(test)]
#[path = "scope_tests.rs"]
mod tests;
