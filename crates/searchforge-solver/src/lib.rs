//! SearchForge N-Queens Solver
//!
//! This crate provides the N-Queens local search solver:
//! - [`ConflictBoard`] with incrementally maintained row and diagonal counters
//! - Greedy construction phase
//! - Min-conflicts local search phase
//! - Solver scope, termination conditions and phase statistics
//! - [`NQueensSolver`] wiring the phases from a [`SearchForgeConfig`](searchforge_config::SearchForgeConfig)

pub mod board;
pub mod phase;
pub mod scope;
pub mod solver;
pub mod stats;
pub mod termination;

pub use board::ConflictBoard;
pub use phase::{GreedyConstructionPhase, MinConflictsPhase, Phase, RepairOutcome};
pub use scope::SolverScope;
pub use solver::{initialize_greedy_n_queens, min_conflicts_n_queens, NQueensResult, NQueensSolver};
pub use stats::PhaseStats;
pub use termination::{StepCountTermination, Termination};
