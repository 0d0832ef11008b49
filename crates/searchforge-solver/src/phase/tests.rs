//! Tests for the construction and local search phases.

use super::*;
use crate::board::ConflictBoard;
use crate::termination::StepCountTermination;
use searchforge_test::{is_valid_n_queens, seeded_rng};

fn greedy_board(n: usize, seed: u64) -> ConflictBoard {
    let mut scope = SolverScope::with_rng(ConflictBoard::empty(n), seeded_rng(seed));
    scope.start_solving();
    GreedyConstructionPhase::new().solve(&mut scope);
    scope.into_parts().0
}

fn repair_scope(
    assignment: &[usize],
    limit: u64,
    seed: u64,
) -> SolverScope<rand_chacha::ChaCha8Rng> {
    let board = ConflictBoard::from_assignment(assignment).unwrap();
    let mut scope = SolverScope::with_rng(board, seeded_rng(seed));
    scope.start_solving();
    MinConflictsPhase::new(StepCountTermination::new(limit)).solve(&mut scope);
    scope
}

#[test]
fn test_greedy_fills_every_column() {
    for n in [0, 1, 4, 9, 30] {
        let board = greedy_board(n, n as u64);

        assert!(board.is_complete());
        assert_eq!(board.assignment().len(), n);
        assert!(board.assignment().iter().all(|&row| row < n));
        assert!(board.is_consistent());
    }
}

#[test]
fn test_greedy_picks_minimum_cost_rows() {
    let board = greedy_board(12, 4);

    // Replay the placements and check each one was a tied minimum.
    let mut replay = ConflictBoard::empty(12);
    for (col, &row) in board.assignment().iter().enumerate() {
        assert!(replay.min_conflict_rows(col).contains(&row), "column {col}");
        replay.place_queen(row);
    }
    assert_eq!(replay, board);
}

#[test]
fn test_greedy_records_phase_stats() {
    let mut scope = SolverScope::with_rng(ConflictBoard::empty(5), seeded_rng(0));
    scope.start_solving();
    GreedyConstructionPhase::new().solve(&mut scope);

    let stats = &scope.phase_stats()[0];
    assert_eq!(stats.phase_type, "GreedyConstruction");
    assert_eq!(stats.step_count, 5);
    assert_eq!(scope.total_step_count(), 5);
}

#[test]
fn test_repair_of_solved_board_takes_zero_steps() {
    let scope = repair_scope(&[1, 3, 0, 2], 1000, 0);

    assert_eq!(
        RepairOutcome::from_scope(&scope),
        RepairOutcome::Solved {
            assignment: vec![1, 3, 0, 2],
            steps: 0,
        }
    );
}

#[test]
fn test_unsolvable_boards_exhaust_exactly_the_budget() {
    for assignment in [vec![0, 0], vec![0, 1, 2]] {
        let scope = repair_scope(&assignment, 1000, 1);
        let outcome = RepairOutcome::from_scope(&scope);

        assert_eq!(outcome, RepairOutcome::Exhausted { steps: 1000 });
        assert_eq!(outcome.into_legacy(), (Vec::new(), -1));
        assert!(scope.board().is_consistent());
    }
}

#[test]
fn test_zero_budget_exhausts_before_checking_board() {
    let scope = repair_scope(&[1, 3, 0, 2], 0, 0);

    assert_eq!(
        RepairOutcome::from_scope(&scope),
        RepairOutcome::Exhausted { steps: 0 }
    );
}

#[test]
fn test_greedy_then_repair_four_queens() {
    for seed in 0..20 {
        let initial = greedy_board(4, seed);
        let scope = repair_scope(initial.assignment(), 1000, seed);
        let outcome = RepairOutcome::from_scope(&scope);

        assert!(outcome.is_solved(), "seed {seed}");
        assert!(outcome.steps() < 1000);
        assert!(is_valid_n_queens(outcome.assignment().unwrap()));
        assert!(scope.board().is_consistent());
    }
}

#[test]
fn test_repair_never_returns_conflicted_board() {
    for n in 4..=12 {
        for seed in 0..5 {
            let initial = greedy_board(n, seed);
            let scope = repair_scope(initial.assignment(), 1000, seed + 100);

            match RepairOutcome::from_scope(&scope) {
                RepairOutcome::Solved { assignment, steps } => {
                    assert!(is_valid_n_queens(&assignment), "n = {n}");
                    assert!(steps < 1000);
                }
                RepairOutcome::Exhausted { steps } => assert_eq!(steps, 1000),
            }
            assert!(scope.board().is_consistent());
        }
    }
}

#[test]
fn test_repair_stats() {
    let scope = repair_scope(&[0, 0, 0, 0], 1000, 3);
    let stats = &scope.phase_stats()[0];

    assert_eq!(stats.phase_type, "MinConflicts");
    assert_eq!(stats.step_count, scope.phase_step_count());
    assert_eq!(stats.samples_drawn - stats.samples_rejected, stats.step_count);
}

#[test]
fn test_incomplete_board_is_not_repaired() {
    let mut board = ConflictBoard::empty(4);
    board.place_queen(1);
    let mut scope = SolverScope::with_rng(board, seeded_rng(0));
    scope.start_solving();
    MinConflictsPhase::new(StepCountTermination::new(1000)).solve(&mut scope);

    assert!(scope.is_budget_exhausted());
    assert_eq!(scope.phase_step_count(), 0);
}
