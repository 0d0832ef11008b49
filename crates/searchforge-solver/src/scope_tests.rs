//! Tests for the solver scope.

use super::*;
use rand::Rng;
use searchforge_test::seeded_rng;

fn board() -> ConflictBoard {
    ConflictBoard::from_assignment(&[0, 1, 2, 3]).unwrap()
}

#[test]
fn test_step_counters() {
    let mut scope = SolverScope::with_seed(board(), 1);
    scope.start_solving();

    assert_eq!(scope.increment_step_count(), 1);
    assert_eq!(scope.increment_step_count(), 2);
    scope.start_phase();
    scope.increment_step_count();

    assert_eq!(scope.total_step_count(), 3);
    assert_eq!(scope.phase_step_count(), 1);
    assert!(scope.elapsed().is_some());
}

#[test]
fn test_same_seed_same_stream() {
    let mut a = SolverScope::with_seed(board(), 99);
    let mut b = SolverScope::with_seed(board(), 99);

    let xs: Vec<u32> = (0..8).map(|_| a.rng().random()).collect();
    let ys: Vec<u32> = (0..8).map(|_| b.rng().random()).collect();
    assert_eq!(xs, ys);
}

#[test]
fn test_from_config_uses_seed() {
    let config = SearchForgeConfig::default().with_random_seed(5);
    let mut a = SolverScope::from_config(board(), &config);
    let mut b = SolverScope::with_seed(board(), 5);

    assert_eq!(a.rng().random::<u64>(), b.rng().random::<u64>());
}

#[test]
fn test_borrowed_rng() {
    let mut rng = seeded_rng(3);
    let mut scope = SolverScope::with_rng(board(), &mut rng);
    let (board, rng) = scope.board_and_rng();
    let col = rng.random_range(0..board.size());
    board.move_queen(col, 0);

    assert!(scope.board().is_consistent());
}

#[test]
fn test_budget_flag_resets_on_start() {
    let mut scope = SolverScope::with_seed(board(), 1);
    scope.mark_budget_exhausted();
    assert!(scope.is_budget_exhausted());

    scope.start_solving();
    assert!(!scope.is_budget_exhausted());
}
