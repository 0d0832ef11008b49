//! N-Queens checks computed from scratch.
//!
//! An assignment maps column `c` to row `assignment[c]`.

/// Counts queen pairs sharing a row or a diagonal.
pub fn count_attacking_pairs(assignment: &[usize]) -> usize {
    let mut conflicts = 0;
    for i in 0..assignment.len() {
        for j in (i + 1)..assignment.len() {
            let (row_i, row_j) = (assignment[i], assignment[j]);
            if row_i == row_j || row_i.abs_diff(row_j) == j - i {
                conflicts += 1;
            }
        }
    }
    conflicts
}

/// Returns true if every row is in range and no two queens attack.
pub fn is_valid_n_queens(assignment: &[usize]) -> bool {
    let n = assignment.len();
    assignment.iter().all(|&row| row < n) && count_attacking_pairs(assignment) == 0
}
