//! N-Queens board with incremental conflict counters.

use searchforge_core::{Result, SearchForgeError};
use smallvec::SmallVec;

/// Rows tied for the fewest conflicts in one column.
pub type RowCandidates = SmallVec<[usize; 8]>;

/// One queen per column plus occupancy counters for rows and both diagonal
/// families.
///
/// `rows[r]` counts queens in row `r`, `diag1[row - col + n]` and
/// `diag2[row + col]` count queens on each diagonal. The counters always
/// match the placed queens; [`place_queen`](Self::place_queen) and
/// [`move_queen`](Self::move_queen) update them in place instead of
/// recounting.
///
/// # Example
///
/// ```
/// use searchforge_solver::ConflictBoard;
///
/// let board = ConflictBoard::from_assignment(&[1, 3, 0, 2]).unwrap();
/// assert!(board.is_conflict_free());
///
/// let board = ConflictBoard::from_assignment(&[0, 3, 1, 2]).unwrap();
/// assert_eq!(board.attacking_pairs(), 1);
/// assert!(board.is_conflicted(2));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConflictBoard {
    n: usize,
    assignment: Vec<usize>,
    rows: Vec<u32>,
    diag1: Vec<u32>,
    diag2: Vec<u32>,
}

impl ConflictBoard {
    /// Creates an `n x n` board with no queens placed.
    pub fn empty(n: usize) -> Self {
        Self {
            n,
            assignment: Vec::with_capacity(n),
            rows: vec![0; n],
            diag1: vec![0; 2 * n],
            diag2: vec![0; 2 * n],
        }
    }

    /// Builds a full board where column `c` holds a queen in row
    /// `assignment[c]`. Counters are filled by one scan.
    ///
    /// # Errors
    ///
    /// Returns [`SearchForgeError::InvalidAssignment`] if a row is `>= n`.
    pub fn from_assignment(assignment: &[usize]) -> Result<Self> {
        let n = assignment.len();
        let mut board = Self::empty(n);
        for (col, &row) in assignment.iter().enumerate() {
            if row >= n {
                return Err(SearchForgeError::InvalidAssignment(format!(
                    "column {col} holds row {row}, board size is {n}"
                )));
            }
            board.place_queen(row);
        }
        Ok(board)
    }

    /// Board size `n`.
    pub fn size(&self) -> usize {
        self.n
    }

    /// Rows of the placed queens, indexed by column.
    pub fn assignment(&self) -> &[usize] {
        &self.assignment
    }

    pub fn into_assignment(self) -> Vec<usize> {
        self.assignment
    }

    /// Number of columns holding a queen.
    pub fn placed(&self) -> usize {
        self.assignment.len()
    }

    pub fn is_complete(&self) -> bool {
        self.assignment.len() == self.n
    }

    /// Row of the queen in `col`, if placed.
    pub fn queen(&self, col: usize) -> Option<usize> {
        self.assignment.get(col).copied()
    }

    /// Places a queen in the next empty column.
    ///
    /// The caller keeps `row < n` and does not overfill the board.
    pub fn place_queen(&mut self, row: usize) {
        let col = self.assignment.len();
        debug_assert!(col < self.n && row < self.n);
        self.assignment.push(row);
        self.add(row, col);
    }

    /// Moves the queen in `col` to `new_row`.
    pub fn move_queen(&mut self, col: usize, new_row: usize) {
        let old_row = self.assignment[col];
        self.remove(old_row, col);
        self.assignment[col] = new_row;
        self.add(new_row, col);
    }

    /// Sum of the counters a queen in `(row, col)` would land on.
    ///
    /// If `col` already holds a queen in `row`, that queen counts itself on
    /// all three lines.
    pub fn placement_cost(&self, row: usize, col: usize) -> u32 {
        self.rows[row] + self.diag1[row + self.n - col] + self.diag2[row + col]
    }

    /// Rows of `col` with the lowest [`placement_cost`](Self::placement_cost),
    /// in ascending order.
    pub fn min_conflict_rows(&self, col: usize) -> RowCandidates {
        let mut best = u32::MAX;
        let mut candidates = RowCandidates::new();
        for row in 0..self.n {
            let cost = self.placement_cost(row, col);
            if cost < best {
                best = cost;
                candidates.clear();
            }
            if cost == best {
                candidates.push(row);
            }
        }
        candidates
    }

    /// Returns true if the queen in `col` shares a row or diagonal with
    /// another queen. False for empty columns.
    pub fn is_conflicted(&self, col: usize) -> bool {
        self.queen(col).is_some_and(|row| {
            self.rows[row] > 1
                || self.diag1[row + self.n - col] > 1
                || self.diag2[row + col] > 1
        })
    }

    /// Returns true if no row or diagonal holds more than one queen.
    pub fn is_conflict_free(&self) -> bool {
        self.rows
            .iter()
            .chain(&self.diag1)
            .chain(&self.diag2)
            .all(|&count| count <= 1)
    }

    /// Number of queen pairs attacking each other.
    pub fn attacking_pairs(&self) -> u64 {
        self.rows
            .iter()
            .chain(&self.diag1)
            .chain(&self.diag2)
            .map(|&count| {
                let count = u64::from(count);
                count * count.saturating_sub(1) / 2
            })
            .sum()
    }

    /// Columns whose queen is in conflict.
    pub fn conflicted_columns(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.placed()).filter(|&col| self.is_conflicted(col))
    }

    /// Recounts every counter from the assignment and compares.
    pub fn is_consistent(&self) -> bool {
        let mut fresh = Self::empty(self.n);
        for &row in &self.assignment {
            if row >= self.n {
                return false;
            }
            fresh.place_queen(row);
        }
        fresh == *self
    }

    fn add(&mut self, row: usize, col: usize) {
        self.rows[row] += 1;
        self.diag1[row + self.n - col] += 1;
        self.diag2[row + col] += 1;
    }

    fn remove(&mut self, row: usize, col: usize) {
        self.rows[row] -= 1;
        self.diag1[row + self.n - col] -= 1;
        self.diag2[row + col] -= 1;
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod tests;
