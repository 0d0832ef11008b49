//! 4-connected occupancy grid problem.

use rand::Rng;

use super::{ActionList, Heuristic, SearchProblem};
use crate::error::{Result, SearchForgeError};

/// Move on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GridAction {
    Up,
    Down,
    Left,
    Right,
}

impl GridAction {
    pub const ALL: [GridAction; 4] = [
        GridAction::Up,
        GridAction::Down,
        GridAction::Left,
        GridAction::Right,
    ];

    fn delta(self) -> (isize, isize) {
        match self {
            GridAction::Up => (-1, 0),
            GridAction::Down => (1, 0),
            GridAction::Left => (0, -1),
            GridAction::Right => (0, 1),
        }
    }
}

/// Grid of free and occupied cells.
///
/// States are linear cell indices `row * cols + col`. Moving between two
/// free, edge-adjacent cells costs 1. The Manhattan distance is the
/// admissible heuristic.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridProblem {
    rows: usize,
    cols: usize,
    occupied: Vec<bool>,
    init_state: usize,
    goal_states: Vec<usize>,
}

impl GridProblem {
    /// Builds a grid problem from a row-major occupancy map.
    ///
    /// # Errors
    ///
    /// Returns [`SearchForgeError::InvalidProblem`] if the map size does not
    /// match `rows * cols`, an endpoint is out of range or occupied, or no
    /// goal is given.
    pub fn new(
        rows: usize,
        cols: usize,
        occupied: Vec<bool>,
        init_state: usize,
        goal_states: Vec<usize>,
    ) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(SearchForgeError::InvalidProblem(
                "grid must have at least one row and one column".to_string(),
            ));
        }
        if occupied.len() != rows * cols {
            return Err(SearchForgeError::InvalidProblem(format!(
                "occupancy map has {} cells, expected {}",
                occupied.len(),
                rows * cols
            )));
        }
        if goal_states.is_empty() {
            return Err(SearchForgeError::InvalidProblem(
                "at least one goal state is required".to_string(),
            ));
        }
        for &cell in std::iter::once(&init_state).chain(&goal_states) {
            match occupied.get(cell) {
                None => {
                    return Err(SearchForgeError::InvalidProblem(format!(
                        "cell {cell} is outside the {rows}x{cols} grid"
                    )))
                }
                Some(true) => {
                    return Err(SearchForgeError::InvalidProblem(format!(
                        "cell {cell} is occupied"
                    )))
                }
                Some(false) => {}
            }
        }

        Ok(Self {
            rows,
            cols,
            occupied,
            init_state,
            goal_states,
        })
    }

    /// Generates a random grid where each cell is occupied with probability
    /// `p_occ`. The top-left cell is the start and the bottom-right cell is
    /// the goal; both are always free.
    pub fn random<R: Rng + ?Sized>(p_occ: f64, rows: usize, cols: usize, rng: &mut R) -> Result<Self> {
        if !(0.0..=1.0).contains(&p_occ) {
            return Err(SearchForgeError::InvalidProblem(format!(
                "occupancy probability {p_occ} is not in [0, 1]"
            )));
        }
        let cells = rows * cols;
        let mut occupied: Vec<bool> = (0..cells).map(|_| rng.random_bool(p_occ)).collect();
        let goal = cells.saturating_sub(1);
        if let Some(start) = occupied.first_mut() {
            *start = false;
        }
        if let Some(end) = occupied.last_mut() {
            *end = false;
        }
        Self::new(rows, cols, occupied, 0, vec![goal])
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Converts `(row, col)` to a state index.
    pub fn index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    /// Converts a state index to `(row, col)`.
    pub fn coords(&self, state: usize) -> (usize, usize) {
        (state / self.cols, state % self.cols)
    }

    /// Returns true if the cell is occupied or outside the grid.
    pub fn is_blocked(&self, state: usize) -> bool {
        self.occupied.get(state).copied().unwrap_or(true)
    }

    fn neighbor(&self, state: usize, action: GridAction) -> Option<usize> {
        let (row, col) = self.coords(state);
        let (dr, dc) = action.delta();
        let row = row.checked_add_signed(dr)?;
        let col = col.checked_add_signed(dc)?;
        if row >= self.rows || col >= self.cols {
            return None;
        }
        let next = self.index(row, col);
        (!self.is_blocked(next)).then_some(next)
    }

    /// Manhattan distance between two cells.
    pub fn manhattan(&self, a: usize, b: usize) -> u64 {
        let (ar, ac) = self.coords(a);
        let (br, bc) = self.coords(b);
        (ar.abs_diff(br) + ac.abs_diff(bc)) as u64
    }
}

impl SearchProblem for GridProblem {
    type State = usize;
    type Action = GridAction;
    type Cost = u64;

    fn init_state(&self) -> &usize {
        &self.init_state
    }

    fn goal_states(&self) -> &[usize] {
        &self.goal_states
    }

    fn actions(&self, state: &usize) -> ActionList<GridAction> {
        if self.is_blocked(*state) {
            return ActionList::new();
        }
        GridAction::ALL
            .into_iter()
            .filter(|&action| self.neighbor(*state, action).is_some())
            .collect()
    }

    fn successor(&self, state: &usize, action: &GridAction) -> (usize, u64) {
        // Actions come from `actions`, so the neighbor exists.
        let next = self.neighbor(*state, *action).unwrap_or(*state);
        (next, 1)
    }

    fn step_cost(&self, from: &usize, to: &usize) -> Option<u64> {
        (self.manhattan(*from, *to) == 1 && !self.is_blocked(*from) && !self.is_blocked(*to))
            .then_some(1)
    }
}

impl Heuristic for GridProblem {
    fn heuristic(&self, state: &usize, goal: &usize) -> u64 {
        self.manhattan(*state, *goal)
    }
}
