use crate::{Grid, Position};

/// Backtracking Sudoku solver.
///
/// The search is deterministic: it always fills the first empty cell in
/// row-major order and tries candidate digits in ascending order, so the
/// first solution found for a given input is always the same one.
///
/// Callers must supply a grid whose givens are already mutually
/// consistent; run [`Grid::validate`] first if that is not known. The
/// solver does not re-check it.
#[derive(Debug, Default)]
pub struct Solver;

impl Solver {
    pub fn new() -> Self {
        Self
    }

    /// Solve the puzzle, returning the solved grid if one exists.
    ///
    /// The input grid is left untouched.
    pub fn solve(&self, grid: &Grid) -> Option<Grid> {
        let mut working = grid.clone();
        if self.solve_in_place(&mut working) {
            Some(working)
        } else {
            None
        }
    }

    /// Solve the puzzle by filling `grid` in place.
    ///
    /// Returns `true` with every cell filled on success. Returns `false`
    /// when no solution exists; every exploratory placement is undone on
    /// the way out, so the grid then equals its input exactly.
    /// "Unsolvable" is a normal outcome here, not an error.
    ///
    /// Recursion depth is bounded by the number of empty cells, at most 81.
    pub fn solve_in_place(&self, grid: &mut Grid) -> bool {
        // No empty cell left: every placement already passed the
        // validator, so the grid is solved.
        let Some(pos) = grid.first_empty() else {
            return true;
        };

        for digit in 1..=9 {
            if !grid.is_valid_placement(pos, digit) {
                continue;
            }

            grid.set(pos, Some(digit));
            if self.solve_in_place(grid) {
                return true;
            }
            // Dead end below this placement; undo it and try the next digit.
            grid.set(pos, None);
        }

        false
    }
}
