//! Core Sudoku engine: a 9x9 grid model and a backtracking solver.
//!
//! The grid holds 0 for empty cells and 1-9 for placed digits. The solver
//! fills empty cells by recursive backtracking, reporting "no solution" as
//! a boolean outcome rather than an error.

mod grid;
mod solver;

pub use grid::{Grid, GridError, Position, UnitRef, GRID_SIZE};
pub use solver::Solver;
