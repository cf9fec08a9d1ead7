use clap::Parser;
use std::process::ExitCode;
use sudoku_core::{Grid, Solver};

/// The puzzle solved when no argument is given.
const EXAMPLE: [[u8; 9]; 9] = [
    [7, 0, 2, 0, 5, 0, 6, 0, 0],
    [0, 0, 0, 0, 0, 3, 0, 0, 0],
    [1, 0, 0, 0, 0, 9, 5, 0, 0],
    [8, 0, 0, 0, 0, 0, 0, 9, 0],
    [0, 4, 3, 0, 0, 0, 7, 5, 0],
    [0, 9, 0, 0, 0, 0, 0, 0, 8],
    [0, 0, 9, 7, 0, 0, 0, 0, 5],
    [0, 0, 0, 2, 0, 0, 0, 0, 0],
    [0, 0, 7, 0, 4, 0, 2, 0, 3],
];

/// Solve a 9x9 Sudoku puzzle by backtracking.
#[derive(Parser)]
#[command(name = "sudoku", version)]
struct Cli {
    /// Puzzle as 81 digits, row-major; 0 or . marks an empty cell.
    /// Defaults to a built-in example puzzle.
    puzzle: Option<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let grid = match &cli.puzzle {
        Some(s) => match Grid::from_string(s) {
            Ok(grid) => grid,
            Err(e) => {
                eprintln!("invalid puzzle: {e}");
                return ExitCode::from(2);
            }
        },
        None => Grid::new(EXAMPLE).unwrap(),
    };

    // Inconsistent givens are malformed input, not an unsolvable puzzle.
    if let Err(e) = grid.validate() {
        eprintln!("invalid puzzle: {e}");
        return ExitCode::from(2);
    }

    println!("{grid}");

    match Solver::new().solve(&grid) {
        Some(solution) => {
            println!("Solved:");
            println!("{solution}");
            ExitCode::SUCCESS
        }
        None => {
            println!("No solution exists.");
            ExitCode::FAILURE
        }
    }
}
