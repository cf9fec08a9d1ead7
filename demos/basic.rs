//! Basic example of using the Sudoku engine

use sudoku_core::{Grid, Solver};

fn main() {
    // Parse a puzzle from a string
    let puzzle_string = "702050600000003000100009500800000090043000750090000008009700005000200000007040203";
    let grid = Grid::from_string(puzzle_string).expect("valid puzzle string");

    println!("Puzzle:");
    println!("{}", grid);

    // Show some stats
    println!("Given cells: {}", grid.given_count());
    println!("Empty cells: {}", grid.empty_count());

    // Solve it
    let solver = Solver::new();
    match solver.solve(&grid) {
        Some(solution) => {
            println!("\nSolution:");
            println!("{}", solution);
        }
        None => println!("\nNo solution exists."),
    }

    // An unsolvable puzzle is a normal boolean outcome, not an error
    let mut contradictory = Grid::from_string(
        "550000000000000000000000000000000000000000000000000000000000000000000000000000000",
    )
    .expect("valid puzzle string");
    let solved = solver.solve_in_place(&mut contradictory);
    println!("Contradictory puzzle solved: {}", solved);
}
