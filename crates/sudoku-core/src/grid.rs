use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Side length of the grid and of every row/column/box digit set.
pub const GRID_SIZE: usize = 9;

/// Side length of a 3x3 box.
const BOX_SIZE: usize = 3;

/// Errors from grid construction and upfront validation.
///
/// The solver itself never produces these; "no solution" is reported as a
/// plain boolean, not an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("puzzle string must be 81 characters, got {0}")]
    BadLength(usize),
    #[error("unexpected character {found:?} at index {index}")]
    BadCharacter { index: usize, found: char },
    #[error("cell value {value} at ({row}, {col}) is out of range 0-9")]
    ValueOutOfRange { row: usize, col: usize, value: u8 },
    #[error("digit {digit} appears more than once in {unit}")]
    DuplicateDigit { unit: UnitRef, digit: u8 },
}

/// Names the row, column, or box where a duplicate given was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitRef {
    Row(usize),
    Col(usize),
    Box(usize),
}

impl fmt::Display for UnitRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnitRef::Row(r) => write!(f, "row {}", r + 1),
            UnitRef::Col(c) => write!(f, "column {}", c + 1),
            UnitRef::Box(b) => write!(f, "box {}", b + 1),
        }
    }
}

/// A cell coordinate: row and column, both 0-8.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Index of the 3x3 box containing this position (0-8, row-major).
    pub fn box_index(&self) -> usize {
        (self.row / BOX_SIZE) * BOX_SIZE + self.col / BOX_SIZE
    }

    /// Top-left corner of the 3x3 box containing this position.
    pub fn box_corner(&self) -> Position {
        Position::new(self.row - self.row % BOX_SIZE, self.col - self.col % BOX_SIZE)
    }
}

/// A 9x9 Sudoku grid. Cells hold 0 for empty or a digit 1-9, row-major.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    cells: [[u8; GRID_SIZE]; GRID_SIZE],
}

impl Grid {
    /// Build a grid from a 9x9 cell array, rejecting values outside 0-9.
    ///
    /// Only the value range is checked here; whether the givens are
    /// mutually consistent is a separate question, see [`Grid::validate`].
    pub fn new(cells: [[u8; GRID_SIZE]; GRID_SIZE]) -> Result<Self, GridError> {
        for (row, row_cells) in cells.iter().enumerate() {
            for (col, &value) in row_cells.iter().enumerate() {
                if value > 9 {
                    return Err(GridError::ValueOutOfRange { row, col, value });
                }
            }
        }
        Ok(Self { cells })
    }

    /// Parse an 81-character puzzle string, row-major. '0' and '.' both
    /// mean an empty cell.
    pub fn from_string(s: &str) -> Result<Self, GridError> {
        s.parse()
    }

    /// Value at a position: `None` for an empty cell, `Some(1..=9)` otherwise.
    pub fn get(&self, pos: Position) -> Option<u8> {
        match self.cells[pos.row][pos.col] {
            0 => None,
            digit => Some(digit),
        }
    }

    /// Raw cell value at a position, 0 for empty.
    pub fn cell(&self, pos: Position) -> u8 {
        self.cells[pos.row][pos.col]
    }

    /// Write a digit into a cell. `None` clears the cell.
    pub fn set(&mut self, pos: Position, value: Option<u8>) {
        debug_assert!(value.map_or(true, |v| (1..=9).contains(&v)));
        self.cells[pos.row][pos.col] = value.unwrap_or(0);
    }

    /// First empty cell in row-major order, if any.
    pub fn first_empty(&self) -> Option<Position> {
        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                if self.cells[row][col] == 0 {
                    return Some(Position::new(row, col));
                }
            }
        }
        None
    }

    /// Number of filled cells.
    pub fn given_count(&self) -> usize {
        self.cells.iter().flatten().filter(|&&c| c != 0).count()
    }

    /// Number of empty cells.
    pub fn empty_count(&self) -> usize {
        GRID_SIZE * GRID_SIZE - self.given_count()
    }

    /// True when no cell is empty.
    pub fn is_complete(&self) -> bool {
        self.first_empty().is_none()
    }

    /// Does `digit` already appear anywhere in `row`?
    pub fn row_contains(&self, row: usize, digit: u8) -> bool {
        self.cells[row].contains(&digit)
    }

    /// Does `digit` already appear anywhere in `col`?
    pub fn col_contains(&self, col: usize, digit: u8) -> bool {
        (0..GRID_SIZE).any(|row| self.cells[row][col] == digit)
    }

    /// Does `digit` already appear in the 3x3 box containing `pos`?
    pub fn box_contains(&self, pos: Position, digit: u8) -> bool {
        let corner = pos.box_corner();
        for row in corner.row..corner.row + BOX_SIZE {
            for col in corner.col..corner.col + BOX_SIZE {
                if self.cells[row][col] == digit {
                    return true;
                }
            }
        }
        false
    }

    /// Would placing `digit` at `pos` keep the grid constraint-consistent?
    ///
    /// True iff `digit` appears nowhere in the position's row, column, or
    /// 3x3 box. Pure read, no side effects.
    ///
    /// Callers guarantee `pos` refers to an empty cell and `digit` is in
    /// 1..=9; neither precondition is checked here.
    pub fn is_valid_placement(&self, pos: Position, digit: u8) -> bool {
        !self.row_contains(pos.row, digit)
            && !self.col_contains(pos.col, digit)
            && !self.box_contains(pos, digit)
    }

    /// Check that the filled cells are mutually consistent: no digit twice
    /// in any row, column, or box.
    ///
    /// The solver does not run this; it assumes consistent givens. Call it
    /// upfront to distinguish a malformed puzzle from a well-formed but
    /// unsolvable one.
    pub fn validate(&self) -> Result<(), GridError> {
        for row in 0..GRID_SIZE {
            if let Some(digit) = duplicate_digit((0..GRID_SIZE).map(|col| self.cells[row][col])) {
                return Err(GridError::DuplicateDigit {
                    unit: UnitRef::Row(row),
                    digit,
                });
            }
        }
        for col in 0..GRID_SIZE {
            if let Some(digit) = duplicate_digit((0..GRID_SIZE).map(|row| self.cells[row][col])) {
                return Err(GridError::DuplicateDigit {
                    unit: UnitRef::Col(col),
                    digit,
                });
            }
        }
        for box_idx in 0..GRID_SIZE {
            let corner = Position::new((box_idx / 3) * 3, (box_idx % 3) * 3);
            let values = (0..GRID_SIZE)
                .map(|i| self.cells[corner.row + i / 3][corner.col + i % 3]);
            if let Some(digit) = duplicate_digit(values) {
                return Err(GridError::DuplicateDigit {
                    unit: UnitRef::Box(box_idx),
                    digit,
                });
            }
        }
        Ok(())
    }

    /// True when the grid is completely filled and every row, column, and
    /// box holds each digit 1-9 exactly once.
    pub fn is_solved(&self) -> bool {
        self.is_complete() && self.validate().is_ok()
    }
}

/// First digit occurring more than once in `values`, ignoring zeros.
fn duplicate_digit(values: impl Iterator<Item = u8>) -> Option<u8> {
    let mut seen = [false; 10];
    for value in values {
        if value != 0 {
            if seen[value as usize] {
                return Some(value);
            }
            seen[value as usize] = true;
        }
    }
    None
}

impl FromStr for Grid {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.chars().count() != GRID_SIZE * GRID_SIZE {
            return Err(GridError::BadLength(s.chars().count()));
        }

        let mut cells = [[0u8; GRID_SIZE]; GRID_SIZE];
        for (index, ch) in s.chars().enumerate() {
            let value = match ch {
                '.' => 0,
                '0'..='9' => ch as u8 - b'0',
                _ => return Err(GridError::BadCharacter { index, found: ch }),
            };
            cells[index / GRID_SIZE][index % GRID_SIZE] = value;
        }
        Ok(Self { cells })
    }
}

impl fmt::Display for Grid {
    /// Renders rows as space-separated digits with `|` separators before
    /// columns 3 and 6 and a dashed line after rows 3 and 6.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..GRID_SIZE {
            if row % BOX_SIZE == 0 && row != 0 {
                writeln!(f, "---------------------")?;
            }
            for col in 0..GRID_SIZE {
                if col % BOX_SIZE == 0 && col != 0 {
                    write!(f, "| ")?;
                }
                write!(f, "{} ", self.cells[row][col])?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PUZZLE: &str =
        "530070000600195000098000060800060003400803001700020006060000280000419005000080079";

    #[test]
    fn parse_roundtrips_through_cells() {
        let grid = Grid::from_string(PUZZLE).unwrap();
        assert_eq!(grid.get(Position::new(0, 0)), Some(5));
        assert_eq!(grid.get(Position::new(0, 2)), None);
        assert_eq!(grid.get(Position::new(8, 8)), Some(9));
        assert_eq!(grid.given_count(), 30);
        assert_eq!(grid.empty_count(), 51);
    }

    #[test]
    fn parse_accepts_dots_for_empty() {
        let dotted = PUZZLE.replace('0', ".");
        assert_eq!(Grid::from_string(&dotted).unwrap(), Grid::from_string(PUZZLE).unwrap());
    }

    #[test]
    fn parse_rejects_bad_length() {
        assert_eq!(Grid::from_string("530070000"), Err(GridError::BadLength(9)));
    }

    #[test]
    fn parse_rejects_bad_character() {
        let bad = PUZZLE.replacen('5', "x", 1);
        assert!(matches!(
            Grid::from_string(&bad),
            Err(GridError::BadCharacter { index: 0, found: 'x' })
        ));
    }

    #[test]
    fn new_rejects_out_of_range_values() {
        let mut cells = [[0u8; 9]; 9];
        cells[4][7] = 12;
        assert_eq!(
            Grid::new(cells),
            Err(GridError::ValueOutOfRange { row: 4, col: 7, value: 12 })
        );
    }

    #[test]
    fn validate_catches_row_duplicate() {
        let mut cells = [[0u8; 9]; 9];
        cells[0][0] = 5;
        cells[0][1] = 5;
        let grid = Grid::new(cells).unwrap();
        assert_eq!(
            grid.validate(),
            Err(GridError::DuplicateDigit { unit: UnitRef::Row(0), digit: 5 })
        );
    }

    #[test]
    fn validate_catches_box_duplicate() {
        let mut cells = [[0u8; 9]; 9];
        // Same box, different row and column.
        cells[0][0] = 7;
        cells[1][1] = 7;
        let grid = Grid::new(cells).unwrap();
        assert_eq!(
            grid.validate(),
            Err(GridError::DuplicateDigit { unit: UnitRef::Box(0), digit: 7 })
        );
    }

    #[test]
    fn validate_passes_consistent_givens() {
        let grid = Grid::from_string(PUZZLE).unwrap();
        assert_eq!(grid.validate(), Ok(()));
    }

    #[test]
    fn placement_checks_row_col_and_box() {
        let grid = Grid::from_string(PUZZLE).unwrap();
        // (0, 2) is empty; row 0 already has 5 and 7, column 2 has 8,
        // and the top-left box has 5, 3, 6, 9, 8.
        let pos = Position::new(0, 2);
        assert!(!grid.is_valid_placement(pos, 5));
        assert!(!grid.is_valid_placement(pos, 7));
        assert!(!grid.is_valid_placement(pos, 9));
        assert!(grid.is_valid_placement(pos, 1));
        assert!(grid.is_valid_placement(pos, 4));
    }

    #[test]
    fn placement_check_is_pure() {
        let grid = Grid::from_string(PUZZLE).unwrap();
        let before = grid.clone();
        let pos = Position::new(0, 2);
        let first = grid.is_valid_placement(pos, 4);
        for _ in 0..10 {
            assert_eq!(grid.is_valid_placement(pos, 4), first);
        }
        assert_eq!(grid, before);
    }

    #[test]
    fn box_index_and_corner() {
        assert_eq!(Position::new(0, 0).box_index(), 0);
        assert_eq!(Position::new(4, 4).box_index(), 4);
        assert_eq!(Position::new(8, 2).box_index(), 6);
        assert_eq!(Position::new(5, 7).box_corner(), Position::new(3, 6));
    }

    #[test]
    fn display_matches_expected_layout() {
        let grid = Grid::from_string(PUZZLE).unwrap();
        let rendered = grid.to_string();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 11);
        assert_eq!(lines[0], "5 3 0 | 0 7 0 | 0 0 0 ");
        assert_eq!(lines[3], "---------------------");
        assert_eq!(lines[7], "---------------------");
        assert_eq!(lines[10], "0 0 0 | 0 8 0 | 0 7 9 ");
    }

    #[test]
    fn serde_roundtrip() {
        let grid = Grid::from_string(PUZZLE).unwrap();
        let json = serde_json::to_string(&grid).unwrap();
        let back: Grid = serde_json::from_str(&json).unwrap();
        assert_eq!(back, grid);
    }
}
