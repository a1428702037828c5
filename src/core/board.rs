//! Board module - manages the 3x3 grid
//!
//! The board is a fixed 9-cell grid where each cell is empty or holds a
//! mark. Uses a flat array, row-major order: row = index / 3,
//! column = index % 3. The cell count is fixed and never resized.

use std::fmt;

use arrayvec::ArrayVec;

use crate::types::{Cell, Mark, BOARD_CELLS};

/// The game board - 9 cells in row-major order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [Cell; BOARD_CELLS],
}

/// Malformed board input (wrong length or an unknown mark character).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    WrongLength(usize),
    InvalidMark(char),
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::WrongLength(len) => {
                write!(f, "board string has {} cells, expected {}", len, BOARD_CELLS)
            }
            BoardError::InvalidMark(c) => write!(f, "invalid mark character '{}'", c),
        }
    }
}

impl std::error::Error for BoardError {}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_CELLS],
        }
    }

    /// Get cell at index
    /// Returns None if out of bounds
    pub fn get(&self, idx: usize) -> Option<Cell> {
        self.cells.get(idx).copied()
    }

    /// Set cell at index
    /// Returns false if out of bounds
    pub fn set(&mut self, idx: usize, cell: Cell) -> bool {
        match self.cells.get_mut(idx) {
            Some(slot) => {
                *slot = cell;
                true
            }
            None => false,
        }
    }

    /// Check if the cell at index is within bounds and empty
    pub fn is_empty_at(&self, idx: usize) -> bool {
        matches!(self.get(idx), Some(None))
    }

    /// Indices of all empty cells, in ascending order (zero-allocation)
    pub fn empty_cells(&self) -> ArrayVec<usize, BOARD_CELLS> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_none())
            .map(|(idx, _)| idx)
            .collect()
    }

    /// Check if no cell is empty
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_some())
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells = [None; BOARD_CELLS];
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell; BOARD_CELLS] {
        &self.cells
    }

    /// Parse a board from a 9-character string, `.` for empty
    /// (e.g. `"XX.OO...."`). Rejects malformed input.
    pub fn from_marks(s: &str) -> Result<Self, BoardError> {
        let mut cells = [None; BOARD_CELLS];
        let mut count = 0;
        for (idx, c) in s.chars().enumerate() {
            if idx >= BOARD_CELLS {
                return Err(BoardError::WrongLength(s.chars().count()));
            }
            cells[idx] = match c {
                '.' => None,
                _ => Some(Mark::from_char(c).ok_or(BoardError::InvalidMark(c))?),
            };
            count += 1;
        }
        if count != BOARD_CELLS {
            return Err(BoardError::WrongLength(count));
        }
        Ok(Self { cells })
    }

    /// Encode the board as a 9-character string, `.` for empty
    pub fn to_marks(&self) -> String {
        self.cells
            .iter()
            .map(|cell| match cell {
                Some(mark) => mark.as_char(),
                None => '.',
            })
            .collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
