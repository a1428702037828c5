//! Core types shared across the application
//! This module contains pure data types with no external dependencies

/// Number of cells on the board (3x3, row-major).
pub const BOARD_CELLS: usize = 9;

/// The eight winning lines, checked in this fixed order:
/// rows, then columns, then the two diagonals.
pub const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// Base terminal score for a won position in the minimax search.
pub const WIN_SCORE: i32 = 10;

/// Delay before the computer's move is applied (milliseconds).
/// Purely for user perception; correctness never depends on it.
pub const COMPUTER_MOVE_DELAY_MS: u64 = 500;

/// The mark that opens every round.
pub const STARTING_MARK: Mark = Mark::X;

/// A player's mark
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    /// The other player's mark
    pub fn opponent(&self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    pub fn as_char(&self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'X' | 'x' => Some(Mark::X),
            'O' | 'o' => Some(Mark::O),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Mark::X => "X",
            Mark::O => "O",
        }
    }

    /// Parse mark from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "x" => Some(Mark::X),
            "o" => Some(Mark::O),
            _ => None,
        }
    }
}

/// Cell on the board (None = empty, Some = occupied by a mark)
pub type Cell = Option<Mark>;

/// Terminal classification of a board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The round is still live
    Undecided,
    /// A mark completed a line
    Win(Mark),
    /// Full board, no completed line
    Draw,
}

impl Outcome {
    /// Whether the round has ended (win or draw)
    pub fn is_decided(&self) -> bool {
        !matches!(self, Outcome::Undecided)
    }
}

/// Strategy used by the computer player to pick a move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    /// Uniform random choice among the empty cells
    Easy,
    /// Exhaustive minimax search
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Hard => "hard",
        }
    }

    /// Parse difficulty from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Difficulty::Easy => Difficulty::Hard,
            Difficulty::Hard => Difficulty::Easy,
        }
    }
}
