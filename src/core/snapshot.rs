//! Snapshot module - the persisted-state blob
//!
//! The original binds board, score, current mark and difficulty into one
//! serialized blob; this module makes that blob an explicit struct. The
//! engine never reads or writes storage itself: the caller loads a
//! snapshot at startup and saves one after every state change.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::{Board, BoardError, GameState, ScoreBoard};
use crate::types::{Difficulty, Mark};

/// Serialized session state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Board as a 9-character mark string, `.` for empty
    pub board: String,
    /// Mark to move ("X" or "O")
    pub current: String,
    /// Computer policy ("easy" or "hard")
    pub difficulty: String,
    pub x_wins: u32,
    pub o_wins: u32,
    pub draws: u32,
}

/// Invalid snapshot content
#[derive(Debug)]
pub enum SnapshotError {
    Board(BoardError),
    InvalidMark(String),
    InvalidDifficulty(String),
    Json(serde_json::Error),
}

impl fmt::Display for SnapshotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SnapshotError::Board(err) => write!(f, "bad board: {}", err),
            SnapshotError::InvalidMark(s) => write!(f, "invalid mark label '{}'", s),
            SnapshotError::InvalidDifficulty(s) => {
                write!(f, "invalid difficulty label '{}'", s)
            }
            SnapshotError::Json(err) => write!(f, "malformed snapshot json: {}", err),
        }
    }
}

impl std::error::Error for SnapshotError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SnapshotError::Board(err) => Some(err),
            SnapshotError::Json(err) => Some(err),
            _ => None,
        }
    }
}

impl From<BoardError> for SnapshotError {
    fn from(err: BoardError) -> Self {
        SnapshotError::Board(err)
    }
}

impl From<serde_json::Error> for SnapshotError {
    fn from(err: serde_json::Error) -> Self {
        SnapshotError::Json(err)
    }
}

impl GameSnapshot {
    /// Capture the current session state
    pub fn capture(game: &GameState) -> Self {
        Self {
            board: game.board().to_marks(),
            current: game.current_mark().as_str().to_string(),
            difficulty: game.difficulty().as_str().to_string(),
            x_wins: game.score().wins(Mark::X),
            o_wins: game.score().wins(Mark::O),
            draws: game.score().draws(),
        }
    }

    /// Rebuild a session, validating every field
    pub fn restore(&self) -> Result<GameState, SnapshotError> {
        let board = Board::from_marks(&self.board)?;
        let current = Mark::from_str(&self.current)
            .ok_or_else(|| SnapshotError::InvalidMark(self.current.clone()))?;
        let difficulty = Difficulty::from_str(&self.difficulty)
            .ok_or_else(|| SnapshotError::InvalidDifficulty(self.difficulty.clone()))?;
        let score = ScoreBoard::with_counts(self.x_wins, self.o_wins, self.draws);
        Ok(GameState::from_parts(board, current, difficulty, score))
    }

    pub fn to_json(&self) -> Result<String, SnapshotError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_str(json)?)
    }
}
