//! Game state module - round lifecycle and bookkeeping
//!
//! Ties together the board, the current mark, the difficulty setting and
//! the cross-round score tally. The outcome is always recomputed from the
//! board, never stored; a decided board freezes further moves until the
//! round is reset.

use crate::core::{evaluate, Board, ScoreBoard};
use crate::types::{Difficulty, Mark, Outcome, STARTING_MARK};

/// Complete game state for one session
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    current: Mark,
    difficulty: Difficulty,
    score: ScoreBoard,
    /// Monotonic revision, bumped on every board change and round reset.
    ///
    /// The scheduler stamps deferred computer turns with the revision they
    /// were scheduled against; a delivery with a stale revision is dropped.
    revision: u32,
}

impl GameState {
    /// Create a fresh session: empty board, starting mark, zero tally
    pub fn new(difficulty: Difficulty) -> Self {
        Self {
            board: Board::new(),
            current: STARTING_MARK,
            difficulty,
            score: ScoreBoard::new(),
            revision: 0,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The mark to move. Meaningless once the round is decided.
    pub fn current_mark(&self) -> Mark {
        self.current
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
    }

    pub fn score(&self) -> &ScoreBoard {
        &self.score
    }

    pub fn revision(&self) -> u32 {
        self.revision
    }

    /// Recompute the round outcome from the board
    pub fn outcome(&self) -> Outcome {
        evaluate(&self.board)
    }

    /// Apply a move for the current mark at the given cell.
    ///
    /// Silently rejects (returns false, state untouched) a move targeting
    /// an occupied or out-of-range cell, or any move after the round is
    /// decided. On a decisive outcome the tally is updated and further
    /// moves stay frozen until [`reset_round`](Self::reset_round);
    /// otherwise the turn passes to the other mark.
    pub fn apply_move(&mut self, idx: usize) -> bool {
        if self.outcome().is_decided() || !self.board.is_empty_at(idx) {
            return false;
        }

        self.board.set(idx, Some(self.current));
        self.revision = self.revision.wrapping_add(1);

        match self.outcome() {
            Outcome::Undecided => self.current = self.current.opponent(),
            decided => self.score.record(decided),
        }
        true
    }

    /// Clear the board and restore the starting mark; the tally survives
    pub fn reset_round(&mut self) {
        self.board.clear();
        self.current = STARTING_MARK;
        self.revision = self.revision.wrapping_add(1);
    }

    /// Zero the tally; board and current mark are untouched
    pub fn reset_score(&mut self) {
        self.score.reset();
    }

    /// Restore a session from its parts (snapshot loading)
    pub(crate) fn from_parts(
        board: Board,
        current: Mark,
        difficulty: Difficulty,
        score: ScoreBoard,
    ) -> Self {
        Self {
            board,
            current,
            difficulty,
            score,
            revision: 0,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Difficulty::Easy)
    }
}
