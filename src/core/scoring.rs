//! Scoring module - win/draw tally across rounds
//!
//! The tally outlives individual rounds: it is updated once when a round
//! reaches a decisive outcome and only cleared by an explicit reset.

use crate::types::{Mark, Outcome};

/// Win and draw counters spanning multiple rounds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreBoard {
    x_wins: u32,
    o_wins: u32,
    draws: u32,
}

impl ScoreBoard {
    /// Create a zeroed tally
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a tally with the given counters (for snapshot restore)
    pub fn with_counts(x_wins: u32, o_wins: u32, draws: u32) -> Self {
        Self {
            x_wins,
            o_wins,
            draws,
        }
    }

    /// Wins recorded for a mark
    pub fn wins(&self, mark: Mark) -> u32 {
        match mark {
            Mark::X => self.x_wins,
            Mark::O => self.o_wins,
        }
    }

    /// Draws recorded
    pub fn draws(&self) -> u32 {
        self.draws
    }

    /// Record a round's final outcome; `Undecided` is ignored
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Win(Mark::X) => self.x_wins += 1,
            Outcome::Win(Mark::O) => self.o_wins += 1,
            Outcome::Draw => self.draws += 1,
            Outcome::Undecided => {}
        }
    }

    /// Zero all counters
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
