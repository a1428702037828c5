//! Choose module - policy dispatch and precondition guards

use crate::core::{evaluate, Board, SimpleRng};
use crate::engine::search::best_move;
use crate::types::{Difficulty, Mark};

/// Why the engine refused to pick a move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChooseError {
    /// The board already has a decisive outcome
    RoundOver,
    /// No empty cell remains
    NoEmptyCell,
}

impl ChooseError {
    pub fn code(self) -> &'static str {
        match self {
            ChooseError::RoundOver => "round_over",
            ChooseError::NoEmptyCell => "no_empty_cell",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            ChooseError::RoundOver => "round outcome is already decided",
            ChooseError::NoEmptyCell => "no empty cell to play",
        }
    }
}

impl std::fmt::Display for ChooseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for ChooseError {}

/// Pick a cell for `mark` on a live board.
///
/// Callers are expected to invoke this only while the round is undecided
/// and at least one cell is empty; both preconditions are still checked
/// defensively and violations reported as errors instead of picking from
/// an empty candidate set.
///
/// The returned index always references a currently-empty cell.
pub fn choose_move(
    board: &Board,
    difficulty: Difficulty,
    mark: Mark,
    rng: &mut SimpleRng,
) -> Result<usize, ChooseError> {
    if evaluate(board).is_decided() {
        return Err(ChooseError::RoundOver);
    }

    let empties = board.empty_cells();
    if empties.is_empty() {
        return Err(ChooseError::NoEmptyCell);
    }

    match difficulty {
        Difficulty::Easy => {
            // pick_index is Some: empties is non-empty here.
            let pick = rng.pick_index(empties.len()).unwrap_or(0);
            Ok(empties[pick])
        }
        Difficulty::Hard => best_move(board, mark).ok_or(ChooseError::NoEmptyCell),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_easy_returns_empty_cell() {
        let board = Board::from_marks("X.O.X.O..").unwrap();
        let mut rng = SimpleRng::new(42);
        for _ in 0..50 {
            let idx = choose_move(&board, Difficulty::Easy, Mark::O, &mut rng).unwrap();
            assert!(board.is_empty_at(idx));
        }
    }

    #[test]
    fn test_easy_is_deterministic_under_fixed_seed() {
        let board = Board::from_marks("X........").unwrap();
        let a = choose_move(&board, Difficulty::Easy, Mark::O, &mut SimpleRng::new(7)).unwrap();
        let b = choose_move(&board, Difficulty::Easy, Mark::O, &mut SimpleRng::new(7)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_decided_board_is_rejected() {
        let board = Board::from_marks("XXXOO....").unwrap();
        let mut rng = SimpleRng::default();
        let err = choose_move(&board, Difficulty::Hard, Mark::O, &mut rng).unwrap_err();
        assert_eq!(err, ChooseError::RoundOver);
        assert_eq!(err.code(), "round_over");
    }

    #[test]
    fn test_full_board_is_rejected() {
        let board = Board::from_marks("XOXXOXOXO").unwrap();
        let mut rng = SimpleRng::default();
        // A full drawn board is decided, so RoundOver fires first.
        let err = choose_move(&board, Difficulty::Easy, Mark::O, &mut rng).unwrap_err();
        assert_eq!(err, ChooseError::RoundOver);
    }

    #[test]
    fn test_hard_wins_now() {
        let board = Board::from_marks("XX.OO....").unwrap();
        let mut rng = SimpleRng::default();
        assert_eq!(
            choose_move(&board, Difficulty::Hard, Mark::O, &mut rng),
            Ok(5)
        );
    }
}
