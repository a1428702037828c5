//! Rules module - terminal outcome evaluation
//!
//! Pure functions over a board: no side effects, constant time (at most
//! 8 line checks of 3 cells each). The line table is scanned in a fixed
//! order (rows, columns, diagonals), so even an adversarial board with
//! two completed lines reports a deterministic winner: the first line in
//! table order.

use crate::core::Board;
use crate::types::{Mark, Outcome, LINES};

/// Find the winning mark, if any line is complete.
///
/// Scans `LINES` in fixed order and reports the first complete line.
pub fn winner(board: &Board) -> Option<Mark> {
    for line in &LINES {
        let [a, b, c] = *line;
        if let Some(Some(mark)) = board.get(a) {
            if board.get(b) == Some(Some(mark)) && board.get(c) == Some(Some(mark)) {
                return Some(mark);
            }
        }
    }
    None
}

/// Classify a board: win, draw, or still undecided.
///
/// Purely a function of its input; any combination of cell values is
/// accepted, reachable in legal play or not.
pub fn evaluate(board: &Board) -> Outcome {
    match winner(board) {
        Some(mark) => Outcome::Win(mark),
        None if board.is_full() => Outcome::Draw,
        None => Outcome::Undecided,
    }
}
