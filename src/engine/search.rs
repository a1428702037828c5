//! Search module - exhaustive minimax for the hard policy
//!
//! The search explores the full game tree down to terminal states: no
//! pruning, no depth cap, no memoization. The tree is at most 9 plies
//! deep, so exhaustive exploration is cheap.
//!
//! Scores are taken from the automated mark's perspective and discounted
//! by depth: a win found `d` plies down scores `WIN_SCORE - d`, a loss
//! `d - WIN_SCORE`, a full board 0. The discount orders an immediate win
//! above a forced win several plies later (and a distant loss above an
//! immediate one); with flat scores the first-index tie-break could pick
//! a slower winning cell.
//!
//! The mover mark alternates every ply, starting from the automated mark
//! at the root. At the automated mark's plies the maximum child score is
//! kept, at the opponent's the minimum - each side plays optimally.
//! Candidates are scanned in ascending cell index and replaced only on
//! strict improvement, so ties resolve to the lowest index.

use crate::core::{winner, Board};
use crate::types::{Mark, WIN_SCORE};

/// Best cell for `mark` on a live board.
///
/// Returns None when the board has no empty cell; callers go through
/// [`choose_move`](crate::engine::choose_move), which reports that case
/// as an error.
pub fn best_move(board: &Board, mark: Mark) -> Option<usize> {
    let mut scratch = *board;
    let mut best: Option<(usize, i32)> = None;

    for idx in board.empty_cells() {
        scratch.set(idx, Some(mark));
        let score = minimax(&mut scratch, mark.opponent(), mark, 1);
        scratch.set(idx, None);

        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((idx, score)),
        }
    }

    best.map(|(idx, _)| idx)
}

/// Score a position with `to_move` about to play, from `mark`'s
/// perspective.
fn minimax(board: &mut Board, to_move: Mark, mark: Mark, depth: i32) -> i32 {
    if let Some(won) = winner(board) {
        return if won == mark {
            WIN_SCORE - depth
        } else {
            depth - WIN_SCORE
        };
    }
    if board.is_full() {
        return 0;
    }

    let maximizing = to_move == mark;
    let mut best = if maximizing { i32::MIN } else { i32::MAX };

    for idx in board.empty_cells() {
        board.set(idx, Some(to_move));
        let score = minimax(board, to_move.opponent(), mark, depth + 1);
        board.set(idx, None);

        if maximizing {
            if score > best {
                best = score;
            }
        } else if score < best {
            best = score;
        }
    }

    best
}
