//! GameView: maps `core::GameState` into displayable text.
//!
//! This module is pure (no I/O). It can be unit-tested.

use std::fmt::Write as _;

use crate::core::GameState;
use crate::types::{Mark, Outcome};

/// Render the session into a full-screen text frame.
///
/// Empty cells show their key number (1-9), occupied cells their mark.
pub fn render(game: &GameState) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "  tic-tac-toe   [{}]", game.difficulty().as_str());
    out.push('\n');

    for row in 0..3 {
        out.push_str("   ");
        for col in 0..3 {
            let idx = row * 3 + col;
            let glyph = match game.board().get(idx) {
                Some(Some(mark)) => mark.as_char(),
                _ => char::from_digit(idx as u32 + 1, 10).unwrap_or('?'),
            };
            let _ = write!(out, " {} ", glyph);
            if col < 2 {
                out.push('|');
            }
        }
        out.push('\n');
        if row < 2 {
            out.push_str("   ---+---+---\n");
        }
    }

    out.push('\n');
    let score = game.score();
    let _ = writeln!(
        out,
        "  score  X:{}  O:{}  draws:{}",
        score.wins(Mark::X),
        score.wins(Mark::O),
        score.draws()
    );

    let status = match game.outcome() {
        Outcome::Win(mark) => format!("{} wins the round", mark.as_char()),
        Outcome::Draw => "round drawn".to_string(),
        Outcome::Undecided => format!("{} to move", game.current_mark().as_char()),
    };
    let _ = writeln!(out, "  {}", status);

    out.push('\n');
    out.push_str("  1-9 play   d difficulty   n new round   z zero score   q quit\n");
    out
}
