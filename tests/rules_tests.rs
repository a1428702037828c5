//! Outcome evaluator tests - every line, draws, and adversarial boards

use tui_tictactoe::core::{evaluate, winner, Board};
use tui_tictactoe::types::{Mark, Outcome, LINES};

#[test]
fn test_empty_board_is_undecided() {
    assert_eq!(evaluate(&Board::new()), Outcome::Undecided);
}

#[test]
fn test_no_complete_line_is_undecided() {
    for marks in ["X........", "XO.OX....", "XOXOXO.X.", "OX.XXO.OX"] {
        let board = Board::from_marks(marks).unwrap();
        assert_eq!(evaluate(&board), Outcome::Undecided, "board {}", marks);
    }
}

#[test]
fn test_every_line_wins_for_either_mark() {
    for line in &LINES {
        for mark in [Mark::X, Mark::O] {
            let mut board = Board::new();
            for &idx in line {
                board.set(idx, Some(mark));
            }
            assert_eq!(
                evaluate(&board),
                Outcome::Win(mark),
                "line {:?} mark {:?}",
                line,
                mark
            );
        }
    }
}

#[test]
fn test_win_detected_on_crowded_board() {
    // O completes the middle column on an otherwise messy board.
    let board = Board::from_marks("XOXXOX.O.").unwrap();
    assert_eq!(evaluate(&board), Outcome::Win(Mark::O));
}

#[test]
fn test_full_board_without_line_is_draw() {
    for marks in ["XOXXOXOXO", "XXOOOXXXO", "OXOXXOXOX"] {
        let board = Board::from_marks(marks).unwrap();
        assert_eq!(evaluate(&board), Outcome::Draw, "board {}", marks);
    }
}

#[test]
fn test_win_on_full_board_beats_draw() {
    // A full board where X's last move completed a line is a win, not a draw.
    let board = Board::from_marks("XXXOOXOXO").unwrap();
    assert_eq!(evaluate(&board), Outcome::Win(Mark::X));
}

#[test]
fn test_adversarial_double_win_is_deterministic() {
    // Boards no legal game reaches still get a deterministic answer:
    // the first complete line in table order (rows, columns, diagonals).
    let cases = [
        ("XXX...OOO", Mark::X), // row 0 beats row 2
        ("OOO...XXX", Mark::O),
        ("O.XO.XO.X", Mark::O), // column 0 beats column 2
    ];
    for (marks, expected) in cases {
        let board = Board::from_marks(marks).unwrap();
        assert_eq!(winner(&board), Some(expected), "board {}", marks);
        // Repeat evaluation: pure function, same report.
        assert_eq!(evaluate(&board), Outcome::Win(expected));
    }
}
