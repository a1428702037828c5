//! Scheduler tests - delayed delivery, cancellation, stale wake-ups

use std::thread;
use std::time::Duration;

use tui_tictactoe::adapter::{ComputerTurn, MoveScheduler};
use tui_tictactoe::core::GameState;
use tui_tictactoe::types::Difficulty;

#[test]
fn test_turn_arrives_after_the_delay() {
    let mut scheduler = MoveScheduler::new().unwrap();
    scheduler.schedule(7, Duration::from_millis(20));

    // Nothing before the delay elapses.
    assert_eq!(scheduler.try_recv(), None);

    thread::sleep(Duration::from_millis(150));
    assert_eq!(scheduler.try_recv(), Some(ComputerTurn { revision: 7 }));
}

#[test]
fn test_cancel_during_delay_window() {
    let mut scheduler = MoveScheduler::new().unwrap();
    scheduler.schedule(1, Duration::from_millis(40));
    scheduler.cancel();

    thread::sleep(Duration::from_millis(150));
    assert_eq!(scheduler.try_recv(), None);
}

#[test]
fn test_stale_wakeup_is_dropped_by_the_drain_loop() {
    let mut scheduler = MoveScheduler::new().unwrap();
    let mut game = GameState::new(Difficulty::Hard);

    // Human (X) moves, computer turn scheduled against that revision.
    game.apply_move(0);
    scheduler.schedule(game.revision(), Duration::from_millis(10));

    // Round is reset before the timer fires.
    game.reset_round();

    thread::sleep(Duration::from_millis(150));
    let turn = scheduler.try_recv().expect("timer should have fired");

    // The delivered wake-up no longer matches the live state, so the
    // drain loop must ignore it and the board stays untouched.
    assert_ne!(turn.revision, game.revision());
    assert_eq!(game.board().empty_cells().len(), 9);
}

#[test]
fn test_rescheduling_keeps_at_most_one_pending_turn() {
    let mut scheduler = MoveScheduler::new().unwrap();
    scheduler.schedule(1, Duration::from_millis(300));
    scheduler.schedule(2, Duration::from_millis(10));

    thread::sleep(Duration::from_millis(150));
    assert_eq!(scheduler.try_recv(), Some(ComputerTurn { revision: 2 }));

    thread::sleep(Duration::from_millis(300));
    assert_eq!(scheduler.try_recv(), None);
}
