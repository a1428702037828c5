//! Core module - pure game logic with no external dependencies
//!
//! This module contains the board, the outcome rules, the round lifecycle,
//! the cross-round score tally, a deterministic RNG for the easy policy,
//! and the persisted-state snapshot. It has zero dependencies on UI,
//! networking, or I/O, making it:
//!
//! - **Deterministic**: the same inputs always produce the same outcome
//! - **Testable**: every rule is exercised by unit tests
//! - **Portable**: can run in any environment (terminal, GUI, headless)

pub mod board;
pub mod game_state;
pub mod rng;
pub mod rules;
pub mod scoring;
pub mod snapshot;

// Re-export commonly used types
pub use board::{Board, BoardError};
pub use game_state::GameState;
pub use rng::SimpleRng;
pub use rules::{evaluate, winner};
pub use scoring::ScoreBoard;
pub use snapshot::{GameSnapshot, SnapshotError};
