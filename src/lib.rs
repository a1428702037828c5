//! Terminal tic-tac-toe with a minimax computer opponent.
//!
//! The library is split along the same seams as the binary:
//!
//! - [`types`]: dependency-free shared types (marks, outcomes, constants)
//! - [`core`]: pure game logic - board, outcome rules, round lifecycle,
//!   score tally, deterministic RNG, and the persisted-state snapshot
//! - [`engine`]: the computer player's decision procedure (random or
//!   exhaustive minimax)
//! - [`adapter`]: deferred, cancellable scheduling of the computer's move
//! - [`term`]: plain-text rendering of the game for the terminal runner
//!
//! `core` and `engine` are pure and stateless between calls: they take the
//! board by reference and return an outcome or a cell index, never keeping
//! a reference across calls. All I/O (terminal, save file, timers) lives in
//! the binary and the adapter.

pub mod adapter;
pub mod core;
pub mod engine;
pub mod term;
pub mod types;
