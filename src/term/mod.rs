//! Terminal view module.
//!
//! A small, game-oriented text layer for terminal play. The view itself
//! is pure (state in, `String` out) so it can be unit-tested; flushing to
//! the terminal happens in the binary.

pub mod game_view;

pub use game_view::render;
