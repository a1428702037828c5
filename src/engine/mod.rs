//! Engine module - the computer player's decision procedure
//!
//! Given a live board, picks a cell for the automated mark: uniformly at
//! random among the empty cells (easy) or by exhaustive minimax search
//! (hard). Both policies are pure over their inputs; the easy policy's
//! randomness comes from an injected generator.

pub mod choose;
pub mod search;

pub use choose::{choose_move, ChooseError};
pub use search::best_move;
