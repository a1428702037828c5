//! Adapter module - async scheduling for the sync game loop
//!
//! Bridges the synchronous terminal loop with a tokio runtime so the
//! computer's move can be paced by a fixed, cancellable delay.

pub mod scheduler;

pub use scheduler::{ComputerTurn, MoveScheduler};
