//! Scheduler module - deferred, cancellable computer turns
//!
//! The computer's move is applied after a fixed delay, purely for user
//! perception. The delay window is racy by nature: the round can be reset
//! (or the board otherwise changed) before the timer fires. Two guards
//! keep that race harmless:
//!
//! - scheduling or cancelling aborts any previously pending timer, so at
//!   most one computer turn is ever in flight;
//! - each wake-up carries the state revision it was scheduled against,
//!   and the drain loop drops deliveries whose revision is stale. The
//!   move itself is computed at delivery time against the live board, so
//!   a move is never applied to a state it was not chosen for.
//!
//! The engine stays synchronous; only the wake-up is deferred.

use std::time::Duration;

use tokio::runtime::Runtime;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Wake-up telling the game loop it is the computer's turn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComputerTurn {
    /// Game state revision at scheduling time
    pub revision: u32,
}

/// Deferred computer-turn scheduling over a private tokio runtime
pub struct MoveScheduler {
    rt: Runtime,
    turn_tx: mpsc::UnboundedSender<ComputerTurn>,
    turn_rx: mpsc::UnboundedReceiver<ComputerTurn>,
    pending: Option<JoinHandle<()>>,
}

impl MoveScheduler {
    pub fn new() -> std::io::Result<Self> {
        let rt = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_time()
            .build()?;
        let (turn_tx, turn_rx) = mpsc::unbounded_channel();
        Ok(Self {
            rt,
            turn_tx,
            turn_rx,
            pending: None,
        })
    }

    /// Schedule a computer turn after `delay`, stamped with `revision`.
    ///
    /// Any previously pending turn is cancelled first.
    pub fn schedule(&mut self, revision: u32, delay: Duration) {
        self.cancel();

        let tx = self.turn_tx.clone();
        let handle = self.rt.spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = tx.send(ComputerTurn { revision });
        });
        self.pending = Some(handle);
    }

    /// Abort the pending turn, if any
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }

    /// Non-blocking poll for a delivered wake-up.
    ///
    /// Callers must compare [`ComputerTurn::revision`] against the live
    /// state revision and drop stale deliveries.
    pub fn try_recv(&mut self) -> Option<ComputerTurn> {
        self.turn_rx.try_recv().ok()
    }
}
