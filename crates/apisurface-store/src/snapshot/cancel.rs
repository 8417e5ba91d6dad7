//! Cooperative cancellation signal.

use std::sync::Arc;
use tokio::sync::watch;

/// Cloneable flag that a caller raises to abort a snapshot write
///
/// Every clone observes the same state. Once cancelled, a signal stays
/// cancelled.
#[derive(Debug, Clone)]
pub struct CancellationSignal {
    sender: Arc<watch::Sender<bool>>,
    receiver: watch::Receiver<bool>,
}

impl CancellationSignal {
    /// Create a signal that is not yet cancelled
    pub fn new() -> Self {
        let (sender, receiver) = watch::channel(false);
        Self {
            sender: Arc::new(sender),
            receiver,
        }
    }

    /// Signal for callers that never cancel
    pub fn never() -> Self {
        Self::new()
    }

    /// Raise the signal
    pub fn cancel(&self) {
        self.sender.send_replace(true);
    }

    /// Check if the signal has been raised
    pub fn is_cancelled(&self) -> bool {
        *self.receiver.borrow()
    }

    /// Resolve once the signal is raised
    pub async fn cancelled(&self) {
        let mut receiver = self.receiver.clone();
        let raised = receiver.wait_for(|cancelled| *cancelled).await.is_ok();
        if !raised {
            // Sender gone without cancelling: never resolves.
            std::future::pending::<()>().await;
        }
    }
}

impl Default for CancellationSignal {
    fn default() -> Self {
        Self::new()
    }
}
