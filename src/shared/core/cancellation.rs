// Cooperative cancellation signal threaded into long-running scans.
//
// Purpose
// - Let a caller (or the shell on shutdown) stop a scan between entries.
//
// Responsibilities
// - Cheap to clone and to poll; polling never blocks.
// - A `never()` signal is always available for callers that do not cancel.

use tokio::sync::watch;

#[derive(Debug, Clone, Default)]
pub struct Cancellation {
    receiver: Option<watch::Receiver<bool>>,
}

#[derive(Debug)]
pub struct CancellationHandle {
    sender: watch::Sender<bool>,
}

impl Cancellation {
    pub fn new() -> (CancellationHandle, Self) {
        let (sender, receiver) = watch::channel(false);
        (
            CancellationHandle { sender },
            Self {
                receiver: Some(receiver),
            },
        )
    }

    pub fn never() -> Self {
        Self::default()
    }

    pub fn is_cancelled(&self) -> bool {
        self.receiver
            .as_ref()
            .map(|receiver| *receiver.borrow())
            .unwrap_or(false)
    }
}

impl CancellationHandle {
    pub fn cancel(&self) {
        self.sender.send_replace(true);
    }

    pub fn is_cancelled(&self) -> bool {
        *self.sender.borrow()
    }
}
