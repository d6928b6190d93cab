// t4tag/src/session/completion.rs

use std::sync::{Arc, Mutex, PoisonError};

use tokio::sync::oneshot;

use crate::Result;

/// One-shot terminal outcome of a session.
///
/// Both the flow task and `SessionInvalidator::invalidate` try to complete it;
/// whichever takes the sender first wins and the other call is a no-op.
#[derive(Debug)]
pub(crate) struct Completion {
    sender: Mutex<Option<oneshot::Sender<Result<String>>>>,
}

impl Completion {
    pub(crate) fn new() -> (Arc<Self>, oneshot::Receiver<Result<String>>) {
        let (tx, rx) = oneshot::channel();
        let completion = Self {
            sender: Mutex::new(Some(tx)),
        };
        (Arc::new(completion), rx)
    }

    /// Deliver `outcome`. Returns false when another outcome was already
    /// delivered.
    pub(crate) fn complete(&self, outcome: Result<String>) -> bool {
        let sender = self
            .sender
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        match sender {
            // A dropped receiver still counts as completed
            Some(tx) => {
                let _ = tx.send(outcome);
                true
            }
            None => false,
        }
    }

    pub(crate) fn is_completed(&self) -> bool {
        self.sender
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_none()
    }
}
