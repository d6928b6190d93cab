// t4tag/src/session/handle.rs
//! Running session handle and its invalidator.

use std::future::Future;
use std::sync::Arc;

use log::{debug, info, warn};
use tokio::runtime::Handle;
use tokio::sync::oneshot;
use tokio::task::AbortHandle;

use super::completion::Completion;
use crate::{Error, Result};

/// Cloneable right to end a session early, usable from any task while
/// another one awaits `SessionHandle::outcome`.
#[derive(Debug, Clone)]
pub struct SessionInvalidator {
    completion: Arc<Completion>,
    abort: Arc<AbortHandle>,
}

impl SessionInvalidator {
    /// Deliver `Error::Invalidated(reason)` and stop the flow. Returns
    /// false when the session had already produced an outcome.
    pub fn invalidate(&self, reason: impl Into<String>) -> bool {
        let reason = reason.into();
        if self.completion.complete(Err(Error::Invalidated(reason.clone()))) {
            info!("session invalidated: {}", reason);
            self.abort.abort();
            true
        } else {
            false
        }
    }

    /// Whether an outcome has been delivered.
    pub fn is_finished(&self) -> bool {
        self.completion.is_completed()
    }
}

/// Handle to a running read or write session.
///
/// The session reports exactly one outcome: the flow's own result, or
/// `Error::Invalidated` if an invalidation got there first. Dropping the
/// handle (including a pending `outcome()` future) invalidates the session.
#[derive(Debug)]
pub struct SessionHandle {
    invalidator: SessionInvalidator,
    receiver: Option<oneshot::Receiver<Result<String>>>,
}

impl SessionHandle {
    /// Spawn `flow` on the current Tokio runtime.
    pub(crate) fn spawn<F>(name: &'static str, flow: F) -> Result<Self>
    where
        F: Future<Output = Result<String>> + Send + 'static,
    {
        let runtime = Handle::try_current()
            .map_err(|e| Error::Session(format!("no async runtime for {} session: {}", name, e)))?;
        let (completion, receiver) = Completion::new();

        let flow_completion = Arc::clone(&completion);
        let task = runtime.spawn(async move {
            let outcome = flow.await;
            match &outcome {
                Ok(_) => info!("{} session finished", name),
                Err(e) => warn!("{} session failed: {}", name, e),
            }
            if !flow_completion.complete(outcome) {
                debug!("{} session outcome dropped, already invalidated", name);
            }
        });

        Ok(Self {
            invalidator: SessionInvalidator {
                completion,
                abort: Arc::new(task.abort_handle()),
            },
            receiver: Some(receiver),
        })
    }

    /// End the session early. Returns false when the session had already
    /// produced an outcome.
    pub fn invalidate(&self, reason: impl Into<String>) -> bool {
        self.invalidator.invalidate(reason)
    }

    /// An invalidator that stays usable after `outcome` consumed the handle.
    pub fn invalidator(&self) -> SessionInvalidator {
        self.invalidator.clone()
    }

    /// Whether an outcome has been delivered.
    pub fn is_finished(&self) -> bool {
        self.invalidator.is_finished()
    }

    /// Wait for the single outcome.
    pub async fn outcome(mut self) -> Result<String> {
        let receiver = self
            .receiver
            .take()
            .ok_or_else(|| Error::Session("session outcome already taken".into()))?;
        match receiver.await {
            Ok(outcome) => outcome,
            Err(_) => Err(Error::Session("session ended without an outcome".into())),
        }
    }
}

impl Drop for SessionHandle {
    fn drop(&mut self) {
        if self.invalidator.invalidate("session handle dropped") {
            debug!("session handle dropped before the outcome, flow aborted");
        }
    }
}
