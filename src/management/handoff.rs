use std::sync::{Mutex, PoisonError};

use tokio::sync::oneshot;

use crate::{Res, error::Error};

/// Creates a fresh one-shot rendezvous for a single authorization
/// attempt. The sender goes to the callback endpoint, the handoff stays
/// with the login operation.
pub fn code_handoff() -> (CodeSender, CodeHandoff) {
    let (tx, rx) = oneshot::channel();
    (
        CodeSender {
            tx: Mutex::new(Some(tx)),
        },
        CodeHandoff { rx },
    )
}

/// Producer half of the rendezvous.
///
/// Only the first delivery reaches the waiting operation; every later
/// attempt reports failure without blocking anything.
pub struct CodeSender {
    tx: Mutex<Option<oneshot::Sender<String>>>,
}

impl CodeSender {
    /// Delivers an authorization code to the waiting operation.
    ///
    /// Returns `false` when the code had nowhere to go, either because a
    /// code was already delivered or because the receiver is gone.
    pub fn deliver(&self, code: String) -> bool {
        let mut slot = self.tx.lock().unwrap_or_else(PoisonError::into_inner);
        match slot.take() {
            Some(tx) => tx.send(code).is_ok(),
            None => false,
        }
    }
}

/// Consumer half of the rendezvous.
pub struct CodeHandoff {
    rx: oneshot::Receiver<String>,
}

impl CodeHandoff {
    /// Waits for the authorization code to arrive.
    pub async fn receive(self) -> Res<String> {
        self.rx.await.map_err(|_| Error::HandoffClosed)
    }
}
