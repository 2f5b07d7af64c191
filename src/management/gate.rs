use std::sync::Arc;

use tokio::sync::{Mutex, OwnedMutexGuard};

/// Mutual exclusion for chat-triggered operations.
///
/// At most one login or shuffle runs at any time. Acquisition never
/// waits: either the permit is free and the caller takes it in the same
/// step, or the caller is told the bot is busy. There is no window in
/// which two callers can both observe a free gate and proceed.
#[derive(Clone)]
pub struct OperationGate {
    inner: Arc<Mutex<()>>,
}

/// Proof of exclusive access.
///
/// The gate reopens when the permit is dropped, so an operation holds it
/// for exactly its own lifetime, early returns included.
pub struct OperationPermit {
    _guard: OwnedMutexGuard<()>,
}

impl OperationGate {
    pub fn new() -> Self {
        OperationGate {
            inner: Arc::new(Mutex::new(())),
        }
    }

    /// Attempts to take the permit without waiting.
    ///
    /// Returns `None` when another operation currently holds it.
    pub fn try_acquire(&self) -> Option<OperationPermit> {
        self.inner
            .clone()
            .try_lock_owned()
            .ok()
            .map(|guard| OperationPermit { _guard: guard })
    }
}

impl Default for OperationGate {
    fn default() -> Self {
        Self::new()
    }
}
