// t4tag/src/file/slot.rs
//! Swappable NDEF file shared between sessions.

use std::sync::{Arc, PoisonError, RwLock};

use super::NdefFile;

/// Shared handle to the active NDEF file.
///
/// Readers take a clone of the current `Arc<NdefFile>` and keep working on
/// it; `replace` swaps in a new buffer. A READ BINARY therefore always sees
/// either the old or the new file, never a mix.
#[derive(Debug, Clone)]
pub struct NdefFileSlot {
    inner: Arc<RwLock<Arc<NdefFile>>>,
}

impl NdefFileSlot {
    /// Slot initially holding `file`.
    pub fn new(file: NdefFile) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Arc::new(file))),
        }
    }

    /// Current file. The lock only guards the pointer, so a poisoned lock
    /// still holds a complete file and is recovered.
    pub fn load(&self) -> Arc<NdefFile> {
        let guard = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&guard)
    }

    /// Swap in `file`, returning the previous one.
    pub fn replace(&self, file: NdefFile) -> Arc<NdefFile> {
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        std::mem::replace(&mut *guard, Arc::new(file))
    }
}
