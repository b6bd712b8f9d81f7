// SPDX-License-Identifier: Unlicense

//! Critical section around shared tracer state.

use spin::{Mutex, MutexGuard};

/// Wraps a generic object in a spin Mutex.
///
/// The single-core firmware this runs on has no scheduler, so a holder is
/// never descheduled. Code that may pre-empt a holder, such as an interrupt
/// handler, must use [`Locked::try_lock`] or it spins forever.
pub struct Locked<A> {
    inner: Mutex<A>,
}

impl<A> Locked<A> {
    /// Create a Mutex wrapping an object.
    pub const fn new(inner: A) -> Self {
        Locked {
            inner: Mutex::new(inner),
        }
    }

    /// Hold the lock while the guard is live.
    ///
    /// NOTE: Cannot trace here as the global tracer is a Locked object.
    pub fn lock(&self) -> MutexGuard<'_, A> {
        self.inner.lock()
    }

    /// Take the lock only if nobody holds it.
    pub fn try_lock(&self) -> Option<MutexGuard<'_, A>> {
        self.inner.try_lock()
    }

    /// Run `f` with the lock held.
    pub fn with<R>(&self, f: impl FnOnce(&mut A) -> R) -> R {
        f(&mut *self.lock())
    }
}
