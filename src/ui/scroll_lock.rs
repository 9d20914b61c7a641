// SPDX-License-Identifier: MPL-2.0
//! Process-wide suppression of background scrolling while an overlay panel
//! is open.
//!
//! The suppression is reference counted so that two panels open at the same
//! time keep the page locked until both have closed. Each open panel holds a
//! [`ScrollLock`] guard; dropping the guard (panel closed or panel state
//! destroyed) releases its share of the lock.

use std::sync::atomic::{AtomicUsize, Ordering};

/// Reference counter behind a set of [`ScrollLock`] guards.
///
/// The process-wide instance is reached through [`acquire`] and [`is_locked`];
/// tests can use their own counter to stay isolated from other tests.
#[derive(Debug)]
pub struct LockCounter(AtomicUsize);

impl LockCounter {
    #[must_use]
    pub const fn new() -> Self {
        Self(AtomicUsize::new(0))
    }

    /// Takes one share of the lock.
    pub fn acquire(&'static self) -> ScrollLock {
        self.0.fetch_add(1, Ordering::SeqCst);
        ScrollLock { counter: self }
    }

    /// Returns true while at least one guard is alive.
    pub fn is_locked(&self) -> bool {
        self.0.load(Ordering::SeqCst) > 0
    }

    fn release(&self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

impl Default for LockCounter {
    fn default() -> Self {
        Self::new()
    }
}

/// RAII guard for one share of the scroll suppression.
///
/// Held by an open panel; releasing happens on drop, so a panel that is
/// destroyed while open can never leave the page in a suppressed-scroll state.
#[derive(Debug)]
pub struct ScrollLock {
    counter: &'static LockCounter,
}

impl Drop for ScrollLock {
    fn drop(&mut self) {
        self.counter.release();
    }
}

static PROCESS_COUNTER: LockCounter = LockCounter::new();

/// Takes one share of the process-wide scroll lock.
#[must_use]
pub fn acquire() -> ScrollLock {
    PROCESS_COUNTER.acquire()
}

/// Returns true while any panel in the process holds the lock.
#[must_use]
pub fn is_locked() -> bool {
    PROCESS_COUNTER.is_locked()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lock_is_released_when_guard_drops() {
        static COUNTER: LockCounter = LockCounter::new();

        assert!(!COUNTER.is_locked());
        let guard = COUNTER.acquire();
        assert!(COUNTER.is_locked());
        drop(guard);
        assert!(!COUNTER.is_locked());
    }

    #[test]
    fn two_guards_keep_the_lock_until_both_drop() {
        static COUNTER: LockCounter = LockCounter::new();

        let first = COUNTER.acquire();
        let second = COUNTER.acquire();

        drop(first);
        assert!(
            COUNTER.is_locked(),
            "lock must survive while a second panel is open"
        );

        drop(second);
        assert!(!COUNTER.is_locked());
    }

    #[test]
    fn release_order_does_not_matter() {
        static COUNTER: LockCounter = LockCounter::new();

        let first = COUNTER.acquire();
        let second = COUNTER.acquire();

        drop(second);
        assert!(COUNTER.is_locked());
        drop(first);
        assert!(!COUNTER.is_locked());
    }
}
