//! Observable state holders.
//!
//! An [`Observable<T>`] owns the latest value of one piece of view state and
//! notifies subscribers whenever that value is replaced.  It is a thin wrapper
//! around [`tokio::sync::watch`]:
//!
//! - Writers call [`Observable::replace`]; the new value becomes visible to
//!   every reader in one atomic step.  There is no partial update and no lock
//!   held across an `.await`.
//! - Readers either take a snapshot with [`Observable::get`] or call
//!   [`Observable::subscribe`] and `await receiver.changed()` to re-render on
//!   change instead of polling.
//!
//! Only the synchronization layer holds an `Observable`; the presentation
//! layer only ever sees `watch::Receiver`s and cloned snapshots.

use tokio::sync::watch;

/// A value holder that notifies subscribers on replacement.
#[derive(Debug)]
pub struct Observable<T> {
    tx: watch::Sender<T>,
}

impl<T: Clone> Observable<T> {
    /// Creates a holder with an initial value.
    pub fn new(initial: T) -> Self {
        // The initial receiver is dropped; `send_replace` keeps working
        // without live receivers, and `subscribe` creates new ones.
        let (tx, _rx) = watch::channel(initial);
        Self { tx }
    }

    /// Returns a clone of the current value.
    pub fn get(&self) -> T {
        self.tx.borrow().clone()
    }

    /// Returns a receiver that observes every subsequent replacement.
    pub fn subscribe(&self) -> watch::Receiver<T> {
        self.tx.subscribe()
    }

    /// Atomically replaces the current value, returning the previous one.
    pub fn replace(&self, value: T) -> T {
        self.tx.send_replace(value)
    }

    /// Number of live subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl<T: Clone + Default> Default for Observable<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
