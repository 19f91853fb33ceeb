//! Single-threaded notification signals.
//!
//! A [`Signal`] is a shared list of subscriber callbacks. Cloning a signal
//! yields another handle to the same list, which is how planes and diagrams
//! wire notifications into each other without borrowing one another.
//!
//! ```
//! use ordinate::signal::Signal;
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! let changed = Signal::<u32>::new();
//! let seen = Rc::new(Cell::new(0));
//! let sink = seen.clone();
//! let connection = changed.connect(move |v| sink.set(*v));
//!
//! changed.emit(&7);
//! assert_eq!(seen.get(), 7);
//!
//! assert!(changed.disconnect(connection));
//! changed.emit(&9);
//! assert_eq!(seen.get(), 7);
//! ```

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_CONNECTION: AtomicU64 = AtomicU64::new(1);

/// Handle identifying one subscription, returned by [`Signal::connect`].
///
/// Connection ids are unique across all signals, so a handle can never
/// disconnect a slot on a different signal by accident.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Connection(u64);

impl Connection {
    fn next() -> Self {
        Self(NEXT_CONNECTION.fetch_add(1, Ordering::Relaxed))
    }
}

type Slot<T> = Rc<dyn Fn(&T)>;

struct Slots<T> {
    entries: Vec<(Connection, Slot<T>)>,
}

/// Zero-or-more-subscriber notification channel.
pub struct Signal<T: 'static> {
    inner: Rc<RefCell<Slots<T>>>,
}

impl<T> Signal<T> {
    /// Create a signal with no subscribers.
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(Slots {
                entries: Vec::new(),
            })),
        }
    }

    /// Subscribe `slot`; it runs on every later [`emit`](Self::emit).
    pub fn connect(&self, slot: impl Fn(&T) + 'static) -> Connection {
        let connection = Connection::next();
        self.inner
            .borrow_mut()
            .entries
            .push((connection, Rc::new(slot)));
        connection
    }

    /// Remove a subscription. Returns `false` if it was not connected here.
    pub fn disconnect(&self, connection: Connection) -> bool {
        let mut inner = self.inner.borrow_mut();
        let before = inner.entries.len();
        inner.entries.retain(|(c, _)| *c != connection);
        inner.entries.len() != before
    }

    /// Number of live subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.inner.borrow().entries.len()
    }

    /// Call every subscriber with `value`, in connection order.
    ///
    /// Subscribers are snapshotted first: slots connected during emission run
    /// from the next emission, slots disconnected during emission still run
    /// this once.
    pub fn emit(&self, value: &T) {
        let snapshot: Vec<Slot<T>> = self
            .inner
            .borrow()
            .entries
            .iter()
            .map(|(_, slot)| slot.clone())
            .collect();
        for slot in snapshot {
            slot(value);
        }
    }

    /// Non-owning handle to the same subscriber list.
    pub fn downgrade(&self) -> WeakSignal<T> {
        WeakSignal {
            inner: Rc::downgrade(&self.inner),
        }
    }
}

impl Signal<()> {
    /// Emit a unit signal.
    pub fn notify(&self) {
        self.emit(&());
    }
}

impl<T> Default for Signal<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Signal<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T> fmt::Debug for Signal<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signal")
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

/// Weak counterpart of [`Signal`]; emitting through it after every strong
/// handle is gone does nothing.
pub struct WeakSignal<T: 'static> {
    inner: Weak<RefCell<Slots<T>>>,
}

impl<T> WeakSignal<T> {
    /// Recover a strong handle if the signal is still alive.
    pub fn upgrade(&self) -> Option<Signal<T>> {
        self.inner.upgrade().map(|inner| Signal { inner })
    }

    /// Emit if the signal is still alive. Returns whether it was.
    pub fn emit(&self, value: &T) -> bool {
        match self.upgrade() {
            Some(signal) => {
                signal.emit(value);
                true
            }
            None => false,
        }
    }
}

impl<T> Clone for WeakSignal<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T> fmt::Debug for WeakSignal<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeakSignal")
            .field("alive", &(self.inner.strong_count() > 0))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_emit_reaches_all_subscribers_in_order() {
        let signal = Signal::<i32>::new();
        let log = Rc::new(RefCell::new(Vec::new()));

        let a = log.clone();
        signal.connect(move |v| a.borrow_mut().push(("a", *v)));
        let b = log.clone();
        signal.connect(move |v| b.borrow_mut().push(("b", *v)));

        signal.emit(&3);
        assert_eq!(*log.borrow(), vec![("a", 3), ("b", 3)]);
    }

    #[test]
    fn test_disconnect_is_scoped_to_signal() {
        let first = Signal::<()>::new();
        let second = Signal::<()>::new();
        let c1 = first.connect(|_| {});
        let c2 = second.connect(|_| {});

        assert_ne!(c1, c2);
        assert!(!second.disconnect(c1));
        assert_eq!(second.subscriber_count(), 1);
        assert!(first.disconnect(c1));
        assert!(!first.disconnect(c1));
    }

    #[test]
    fn test_connect_during_emit_runs_next_time() {
        let signal = Signal::<()>::new();
        let hits = Rc::new(Cell::new(0));

        let inner_signal = signal.clone();
        let inner_hits = hits.clone();
        signal.connect(move |_| {
            let h = inner_hits.clone();
            inner_signal.connect(move |_| h.set(h.get() + 1));
        });

        signal.notify();
        assert_eq!(hits.get(), 0);
        signal.notify();
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn test_weak_signal_after_drop() {
        let signal = Signal::<()>::new();
        let weak = signal.downgrade();
        assert!(weak.emit(&()));
        drop(signal);
        assert!(!weak.emit(&()));
        assert!(weak.upgrade().is_none());
    }
}
