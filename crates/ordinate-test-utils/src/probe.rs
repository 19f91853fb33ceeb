//! Signal observation for tests.

use ordinate::signal::{Connection, Signal};
use parking_lot::Mutex;
use std::sync::Arc;

/// Keeps every value a signal emits while attached.
///
/// Disconnects itself when dropped.
pub struct SignalProbe<T: Clone + 'static> {
    signal: Signal<T>,
    connection: Connection,
    values: Arc<Mutex<Vec<T>>>,
}

impl<T: Clone + 'static> SignalProbe<T> {
    pub fn attach(signal: &Signal<T>) -> Self {
        let values = Arc::new(Mutex::new(Vec::new()));
        let sink = values.clone();
        let connection = signal.connect(move |value: &T| sink.lock().push(value.clone()));
        Self {
            signal: signal.clone(),
            connection,
            values,
        }
    }

    /// Emissions seen so far.
    pub fn count(&self) -> usize {
        self.values.lock().len()
    }

    pub fn values(&self) -> Vec<T> {
        self.values.lock().clone()
    }

    pub fn last(&self) -> Option<T> {
        self.values.lock().last().cloned()
    }

    /// Forget what was seen, returning it.
    pub fn take(&self) -> Vec<T> {
        std::mem::take(&mut *self.values.lock())
    }
}

impl<T: Clone + 'static> Drop for SignalProbe<T> {
    fn drop(&mut self) {
        self.signal.disconnect(self.connection);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_probe_records_and_detaches() {
        let signal: Signal<u32> = Signal::new();
        {
            let probe = SignalProbe::attach(&signal);
            signal.emit(&3);
            signal.emit(&5);
            assert_eq!(probe.count(), 2);
            assert_eq!(probe.last(), Some(5));
            assert_eq!(probe.take(), vec![3, 5]);
            assert_eq!(probe.count(), 0);
        }
        assert_eq!(signal.subscriber_count(), 0);
    }
}
