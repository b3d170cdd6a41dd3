//! Versioned single-value cells shared between producer and renderer threads.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Instant;

/// A value with the version and time it was published.
#[derive(Debug, Clone)]
pub struct Stamped<T> {
    pub value: T,
    /// Starts at 0 for the initial value and grows by one per publish.
    pub version: u64,
    pub updated_at: Instant,
}

/// Holds the latest published value. Each publish replaces the previous
/// value as a whole; readers never see a partially built one.
pub struct StateCell<T> {
    inner: Arc<Mutex<Stamped<T>>>,
}

impl<T> Clone for StateCell<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> StateCell<T> {
    pub fn new(initial: T) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Stamped {
                value: initial,
                version: 0,
                updated_at: Instant::now(),
            })),
        }
    }

    /// Replaces the value and returns its new version.
    pub fn publish(&self, value: T) -> u64 {
        let mut slot = self.lock();
        slot.value = value;
        slot.version += 1;
        slot.updated_at = Instant::now();
        slot.version
    }

    pub fn version(&self) -> u64 {
        self.lock().version
    }

    /// Runs `f` against the current value without cloning it.
    pub fn read<R>(&self, f: impl FnOnce(&Stamped<T>) -> R) -> R {
        f(&self.lock())
    }

    fn lock(&self) -> MutexGuard<'_, Stamped<T>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<T: Clone> StateCell<T> {
    pub fn snapshot(&self) -> Stamped<T> {
        self.lock().clone()
    }
}

impl<T: Default> Default for StateCell<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}
