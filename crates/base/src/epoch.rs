use std::sync::{
    Arc,
    atomic::{AtomicU64, Ordering},
};

/// Shared generation counter for a detection session.
///
/// Every clone observes the same value. Work is stamped with the epoch that
/// was current when it started; once `advance()` is called, anything stamped
/// with an older value is stale and its result is dropped.
#[derive(Clone, Debug)]
pub struct Epoch {
    value: Arc<AtomicU64>,
}

impl Default for Epoch {
    fn default() -> Self {
        Self::new()
    }
}

impl Epoch {
    pub fn new() -> Self {
        Self {
            value: Arc::new(AtomicU64::new(1)),
        }
    }

    pub fn current(&self) -> u64 {
        self.value.load(Ordering::Acquire)
    }

    /// Move to the next epoch and return it.
    pub fn advance(&self) -> u64 {
        self.value.fetch_add(1, Ordering::AcqRel) + 1
    }

    pub fn is_current(&self, epoch: u64) -> bool {
        epoch == self.current()
    }
}

/// A value stamped with the epoch it was created in.
#[derive(Clone, Debug)]
pub struct Stamped<T> {
    pub epoch: u64,
    pub inner: T,
}

impl<T> Stamped<T> {
    /// Unwrap the value if its epoch is still current.
    pub fn fresh(self, epoch: &Epoch) -> Option<T> {
        if epoch.is_current(self.epoch) {
            Some(self.inner)
        } else {
            None
        }
    }
}
