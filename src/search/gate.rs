//! Counting admission gate bounding how many branches run at once.

use parking_lot::{Condvar, Mutex};

pub(crate) struct AdmissionGate {
    available: Mutex<usize>,
    released: Condvar,
}

/// A held slot. Dropping it frees the slot and wakes one waiter.
pub(crate) struct Permit<'a> {
    gate: &'a AdmissionGate,
}

impl AdmissionGate {
    pub(crate) fn new(slots: usize) -> Self {
        Self {
            available: Mutex::new(slots),
            released: Condvar::new(),
        }
    }

    /// Blocks until a slot is free and takes it.
    pub(crate) fn acquire(&self) -> Permit<'_> {
        let mut available = self.available.lock();
        while *available == 0 {
            self.released.wait(&mut available);
        }
        *available -= 1;
        Permit { gate: self }
    }

    #[cfg(test)]
    fn available(&self) -> usize {
        *self.available.lock()
    }
}

impl Drop for Permit<'_> {
    fn drop(&mut self) {
        *self.gate.available.lock() += 1;
        self.gate.released.notify_one();
    }
}
