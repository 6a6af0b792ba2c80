use alloc::{boxed::Box, vec};

use crate::error::ConfigError;

/// A fixed capacity circular buffer of spectral flux values.
/// Pushing to a full buffer overwrites the oldest value.
#[derive(Debug, Clone, PartialEq)]
pub struct FluxHistory {
    values: Box<[f32]>,
    /// Index of the slot the next value is written to.
    write_index: usize,
    len: usize,
}

impl FluxHistory {
    /// Creates an empty history.
    pub fn new(capacity: usize) -> Result<Self, ConfigError> {
        if capacity == 0 {
            return Err(ConfigError::EmptyFluxHistory);
        }
        Ok(FluxHistory {
            values: vec![0.0; capacity].into_boxed_slice(),
            write_index: 0,
            len: 0,
        })
    }

    pub fn capacity(&self) -> usize {
        self.values.len()
    }

    /// The number of values pushed so far, at most `capacity`.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn push(&mut self, flux: f32) {
        let capacity = self.capacity();
        self.values[self.write_index] = flux;
        self.write_index = (self.write_index + 1) % capacity;
        if self.len < capacity {
            self.len += 1;
        }
    }

    /// The most recently pushed value.
    pub fn latest(&self) -> Option<f32> {
        self.recent(1).next()
    }

    /// Iterates over at most `count` of the most recent values, newest first.
    pub fn recent(&self, count: usize) -> impl Iterator<Item = f32> + '_ {
        let capacity = self.capacity();
        (0..count.min(self.len)).map(move |age| {
            let index = (self.write_index + capacity - 1 - age) % capacity;
            self.values[index]
        })
    }

    /// The mean of the `window` most recent values. Slots that have never been
    /// written count as zero flux, so the divisor is always `window`.
    pub fn recent_mean(&self, window: usize) -> f32 {
        if window == 0 {
            return 0.0;
        }
        let sum: f32 = self.recent(window).sum();
        sum / (window as f32)
    }
}
