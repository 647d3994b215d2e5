//! Bounded ring buffer holding the tip position history.
//!
//! Newest-first: `push` inserts at the front and eviction removes the
//! oldest (back) entry once the capacity is exceeded. The capacity tracks
//! the pixel width of the trace lane and is the only bound on growth; the
//! buffer must never silently exceed it.

use std::collections::VecDeque;

#[derive(Clone, Debug)]
pub struct TraceBuffer {
    samples: VecDeque<f32>,
    capacity: usize,
}

impl TraceBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            samples: VecDeque::with_capacity(capacity.min(4096)),
            capacity,
        }
    }

    /// Insert a new sample at the front, evicting the oldest entry if the
    /// buffer is at capacity. With capacity 0 the buffer stays empty.
    pub fn push(&mut self, value: f32) {
        self.samples.push_front(value);
        while self.samples.len() > self.capacity {
            self.samples.pop_back();
        }
    }

    /// Change the capacity. On shrink, evicts from the back immediately so
    /// the invariant `len() <= capacity()` holds before the next push.
    pub fn set_capacity(&mut self, capacity: usize) {
        self.capacity = capacity;
        while self.samples.len() > self.capacity {
            self.samples.pop_back();
        }
    }

    pub fn clear(&mut self) {
        self.samples.clear();
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Samples newest-first.
    pub fn iter(&self) -> impl Iterator<Item = f32> + '_ {
        self.samples.iter().copied()
    }

    /// Newest-first contiguous copy, for the spline reconstructor.
    pub fn as_vec(&self) -> Vec<f32> {
        self.samples.iter().copied().collect()
    }

    /// Oldest retained sample, if any.
    pub fn oldest(&self) -> Option<f32> {
        self.samples.back().copied()
    }
}
