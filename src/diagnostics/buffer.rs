// SPDX-License-Identifier: MPL-2.0
//! Memory-bounded circular buffer for lifecycle events.
//!
//! The buffer holds a fixed maximum number of events. Once full, pushing a
//! new event evicts the oldest one, so memory usage stays constant no matter
//! how long the collector runs.

use std::collections::VecDeque;

use crate::config::defaults::{
    DEFAULT_EVENT_BUFFER_CAPACITY, MAX_EVENT_BUFFER_CAPACITY, MIN_EVENT_BUFFER_CAPACITY,
};

/// Capacity for the event buffer.
///
/// This newtype enforces validity at the type level, ensuring the value is
/// always within the supported range.
///
/// # Example
///
/// ```
/// use iced_toaster::diagnostics::BufferCapacity;
///
/// let capacity = BufferCapacity::new(1000);
/// assert_eq!(capacity.value(), 1000);
///
/// // Values outside the range are clamped.
/// let too_high = BufferCapacity::new(50_000);
/// assert_eq!(too_high.value(), 10_000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BufferCapacity(usize);

impl BufferCapacity {
    /// Creates a new buffer capacity, clamping to the valid range.
    #[must_use]
    pub fn new(value: usize) -> Self {
        Self(value.clamp(MIN_EVENT_BUFFER_CAPACITY, MAX_EVENT_BUFFER_CAPACITY))
    }

    /// Returns the value as usize.
    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }

    /// Returns true if this is the minimum supported capacity.
    #[must_use]
    pub fn is_min(self) -> bool {
        self.0 <= MIN_EVENT_BUFFER_CAPACITY
    }

    /// Returns true if this is the maximum supported capacity.
    #[must_use]
    pub fn is_max(self) -> bool {
        self.0 >= MAX_EVENT_BUFFER_CAPACITY
    }
}

impl Default for BufferCapacity {
    fn default() -> Self {
        Self(DEFAULT_EVENT_BUFFER_CAPACITY)
    }
}

/// A fixed-capacity buffer that evicts the oldest entry when full.
#[derive(Debug)]
pub struct CircularBuffer<T> {
    data: VecDeque<T>,
    capacity: usize,
}

impl<T> CircularBuffer<T> {
    /// Creates a new buffer with the given capacity.
    #[must_use]
    pub fn new(capacity: BufferCapacity) -> Self {
        Self {
            data: VecDeque::with_capacity(capacity.value()),
            capacity: capacity.value(),
        }
    }

    /// Pushes an item, evicting the oldest item if the buffer is full.
    pub fn push(&mut self, item: T) {
        if self.data.len() == self.capacity {
            self.data.pop_front();
        }
        self.data.push_back(item);
    }

    /// Returns an iterator over stored items, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    /// Returns the number of items currently stored.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if no items are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the maximum number of items the buffer can hold.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Removes all stored items. The capacity is unchanged.
    pub fn clear(&mut self) {
        self.data.clear();
    }
}
