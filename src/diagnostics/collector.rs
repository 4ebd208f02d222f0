// SPDX-License-Identifier: MPL-2.0
//! Collector for aggregating and storing toast lifecycle events.
//!
//! The collector receives events from the toaster over a channel and stores
//! them in a circular buffer for later inspection.

use crossbeam_channel::{bounded, Receiver, Sender, TrySendError};

use super::buffer::{BufferCapacity, CircularBuffer};
use super::events::ToastEvent;

/// Handle for sending lifecycle events to the collector.
///
/// This handle is cheap to clone and can be shared across threads.
/// Events are sent via a bounded channel to avoid blocking the UI thread.
#[derive(Clone, Debug)]
pub struct DiagnosticsHandle {
    event_tx: Sender<ToastEvent>,
}

impl DiagnosticsHandle {
    /// Logs a lifecycle event.
    ///
    /// This method is non-blocking and will drop the event if the
    /// internal channel is full (backpressure protection).
    pub fn log_event(&self, event: ToastEvent) {
        let _ = self.event_tx.try_send(event);
    }

    /// Attempts to send an event, returning an error if the channel is full.
    ///
    /// Use this when you need to know if the event was actually sent.
    ///
    /// # Errors
    ///
    /// Returns `TrySendError::Full` if the internal channel buffer is full,
    /// or `TrySendError::Disconnected` if the collector has been dropped.
    pub fn try_log_event(&self, event: ToastEvent) -> Result<(), TrySendError<ToastEvent>> {
        self.event_tx.try_send(event)
    }
}

/// Central collector for lifecycle events.
///
/// The collector receives events through a channel and stores them in a
/// memory-bounded circular buffer. Old events are automatically evicted
/// when the buffer reaches capacity.
pub struct DiagnosticsCollector {
    /// Circular buffer storing lifecycle events.
    buffer: CircularBuffer<ToastEvent>,
    /// Receiver for incoming events.
    event_rx: Receiver<ToastEvent>,
    /// Sender stored to create handles.
    event_tx: Sender<ToastEvent>,
}

/// Default channel capacity for event buffering.
/// This allows some buffering without excessive memory usage.
const DEFAULT_CHANNEL_CAPACITY: usize = 100;

impl DiagnosticsCollector {
    /// Creates a new collector with the specified buffer capacity.
    #[must_use]
    pub fn new(capacity: BufferCapacity) -> Self {
        let (event_tx, event_rx) = bounded(DEFAULT_CHANNEL_CAPACITY);

        Self {
            buffer: CircularBuffer::new(capacity),
            event_rx,
            event_tx,
        }
    }

    /// Creates a handle for sending events to this collector.
    ///
    /// Handles are cheap to clone and can be distributed to different
    /// parts of the application.
    #[must_use]
    pub fn handle(&self) -> DiagnosticsHandle {
        DiagnosticsHandle {
            event_tx: self.event_tx.clone(),
        }
    }

    /// Processes all pending events from the channel.
    ///
    /// Call this periodically (e.g., on each UI tick) to drain the
    /// event channel and store events in the buffer.
    pub fn process_pending(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.buffer.push(event);
        }
    }

    /// Logs an event directly to the buffer (bypassing the channel).
    ///
    /// Use this for synchronous logging when you have direct access
    /// to the collector (e.g., in the main update loop).
    pub fn log_event(&mut self, event: ToastEvent) {
        self.buffer.push(event);
    }

    /// Returns the number of events currently stored.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Returns true if no events are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Returns an iterator over all stored events (oldest first).
    pub fn iter(&self) -> impl Iterator<Item = &ToastEvent> {
        self.buffer.iter()
    }

    /// Clears all stored events.
    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Returns the buffer capacity.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }
}

impl Default for DiagnosticsCollector {
    fn default() -> Self {
        Self::new(BufferCapacity::default())
    }
}
