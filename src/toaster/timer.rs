// SPDX-License-Identifier: MPL-2.0
//! Cancellable one-shot dismissal timers.
//!
//! Each shown toast arms exactly one timer for its auto-dismissal deadline.
//! Timers do not run on their own thread; the toaster drives them from the
//! periodic tick subscription by calling [`DismissTimers::fire_due`] with the
//! tick instant. A timer fires at most once: firing and cancelling both
//! remove it.

use super::request::ToastId;
use std::time::Instant;

/// The set of armed dismissal deadlines, keyed by toast ID.
///
/// Holds at most one deadline per toast. The collection stays small (bounded
/// by the shown-toast limit), so a plain vector is used.
#[derive(Debug, Default)]
pub struct DismissTimers {
    deadlines: Vec<(ToastId, Instant)>,
}

impl DismissTimers {
    /// Creates an empty timer set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Arms a one-shot timer for `id` at `deadline`.
    ///
    /// Re-arming an already armed toast replaces its deadline.
    pub fn arm(&mut self, id: ToastId, deadline: Instant) {
        self.cancel(id);
        self.deadlines.push((id, deadline));
    }

    /// Cancels the timer for `id`, if one is armed.
    ///
    /// Returns `true` when a timer was removed. A cancelled timer never
    /// fires.
    pub fn cancel(&mut self, id: ToastId) -> bool {
        let before = self.deadlines.len();
        self.deadlines.retain(|(armed, _)| *armed != id);
        self.deadlines.len() != before
    }

    /// Removes and returns every toast whose deadline has been reached at
    /// `now`, ordered by deadline (earliest first).
    pub fn fire_due(&mut self, now: Instant) -> Vec<ToastId> {
        let mut due: Vec<(ToastId, Instant)> = Vec::new();
        self.deadlines.retain(|entry| {
            if entry.1 <= now {
                due.push(*entry);
                false
            } else {
                true
            }
        });
        due.sort_by_key(|(_, deadline)| *deadline);
        due.into_iter().map(|(id, _)| id).collect()
    }

    /// Returns whether a timer is currently armed for `id`.
    pub fn is_armed(&self, id: ToastId) -> bool {
        self.deadlines.iter().any(|(armed, _)| *armed == id)
    }

    /// Returns the earliest armed deadline, if any.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.deadlines.iter().map(|(_, deadline)| *deadline).min()
    }

    /// Returns the number of armed timers.
    pub fn len(&self) -> usize {
        self.deadlines.len()
    }

    /// Returns whether no timers are armed.
    pub fn is_empty(&self) -> bool {
        self.deadlines.is_empty()
    }

    /// Cancels every armed timer.
    pub fn clear(&mut self) {
        self.deadlines.clear();
    }
}
