// SPDX-License-Identifier: MPL-2.0
//! Toast lifecycle management.
//!
//! The `Toaster` handles admission, stacking positions, display timing, and
//! dismissal of toasts. It limits the number of concurrently shown cards and
//! parks overflow requests in a waiting queue.
//!
//! # Stacking positions
//!
//! Shown cards occupy 1-based stacking positions counted from the bottom
//! window edge. Position 1 is always the most recently admitted card:
//! admission shifts every shown card one slot outward, and removal re-packs
//! the survivors densely so the newest remaining card returns to position 1.

use super::request::{ToastId, ToastRequest};
use super::timer::DismissTimers;
use crate::config::defaults::TICK_INTERVAL_MS;
use crate::config::ToasterConfig;
use crate::diagnostics::{DiagnosticsHandle, ToastEvent};
use crate::ui::card::{CloseButton, ToastCard};
use crate::ui::design_tokens::{animation, spacing};
use crate::ui::stamp::{StampedToast, Stamper};
use iced::{time, Subscription};
use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Messages for toast state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// Close a specific toast by ID (close button press).
    Close(ToastId),
    /// Periodic tick driving dismissal timers and animations.
    Tick(Instant),
}

/// Returns the bottom offset, in logical pixels, of a stacking position.
#[must_use]
pub fn offset_for_position(position: usize) -> f32 {
    spacing::BASE_GAP + spacing::SLOT_HEIGHT * (position.saturating_sub(1)) as f32
}

/// Symmetric ease-in-out, like the CSS timing function the offset
/// transition uses.
fn ease_in_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}

/// A shown toast: its card, close wiring, and stacking state.
#[derive(Debug, Clone)]
pub struct ShownEntry {
    card: ToastCard,
    close_button: Option<CloseButton>,
    /// Current 1-based stacking position.
    position: usize,
    /// Position occupied before the last move, kept for the eased offset
    /// transition.
    previous_position: Option<usize>,
    /// When the last move happened.
    moved_at: Option<Instant>,
}

impl ShownEntry {
    fn new(stamped: StampedToast) -> Self {
        Self {
            card: stamped.card,
            close_button: stamped.close_button,
            position: 1,
            previous_position: None,
            moved_at: None,
        }
    }

    /// Returns the card.
    #[must_use]
    pub fn card(&self) -> &ToastCard {
        &self.card
    }

    /// Returns the close button, if close chrome is configured.
    #[must_use]
    pub fn close_button(&self) -> Option<&CloseButton> {
        self.close_button.as_ref()
    }

    /// Returns the current stacking position.
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    fn set_position(&mut self, position: usize, now: Instant) {
        if position != self.position {
            self.previous_position = Some(self.position);
            self.moved_at = Some(now);
            self.position = position;
        }
    }

    /// Returns the card's bottom offset at `now`, eased while a move is in
    /// flight and settled on the position target otherwise.
    #[must_use]
    pub fn bottom_offset(&self, now: Instant) -> f32 {
        let target = offset_for_position(self.position);
        let (Some(previous), Some(moved_at)) = (self.previous_position, self.moved_at) else {
            return target;
        };

        let elapsed = now.saturating_duration_since(moved_at).as_secs_f32() * 1000.0;
        let t = elapsed / animation::RESTACK_MS as f32;
        if t >= 1.0 {
            target
        } else {
            lerp(offset_for_position(previous), target, ease_in_out(t))
        }
    }
}

/// Manages the waiting queue and shown toasts.
#[derive(Debug)]
pub struct Toaster {
    config: ToasterConfig,
    /// Stamps cards out of the shared skeleton.
    stamper: Stamper,
    /// Currently shown toasts, in admission order (oldest first).
    shown: Vec<ShownEntry>,
    /// Requests waiting for a free slot, in arrival order.
    waiting: VecDeque<ToastRequest>,
    /// One armed dismissal deadline per shown toast.
    timers: DismissTimers,
    /// Optional diagnostics handle for logging lifecycle events.
    diagnostics: Option<DiagnosticsHandle>,
}

impl Toaster {
    /// Creates an empty toaster with the given configuration.
    #[must_use]
    pub fn new(config: ToasterConfig) -> Self {
        Self {
            stamper: Stamper::new(&config),
            config,
            shown: Vec::new(),
            waiting: VecDeque::new(),
            timers: DismissTimers::new(),
            diagnostics: None,
        }
    }

    /// Sets the diagnostics handle for logging lifecycle events.
    ///
    /// A configured limit that needed normalization is reported here, since
    /// no handle existed when the configuration was read.
    pub fn set_diagnostics(&mut self, handle: DiagnosticsHandle) {
        if self.config.limit <= 0 {
            handle.log_event(ToastEvent::limit_normalized(
                self.config.limit,
                self.config.effective_limit(),
            ));
        }
        self.diagnostics = Some(handle);
    }

    /// Shows an error toast.
    pub fn error(&mut self, message: impl Into<String>) {
        self.show(ToastRequest::error(message));
    }

    /// Shows a warning toast.
    pub fn warn(&mut self, message: impl Into<String>) {
        self.show(ToastRequest::warning(message));
    }

    /// Shows a success toast.
    pub fn success(&mut self, message: impl Into<String>) {
        self.show(ToastRequest::success(message));
    }

    /// Shows an information toast.
    pub fn inform(&mut self, message: impl Into<String>) {
        self.show(ToastRequest::information(message));
    }

    /// Shows a toast for `request`.
    ///
    /// If fewer than the configured limit of toasts are showing, the card
    /// appears immediately at stacking position 1 and every other shown card
    /// shifts one slot outward. Otherwise the request joins the waiting
    /// queue and is admitted, in arrival order, as slots free up.
    pub fn show(&mut self, request: ToastRequest) {
        let now = Instant::now();
        if self.shown.len() < self.config.effective_limit() {
            self.log(ToastEvent::admitted(request.id(), request.severity()));
            self.admit(request, now);
        } else {
            self.log(ToastEvent::queued(request.id(), request.severity()));
            self.waiting.push_back(request);
        }
    }

    /// Closes a shown toast, cancelling its dismissal timer.
    ///
    /// Returns `true` if the toast was found and removed.
    pub fn close(&mut self, id: ToastId) -> bool {
        let now = Instant::now();
        match self.remove(id, now) {
            Some(entry) => {
                self.log(ToastEvent::manually_dismissed(
                    entry.card.id(),
                    entry.card.severity(),
                ));
                true
            }
            None => false,
        }
    }

    /// Processes a tick, dismissing every toast whose deadline `now` has
    /// reached.
    pub fn tick(&mut self, now: Instant) {
        for id in self.timers.fire_due(now) {
            if let Some(entry) = self.remove(id, now) {
                self.log(ToastEvent::auto_dismissed(
                    entry.card.id(),
                    entry.card.severity(),
                ));
            }
        }
    }

    /// Handles a toast message.
    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Close(id) => {
                self.close(*id);
            }
            Message::Tick(now) => self.tick(*now),
        }
    }

    /// Creates the periodic tick subscription driving dismissal timers and
    /// entrance/re-stack animations.
    ///
    /// Idle while nothing is shown or waiting, so an inactive toaster costs
    /// the host nothing.
    pub fn subscription(&self) -> Subscription<Message> {
        if self.has_toasts() {
            time::every(Duration::from_millis(TICK_INTERVAL_MS)).map(Message::Tick)
        } else {
            Subscription::none()
        }
    }

    /// Returns the currently shown toasts, in admission order.
    pub fn shown(&self) -> impl Iterator<Item = &ShownEntry> {
        self.shown.iter()
    }

    /// Returns the number of shown toasts.
    #[must_use]
    pub fn shown_count(&self) -> usize {
        self.shown.len()
    }

    /// Returns the number of waiting requests.
    #[must_use]
    pub fn waiting_count(&self) -> usize {
        self.waiting.len()
    }

    /// Returns whether any toast is shown or waiting.
    #[must_use]
    pub fn has_toasts(&self) -> bool {
        !self.shown.is_empty() || !self.waiting.is_empty()
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &ToasterConfig {
        &self.config
    }

    /// Drops every shown card and waiting request and cancels all timers.
    pub fn clear(&mut self) {
        let cleared = self.shown.len() + self.waiting.len();
        self.timers.clear();
        self.shown.clear();
        self.waiting.clear();
        if cleared > 0 {
            self.log(ToastEvent::cleared(cleared));
        }
    }

    /// Admits a request: shifts shown cards outward, stamps the card into
    /// position 1, and arms its dismissal timer.
    fn admit(&mut self, request: ToastRequest, now: Instant) {
        for entry in &mut self.shown {
            entry.set_position(entry.position + 1, now);
        }
        let stamped = self.stamper.stamp(&request, now);
        self.timers.arm(request.id(), now + self.config.show_duration());
        self.shown.push(ShownEntry::new(stamped));
    }

    /// Removes a shown toast and returns its entry.
    ///
    /// Survivors are re-packed densely by recency (the newest remaining card
    /// takes position 1), then waiting requests are promoted into the freed
    /// slots.
    fn remove(&mut self, id: ToastId, now: Instant) -> Option<ShownEntry> {
        let index = self.shown.iter().position(|entry| entry.card.id() == id)?;
        let entry = self.shown.remove(index);
        self.timers.cancel(id);

        let mut next = self.shown.len();
        for survivor in &mut self.shown {
            survivor.set_position(next, now);
            next -= 1;
        }

        self.promote_from_waiting(now);
        Some(entry)
    }

    /// Promotes waiting requests into free slots through the standard
    /// admission path.
    fn promote_from_waiting(&mut self, now: Instant) {
        while self.shown.len() < self.config.effective_limit() {
            let Some(request) = self.waiting.pop_front() else {
                break;
            };
            self.log(ToastEvent::promoted(request.id(), request.severity()));
            self.admit(request, now);
        }
    }

    fn log(&self, event: ToastEvent) {
        if let Some(handle) = &self.diagnostics {
            handle.log_event(event);
        }
    }
}

impl Default for Toaster {
    fn default() -> Self {
        Self::new(ToasterConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn toaster_with_limit(limit: i32) -> Toaster {
        Toaster::new(ToasterConfig {
            limit,
            ..ToasterConfig::default()
        })
    }

    fn position_of(toaster: &Toaster, id: ToastId) -> usize {
        toaster
            .shown()
            .find(|entry| entry.card().id() == id)
            .map(ShownEntry::position)
            .expect("toast should be shown")
    }

    /// A tick instant far past every deadline armed so far.
    fn long_after() -> Instant {
        Instant::now() + Duration::from_secs(3600)
    }

    #[test]
    fn new_toaster_is_empty() {
        let toaster = Toaster::default();
        assert_eq!(toaster.shown_count(), 0);
        assert_eq!(toaster.waiting_count(), 0);
        assert!(!toaster.has_toasts());
    }

    #[test]
    fn show_displays_at_position_one_when_space_available() {
        let mut toaster = Toaster::default();
        let request = ToastRequest::success("saved");
        let id = request.id();

        toaster.show(request);

        assert_eq!(toaster.shown_count(), 1);
        assert_eq!(toaster.waiting_count(), 0);
        assert_eq!(position_of(&toaster, id), 1);
        assert!(toaster.timers.is_armed(id));
    }

    #[test]
    fn admission_shifts_existing_cards_outward() {
        let mut toaster = Toaster::default();
        let first = ToastRequest::information("first");
        let second = ToastRequest::information("second");
        let (first_id, second_id) = (first.id(), second.id());

        toaster.show(first);
        toaster.show(second);

        assert_eq!(position_of(&toaster, second_id), 1);
        assert_eq!(position_of(&toaster, first_id), 2);
    }

    #[test]
    fn show_queues_when_shown_is_full() {
        let mut toaster = toaster_with_limit(2);

        toaster.inform("a");
        toaster.inform("b");
        assert_eq!(toaster.shown_count(), 2);
        assert_eq!(toaster.waiting_count(), 0);

        toaster.inform("c");
        assert_eq!(toaster.shown_count(), 2);
        assert_eq!(toaster.waiting_count(), 1);
    }

    #[test]
    fn close_removes_and_repacks_by_recency() {
        let mut toaster = Toaster::default();
        let a = ToastRequest::information("a");
        let b = ToastRequest::information("b");
        let c = ToastRequest::information("c");
        let (a_id, b_id, c_id) = (a.id(), b.id(), c.id());

        toaster.show(a);
        toaster.show(b);
        toaster.show(c);
        assert_eq!(position_of(&toaster, c_id), 1);
        assert_eq!(position_of(&toaster, b_id), 2);
        assert_eq!(position_of(&toaster, a_id), 3);

        assert!(toaster.close(b_id));

        // The newest survivor returns to position 1.
        assert_eq!(position_of(&toaster, c_id), 1);
        assert_eq!(position_of(&toaster, a_id), 2);
    }

    #[test]
    fn closing_a_shown_toast_admits_the_waiting_head() {
        let mut toaster = toaster_with_limit(2);
        let a = ToastRequest::information("a");
        let b = ToastRequest::information("b");
        let c = ToastRequest::information("c");
        let (a_id, b_id, c_id) = (a.id(), b.id(), c.id());

        toaster.show(a);
        toaster.show(b);
        toaster.show(c);
        assert_eq!(toaster.waiting_count(), 1);

        assert!(toaster.close(a_id));

        // C is admitted through the standard path: position 1, B shifted out.
        assert_eq!(toaster.shown_count(), 2);
        assert_eq!(toaster.waiting_count(), 0);
        assert_eq!(position_of(&toaster, c_id), 1);
        assert_eq!(position_of(&toaster, b_id), 2);
        assert!(toaster.timers.is_armed(c_id));
    }

    #[test]
    fn close_unknown_toast_returns_false() {
        let mut toaster = Toaster::default();
        assert!(!toaster.close(ToastId::new()));
    }

    #[test]
    fn close_cancels_the_dismissal_timer() {
        let mut toaster = Toaster::default();
        let request = ToastRequest::warning("closing soon");
        let id = request.id();

        toaster.show(request);
        assert!(toaster.timers.is_armed(id));
        let stale_deadline = toaster.timers.next_deadline().expect("armed above");

        toaster.close(id);
        assert!(!toaster.timers.is_armed(id));

        // The cancelled deadline must not claim a toast admitted afterwards.
        let replacement = ToastRequest::warning("staying");
        let replacement_id = replacement.id();
        toaster.show(replacement);
        toaster.tick(stale_deadline);

        assert_eq!(toaster.shown_count(), 1);
        assert!(toaster.timers.is_armed(replacement_id));
    }

    #[test]
    fn tick_dismisses_expired_toasts() {
        let mut toaster = Toaster::default();
        let request = ToastRequest::success("done");
        let id = request.id();

        toaster.show(request);
        toaster.tick(long_after());

        assert_eq!(toaster.shown_count(), 0);
        assert!(!toaster.timers.is_armed(id));
    }

    #[test]
    fn tick_before_the_deadline_keeps_the_toast() {
        let before_showing = Instant::now();
        let mut toaster = Toaster::default();
        toaster.inform("patience");

        toaster.tick(before_showing);

        assert_eq!(toaster.shown_count(), 1);
    }

    #[test]
    fn expiry_promotes_the_waiting_head() {
        let mut toaster = toaster_with_limit(1);
        let a = ToastRequest::information("a");
        let b = ToastRequest::information("b");
        let b_id = b.id();

        toaster.show(a);
        toaster.show(b);
        assert_eq!(toaster.waiting_count(), 1);

        toaster.tick(long_after());

        assert_eq!(toaster.shown_count(), 1);
        assert_eq!(toaster.waiting_count(), 0);
        assert_eq!(position_of(&toaster, b_id), 1);
    }

    #[test]
    fn waiting_requests_are_admitted_in_arrival_order() {
        let mut toaster = toaster_with_limit(1);
        let a = ToastRequest::information("a");
        let b = ToastRequest::information("b");
        let c = ToastRequest::information("c");
        let (a_id, b_id, c_id) = (a.id(), b.id(), c.id());

        toaster.show(a);
        toaster.show(b);
        toaster.show(c);

        toaster.close(a_id);
        assert_eq!(position_of(&toaster, b_id), 1);

        toaster.close(b_id);
        assert_eq!(position_of(&toaster, c_id), 1);
    }

    #[test]
    fn positions_stay_dense_and_unique() {
        let mut toaster = toaster_with_limit(4);
        let requests: Vec<ToastRequest> = (0..4)
            .map(|i| ToastRequest::information(format!("toast-{i}")))
            .collect();
        let ids: Vec<ToastId> = requests.iter().map(ToastRequest::id).collect();
        for request in requests {
            toaster.show(request);
        }

        toaster.close(ids[1]);
        toaster.close(ids[3]);

        let mut positions: Vec<usize> = toaster.shown().map(ShownEntry::position).collect();
        positions.sort_unstable();
        assert_eq!(positions, vec![1, 2]);
    }

    #[test]
    fn non_positive_limit_behaves_as_default() {
        let mut toaster = toaster_with_limit(0);

        for i in 0..6 {
            toaster.inform(format!("toast-{i}"));
        }

        assert_eq!(toaster.shown_count(), 5);
        assert_eq!(toaster.waiting_count(), 1);
    }

    #[test]
    fn clear_drops_everything_and_cancels_timers() {
        let mut toaster = toaster_with_limit(2);
        for i in 0..4 {
            toaster.inform(format!("toast-{i}"));
        }

        let stale_deadline = toaster.timers.next_deadline().expect("two armed");

        toaster.clear();

        assert_eq!(toaster.shown_count(), 0);
        assert_eq!(toaster.waiting_count(), 0);
        assert!(toaster.timers.is_empty());
        assert!(!toaster.has_toasts());

        toaster.inform("fresh");
        toaster.tick(stale_deadline);
        assert_eq!(toaster.shown_count(), 1);
    }

    #[test]
    fn handle_message_routes_close() {
        let mut toaster = Toaster::default();
        let request = ToastRequest::success("bye");
        let id = request.id();
        toaster.show(request);

        toaster.handle_message(&Message::Close(id));

        assert_eq!(toaster.shown_count(), 0);
    }

    #[test]
    fn handle_message_routes_tick() {
        let mut toaster = Toaster::default();
        toaster.inform("expiring");

        toaster.handle_message(&Message::Tick(long_after()));

        assert_eq!(toaster.shown_count(), 0);
    }

    #[test]
    fn offsets_follow_the_position_formula() {
        assert_eq!(offset_for_position(1), 8.0);
        assert_eq!(offset_for_position(2), 88.0);
        assert_eq!(offset_for_position(3), 168.0);
    }

    #[test]
    fn settled_entries_sit_on_their_position_offset() {
        let mut toaster = Toaster::default();
        let first = ToastRequest::information("first");
        let first_id = first.id();
        toaster.show(first);
        toaster.inform("second");

        let settled = long_after();
        let entry = toaster
            .shown()
            .find(|entry| entry.card().id() == first_id)
            .unwrap();
        assert_eq!(entry.position(), 2);
        assert_eq!(entry.bottom_offset(settled), offset_for_position(2));
    }

    #[test]
    fn moved_entries_ease_between_offsets() {
        let mut toaster = Toaster::default();
        toaster.inform("mover");
        let mut entry = toaster.shown().next().unwrap().clone();

        let moved_at = Instant::now();
        entry.set_position(2, moved_at);

        let start = entry.bottom_offset(moved_at);
        let midway =
            entry.bottom_offset(moved_at + Duration::from_millis(animation::RESTACK_MS / 2));
        let done = entry.bottom_offset(moved_at + Duration::from_millis(animation::RESTACK_MS));

        assert_eq!(start, offset_for_position(1));
        assert!(midway > start && midway < offset_for_position(2));
        assert_eq!(done, offset_for_position(2));
    }

    #[test]
    fn ease_in_out_is_slow_at_the_edges() {
        assert_eq!(ease_in_out(0.0), 0.0);
        assert_eq!(ease_in_out(1.0), 1.0);
        assert_eq!(ease_in_out(0.5), 0.5);
        assert!(ease_in_out(0.25) < 0.25);
        assert!(ease_in_out(0.75) > 0.75);
    }
}
