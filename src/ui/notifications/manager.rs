// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `Manager` handles queuing, display timing, and dismissal of
//! notifications. It limits the number of visible toasts, advances each
//! toast's phase machine on tick, and reports removals back to the host so
//! it can drop its records.

use super::notification::{Notification, ToastId};
use std::collections::VecDeque;
use std::time::Instant;

/// Maximum number of notifications visible at once.
const MAX_VISIBLE: usize = 3;

/// Messages for notification state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// The ✕ button of a specific notification was pressed.
    Dismiss(ToastId),
    /// The action button of a specific notification was pressed.
    ActionPressed(ToastId),
}

/// Manages the notification queue and visible notifications.
#[derive(Debug, Default)]
pub struct Manager {
    /// Currently displayed notifications (newest first).
    visible: VecDeque<Notification>,
    /// Queued notifications waiting to be displayed.
    queue: VecDeque<Notification>,
}

impl Manager {
    /// Creates a new empty notification manager.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pushes a new notification to be displayed.
    ///
    /// If fewer than `MAX_VISIBLE` notifications are showing, it's displayed
    /// immediately. Otherwise, it's added to the queue and shown when space
    /// becomes available. Notifications constructed hidden are already in
    /// their terminal phase and are ignored.
    pub fn push(&mut self, notification: Notification) {
        if notification.is_removed() {
            return;
        }

        if self.visible.len() < MAX_VISIBLE {
            self.visible.push_front(notification);
        } else {
            self.queue.push_back(notification);
        }
    }

    /// Requests the close sequence for a notification.
    ///
    /// The notification starts its exit transition; actual removal (and the
    /// host's close handling) follows on a later tick. A queued notification
    /// is discarded immediately — it was never displayed, so no close event
    /// is due. Returns `true` if the notification was found.
    pub fn close(&mut self, id: ToastId, now: Instant) -> bool {
        if let Some(notification) = self.visible.iter_mut().find(|n| n.id() == id) {
            notification.request_close(now);
            return true;
        }

        if let Some(pos) = self.queue.iter().position(|n| n.id() == id) {
            self.queue.remove(pos);
            return true;
        }

        false
    }

    /// Activates a notification's action button.
    ///
    /// Returns `true` if the action fired (at most once per notification);
    /// the close sequence begins immediately afterwards.
    pub fn press_action(&mut self, id: ToastId, now: Instant) -> bool {
        self.visible
            .iter_mut()
            .find(|n| n.id() == id)
            .is_some_and(|n| n.press_action(now))
    }

    /// Applies an externally supplied visibility flag to one notification.
    pub fn set_visible(&mut self, id: ToastId, visible: bool, now: Instant) {
        if let Some(notification) = self.visible.iter_mut().find(|n| n.id() == id) {
            notification.set_visible(visible, now);
        }
    }

    /// Tears a notification down without any exit transition or close event.
    ///
    /// This is the destroy path: any pending timer dies with the instance.
    /// Returns `true` if the notification was found and removed.
    pub fn remove(&mut self, id: ToastId, now: Instant) -> bool {
        if let Some(pos) = self.visible.iter().position(|n| n.id() == id) {
            self.visible.remove(pos);
            self.promote_from_queue(now);
            return true;
        }

        if let Some(pos) = self.queue.iter().position(|n| n.id() == id) {
            self.queue.remove(pos);
            return true;
        }

        false
    }

    /// Processes a tick, advancing every displayed notification's machine.
    ///
    /// Should be called periodically (e.g., every 100 ms). Returns the ids
    /// of notifications that completed removal on this tick — each id is
    /// reported exactly once, and the host's close handling runs off it.
    pub fn tick(&mut self, now: Instant) -> Vec<ToastId> {
        let mut closed = Vec::new();

        for notification in &mut self.visible {
            if notification.tick(now) {
                closed.push(notification.id());
            }
        }

        if !closed.is_empty() {
            self.visible.retain(|n| !n.is_removed());
            self.promote_from_queue(now);
        }

        closed
    }

    /// Returns the currently displayed notifications.
    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.visible.iter()
    }

    /// Returns the number of displayed notifications.
    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    /// Returns the number of queued notifications.
    #[must_use]
    pub fn queued_count(&self) -> usize {
        self.queue.len()
    }

    /// Returns whether there are any notifications (displayed or queued).
    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.visible.is_empty() || !self.queue.is_empty()
    }

    /// Clears all notifications (displayed and queued) without events.
    pub fn clear(&mut self) {
        self.visible.clear();
        self.queue.clear();
    }

    /// Promotes notifications from the queue while there's space, restarting
    /// their display clocks so the auto-dismiss timer measures time on
    /// screen.
    fn promote_from_queue(&mut self, now: Instant) {
        while self.visible.len() < MAX_VISIBLE {
            if let Some(mut notification) = self.queue.pop_front() {
                notification.mark_displayed(now);
                self.visible.push_back(notification);
            } else {
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::notifications::notification::{Phase, EXIT_TRANSITION};
    use std::time::Duration;

    fn now() -> Instant {
        Instant::now()
    }

    #[test]
    fn new_manager_is_empty() {
        let manager = Manager::new();
        assert_eq!(manager.visible_count(), 0);
        assert_eq!(manager.queued_count(), 0);
        assert!(!manager.has_notifications());
    }

    #[test]
    fn push_adds_to_visible_when_space_available() {
        let mut manager = Manager::new();
        manager.push(Notification::success("test"));

        assert_eq!(manager.visible_count(), 1);
        assert_eq!(manager.queued_count(), 0);
    }

    #[test]
    fn push_queues_when_visible_is_full() {
        let mut manager = Manager::new();

        for i in 0..MAX_VISIBLE {
            manager.push(Notification::success(format!("test-{i}")));
        }
        assert_eq!(manager.visible_count(), MAX_VISIBLE);
        assert_eq!(manager.queued_count(), 0);

        manager.push(Notification::success("queued"));
        assert_eq!(manager.visible_count(), MAX_VISIBLE);
        assert_eq!(manager.queued_count(), 1);
    }

    #[test]
    fn push_ignores_hidden_notifications() {
        let mut manager = Manager::new();
        manager.push(Notification::success("invisible").hidden());
        assert!(!manager.has_notifications());
    }

    #[test]
    fn close_begins_exit_then_tick_removes_and_reports_once() {
        let mut manager = Manager::new();
        let toast = Notification::success("closing");
        let id = toast.id();
        manager.push(toast);

        let t0 = now();
        assert!(manager.close(id, t0));
        // Still displayed during the exit transition
        assert_eq!(manager.visible_count(), 1);

        let closed = manager.tick(t0 + EXIT_TRANSITION);
        assert_eq!(closed, vec![id]);
        assert_eq!(manager.visible_count(), 0);

        // Never reported twice
        let closed = manager.tick(t0 + EXIT_TRANSITION + Duration::from_secs(1));
        assert!(closed.is_empty());
    }

    #[test]
    fn close_discards_queued_notification_silently() {
        let mut manager = Manager::new();
        for i in 0..MAX_VISIBLE {
            manager.push(Notification::success(format!("visible-{i}")));
        }
        let queued = Notification::success("queued");
        let queued_id = queued.id();
        manager.push(queued);

        let t0 = now();
        assert!(manager.close(queued_id, t0));
        assert_eq!(manager.queued_count(), 0);
        assert!(manager.tick(t0 + EXIT_TRANSITION).is_empty());
    }

    #[test]
    fn removal_promotes_from_queue() {
        let mut manager = Manager::new();

        let mut first_id = None;
        for i in 0..MAX_VISIBLE {
            let n = Notification::success(format!("visible-{i}"));
            if i == 0 {
                first_id = Some(n.id());
            }
            manager.push(n);
        }
        manager.push(Notification::success("queued"));
        assert_eq!(manager.queued_count(), 1);

        let t0 = now();
        manager.close(first_id.unwrap(), t0);
        manager.tick(t0 + EXIT_TRANSITION);

        assert_eq!(manager.visible_count(), MAX_VISIBLE);
        assert_eq!(manager.queued_count(), 0);
    }

    #[test]
    fn promoted_notification_restarts_its_display_clock() {
        let mut manager = Manager::new();
        let mut first_id = None;
        for i in 0..MAX_VISIBLE {
            let n = Notification::success(format!("visible-{i}"));
            if i == 0 {
                first_id = Some(n.id());
            }
            manager.push(n);
        }
        manager.push(Notification::success("queued"));

        let t0 = now();
        manager.close(first_id.unwrap(), t0);
        let promoted_at = t0 + EXIT_TRANSITION;
        manager.tick(promoted_at);

        let promoted = manager
            .visible()
            .find(|n| n.message() == "queued")
            .expect("queued notification should be displayed");
        assert_eq!(promoted.shown_at(), Some(promoted_at));
    }

    #[test]
    fn remove_mid_timer_reports_nothing() {
        let mut manager = Manager::new();
        let toast = Notification::success("doomed");
        let id = toast.id();
        let shown = toast.shown_at().unwrap();
        manager.push(toast);

        let t0 = now();
        assert!(manager.remove(id, t0));
        assert_eq!(manager.visible_count(), 0);

        // Well past both the auto-dismiss and exit deadlines: still nothing
        let closed = manager.tick(shown + Duration::from_secs(10));
        assert!(closed.is_empty());
    }

    #[test]
    fn close_nonexistent_returns_false() {
        let mut manager = Manager::new();
        let fake_id = Notification::success("temp").id();

        assert!(!manager.close(fake_id, now()));
        assert!(!manager.remove(fake_id, now()));
    }

    #[test]
    fn press_action_fires_once_and_starts_close() {
        let mut manager = Manager::new();
        let toast = Notification::warning("careful").with_action("Undo");
        let id = toast.id();
        manager.push(toast);

        let t0 = now();
        assert!(manager.press_action(id, t0));
        assert!(!manager.press_action(id, t0 + Duration::from_millis(10)));

        let closed = manager.tick(t0 + EXIT_TRANSITION);
        assert_eq!(closed, vec![id]);
    }

    #[test]
    fn zero_duration_notification_survives_ticks() {
        let mut manager = Manager::new();
        let toast = Notification::error("pinned").with_duration(Duration::ZERO);
        let shown = toast.shown_at().unwrap();
        manager.push(toast);

        assert!(manager.tick(shown + Duration::from_secs(600)).is_empty());
        assert_eq!(manager.visible_count(), 1);
    }

    #[test]
    fn auto_dismiss_flows_through_the_manager() {
        let mut manager = Manager::new();
        let toast = Notification::info("fleeting").with_duration(Duration::from_millis(5000));
        let id = toast.id();
        let shown = toast.shown_at().unwrap();
        manager.push(toast);

        // Timer fires: exit begins but nothing is reported yet
        assert!(manager.tick(shown + Duration::from_millis(5000)).is_empty());
        assert_eq!(
            manager.visible().next().unwrap().phase(),
            Phase::Exiting
        );

        // Exit transition elapses
        let closed = manager.tick(shown + Duration::from_millis(5300));
        assert_eq!(closed, vec![id]);
        assert_eq!(manager.visible_count(), 0);
    }

    #[test]
    fn clear_removes_all() {
        let mut manager = Manager::new();

        for i in 0..5 {
            manager.push(Notification::success(format!("test-{i}")));
        }

        manager.clear();
        assert_eq!(manager.visible_count(), 0);
        assert_eq!(manager.queued_count(), 0);
    }
}
