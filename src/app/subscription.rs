// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! The only subscription the gallery needs is the periodic tick driving the
//! toast machines (auto-dismiss waits and exit transitions). It is active
//! only while at least one notification is alive, so an idle application
//! schedules nothing.

use super::Message;
use crate::config::TICK_INTERVAL_MS;
use iced::{time, Subscription};
use std::time::Duration;

/// Creates the periodic tick subscription for notification auto-dismiss and
/// exit transitions.
pub fn create_tick_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(Duration::from_millis(TICK_INTERVAL_MS)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
