// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! This module provides a non-intrusive notification system following
//! toast/snackbar UX patterns. Notifications appear temporarily to inform
//! users about actions without blocking interaction.
//!
//! # Components
//!
//! - [`notification`] - Core `Notification` record and its
//!   Visible → Exiting → Removed phase machine
//! - [`manager`] - `Manager` for queuing and lifecycle management
//! - [`toast`] - Toast widget component for rendering notifications
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::notifications::{Manager, Notification};
//! use std::time::Instant;
//!
//! // Create a manager
//! let mut manager = Manager::new();
//!
//! // Push a notification
//! manager.push(Notification::success("Saved").with_title("Success!"));
//!
//! // On each periodic tick, advance the machines; closed ids come back
//! let closed = manager.tick(Instant::now());
//!
//! // In your view function, render toasts
//! let toast_overlay = Toast::view_overlay(&manager).map(Message::Notification);
//! ```
//!
//! # Design Considerations
//!
//! - Auto-dismiss after 5 s by default; a zero duration disables it
//! - Removal happens 300 ms after the close request, matching the visual
//!   exit transition; the closed event fires exactly once, on removal
//! - Max visible toasts: 3 (others are queued)
//! - Position: one of six screen anchors, bottom-trailing by default

pub mod manager;
pub mod notification;
pub mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Anchor, Notification, Phase, Severity, ToastId, EXIT_TRANSITION};
pub use toast::Toast;
