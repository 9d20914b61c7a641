// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures and the per-toast phase machine.
//!
//! A `Notification` owns its display lifecycle: it is `Visible` from the
//! moment it is shown, becomes `Exiting` on a close request (explicit or
//! from the auto-dismiss timer), and reaches the terminal `Removed` phase
//! once the exit transition has played out. `Removed` is final — a removed
//! notification produces no further output and fires no further events.

use crate::ui::design_tokens::palette;
use iced::alignment::{Horizontal, Vertical};
use iced::Color;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

/// Delay between the close request and the actual removal, matching the
/// visual exit transition.
pub const EXIT_TRANSITION: Duration = Duration::from_millis(300);

/// Auto-dismiss delay applied when none is configured.
pub const DEFAULT_DURATION: Duration = Duration::from_millis(5000);

/// Unique identifier for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ToastId(u64);

impl ToastId {
    /// Creates a new unique notification ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for ToastId {
    fn default() -> Self {
        Self::new()
    }
}

/// Severity level determines visual styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    /// Operation completed successfully (green).
    Success,
    /// Error requiring attention (red).
    Error,
    /// Warning that doesn't block operation (orange).
    Warning,
    /// Informational message (blue).
    #[default]
    Info,
}

impl Severity {
    /// Returns the accent color for this severity level.
    #[must_use]
    pub fn color(&self) -> Color {
        match self {
            Severity::Success => palette::SUCCESS_500,
            Severity::Error => palette::ERROR_500,
            Severity::Warning => palette::WARNING_500,
            Severity::Info => palette::INFO_500,
        }
    }

    /// Returns the glyph shown next to the message.
    #[must_use]
    pub fn glyph(&self) -> &'static str {
        match self {
            Severity::Success => "✓",
            Severity::Error => "✕",
            Severity::Warning => "⚠",
            Severity::Info => "ℹ",
        }
    }
}

/// Screen anchor for the toast overlay.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Anchor {
    TopLeading,
    TopCenter,
    TopTrailing,
    BottomLeading,
    BottomCenter,
    #[default]
    BottomTrailing,
}

impl Anchor {
    /// All anchors in display order.
    pub const ALL: [Anchor; 6] = [
        Anchor::TopLeading,
        Anchor::TopCenter,
        Anchor::TopTrailing,
        Anchor::BottomLeading,
        Anchor::BottomCenter,
        Anchor::BottomTrailing,
    ];

    /// Horizontal alignment of the anchored stack.
    #[must_use]
    pub fn align_x(self) -> Horizontal {
        match self {
            Anchor::TopLeading | Anchor::BottomLeading => Horizontal::Left,
            Anchor::TopCenter | Anchor::BottomCenter => Horizontal::Center,
            Anchor::TopTrailing | Anchor::BottomTrailing => Horizontal::Right,
        }
    }

    /// Vertical alignment of the anchored stack.
    #[must_use]
    pub fn align_y(self) -> Vertical {
        match self {
            Anchor::TopLeading | Anchor::TopCenter | Anchor::TopTrailing => Vertical::Top,
            _ => Vertical::Bottom,
        }
    }
}

/// Display lifecycle phase of a single notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Shown; the auto-dismiss timer is armed iff the duration is non-zero.
    Visible,
    /// Playing the exit transition; removal follows after [`EXIT_TRANSITION`].
    Exiting,
    /// Terminal. No further output, no further events.
    Removed,
}

/// A notification to be displayed to the user.
#[derive(Debug, Clone)]
pub struct Notification {
    id: ToastId,
    severity: Severity,
    /// Optional emphasized first line.
    title: Option<String>,
    /// The message body, already localized by the host.
    message: String,
    /// Auto-dismiss delay; zero disables auto-dismiss entirely.
    duration: Duration,
    /// Whether the ✕ button is rendered.
    dismissable: bool,
    anchor: Anchor,
    /// Label of the optional action button.
    action_label: Option<String>,
    phase: Phase,
    /// Set when the notification entered `Visible` (display started).
    shown_at: Option<Instant>,
    /// Set when the notification entered `Exiting`.
    exit_started_at: Option<Instant>,
    action_fired: bool,
}

impl Notification {
    /// Creates a visible notification with the given severity and message.
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            id: ToastId::new(),
            severity,
            title: None,
            message: message.into(),
            duration: DEFAULT_DURATION,
            dismissable: true,
            anchor: Anchor::default(),
            action_label: None,
            phase: Phase::Visible,
            shown_at: Some(Instant::now()),
            exit_started_at: None,
            action_fired: false,
        }
    }

    /// Creates a success notification.
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(Severity::Success, message)
    }

    /// Creates an info notification.
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(Severity::Info, message)
    }

    /// Creates a warning notification.
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message)
    }

    /// Creates an error notification.
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Severity::Error, message)
    }

    /// Sets the emphasized title line.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Overrides the auto-dismiss delay. A zero duration disables the timer:
    /// the notification stays visible until explicitly closed.
    #[must_use]
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Hides the ✕ button. The action button still closes the notification.
    #[must_use]
    pub fn not_dismissable(mut self) -> Self {
        self.dismissable = false;
        self
    }

    /// Sets the screen anchor.
    #[must_use]
    pub fn with_anchor(mut self, anchor: Anchor) -> Self {
        self.anchor = anchor;
        self
    }

    /// Adds an action button with the given label.
    #[must_use]
    pub fn with_action(mut self, label: impl Into<String>) -> Self {
        self.action_label = Some(label.into());
        self
    }

    /// Constructs the notification hidden: it starts in the terminal
    /// `Removed` phase and never produces output or events.
    #[must_use]
    pub fn hidden(mut self) -> Self {
        self.phase = Phase::Removed;
        self.shown_at = None;
        self
    }

    // -------------------------------------------------------------------
    // Phase machine
    // -------------------------------------------------------------------

    /// Requests the close sequence.
    ///
    /// Only effective in `Visible`; duplicate requests while `Exiting` or
    /// `Removed` are no-ops.
    pub fn request_close(&mut self, now: Instant) {
        if self.phase == Phase::Visible {
            self.phase = Phase::Exiting;
            self.exit_started_at = Some(now);
        }
    }

    /// Applies an externally supplied visibility flag.
    ///
    /// Flipping to `false` is an explicit close request iff the notification
    /// is currently `Visible`; flipping to `true` has no effect.
    pub fn set_visible(&mut self, visible: bool, now: Instant) {
        if !visible {
            self.request_close(now);
        }
    }

    /// Activates the action button.
    ///
    /// Returns true if the action fired. It fires at most once, and is
    /// immediately followed by the close sequence regardless of whether the
    /// notification is dismissable.
    pub fn press_action(&mut self, now: Instant) -> bool {
        if self.phase != Phase::Visible || self.action_fired {
            return false;
        }
        self.action_fired = true;
        self.request_close(now);
        true
    }

    /// Advances the phase machine to `now`.
    ///
    /// Returns true exactly once per notification: on the transition from
    /// `Exiting` to `Removed`, which is the moment the owner's close
    /// callback is due.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.phase {
            Phase::Visible => {
                if !self.duration.is_zero() {
                    if let Some(shown_at) = self.shown_at {
                        if now.duration_since(shown_at) >= self.duration {
                            self.phase = Phase::Exiting;
                            self.exit_started_at = Some(now);
                        }
                    }
                }
                false
            }
            Phase::Exiting => match self.exit_started_at {
                Some(started) if now.duration_since(started) >= EXIT_TRANSITION => {
                    self.phase = Phase::Removed;
                    true
                }
                _ => false,
            },
            Phase::Removed => false,
        }
    }

    /// Restarts the display clock.
    ///
    /// Called by the manager when a queued notification is finally shown, so
    /// the auto-dismiss timer measures time on screen rather than time since
    /// construction.
    pub(super) fn mark_displayed(&mut self, now: Instant) {
        if self.phase == Phase::Visible {
            self.shown_at = Some(now);
        }
    }

    // -------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------

    #[must_use]
    pub fn id(&self) -> ToastId {
        self.id
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    #[must_use]
    pub fn is_dismissable(&self) -> bool {
        self.dismissable
    }

    #[must_use]
    pub fn anchor(&self) -> Anchor {
        self.anchor
    }

    #[must_use]
    pub fn action_label(&self) -> Option<&str> {
        self.action_label.as_deref()
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn is_removed(&self) -> bool {
        self.phase == Phase::Removed
    }

    /// When display started; `None` for notifications constructed hidden.
    #[must_use]
    pub fn shown_at(&self) -> Option<Instant> {
        self.shown_at
    }
}
