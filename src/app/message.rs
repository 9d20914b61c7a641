// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::about;
use crate::ui::catalog;
use crate::ui::demo;
use crate::ui::navbar;
use crate::ui::notifications;
use crate::ui::sidebar;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Demo(demo::Message),
    Catalog(catalog::Message),
    About(about::Message),
    Navbar(navbar::Message),
    Sidebar(sidebar::Message),
    Notification(notifications::NotificationMessage),
    /// Periodic tick driving toast auto-dismiss and exit transitions.
    Tick(Instant),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional theme override (`light`, `dark`, or `system`).
    pub theme: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_GALLERY_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
