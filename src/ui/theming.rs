// SPDX-License-Identifier: MPL-2.0
//! Light/Dark/System theme selection.
//!
//! The gallery leans on the built-in Iced themes for widget defaults, so the
//! only state kept here is which mode the user asked for. `System` consults
//! the desktop preference on every read; a preference change at the OS level
//! is picked up without restarting the application.

use serde::{Deserialize, Serialize};

/// Requested theme mode, persisted in `settings.toml` and overridable with
/// the `--theme` flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Resolves the effective appearance. `System` falls back to dark when
    /// the desktop preference cannot be detected.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => !matches!(dark_light::detect(), Ok(dark_light::Mode::Light)),
        }
    }

    /// Maps the mode to the Iced theme driving widget defaults.
    #[must_use]
    pub fn to_iced_theme(self) -> iced::Theme {
        if self.is_dark() {
            iced::Theme::Dark
        } else {
            iced::Theme::Light
        }
    }
}
