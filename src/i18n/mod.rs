// SPDX-License-Identifier: MPL-2.0
//! Localization support built on Fluent.
//!
//! Translation bundles are embedded at compile time from `assets/i18n/` and
//! selected at startup from the CLI flag, the config file, or the OS locale.

pub mod fluent;

pub use fluent::I18n;
