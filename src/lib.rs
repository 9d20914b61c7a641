// SPDX-License-Identifier: MPL-2.0
//! `iced_gallery` is a small showcase of reusable UI widgets built with the
//! Iced GUI framework.
//!
//! It demonstrates a toast notification system, a sliding sidebar menu with
//! a recursively nested item tree, and a labelled text input, wired together
//! through a demo page and a component catalog, with internationalization
//! via Fluent and user preference management.

pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod ui;
