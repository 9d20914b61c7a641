// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based architecture
//! with the Elm-style "state down, messages up" pattern.
//!
//! # Screens
//!
//! - [`demo`] - The demo page exercising every widget in the gallery
//! - [`catalog`] - Component catalog with descriptions, props, and variants
//! - [`about`] - Application version and credits
//!
//! # Widgets
//!
//! - [`input`] - Labelled single-line text input
//! - [`notifications`] - Toast notification system (timed visibility)
//! - [`sidebar`] - Sliding panel with a recursively nested menu tree
//!
//! # Shared Infrastructure
//!
//! - [`widgets`] - Custom Iced widgets (scroll gate, press watch)
//! - [`scroll_lock`] - Refcounted scroll suppression while a panel is open
//! - [`styles`] - Centralized styling (buttons, containers, overlays)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`navbar`] - Navigation bar on the demo screen

pub mod about;
pub mod catalog;
pub mod demo;
pub mod design_tokens;
pub mod input;
pub mod navbar;
pub mod notifications;
pub mod scroll_lock;
pub mod sidebar;
pub mod styles;
pub mod theming;
pub mod widgets;
