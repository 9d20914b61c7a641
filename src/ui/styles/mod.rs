// SPDX-License-Identifier: MPL-2.0
//! Centralized styles for all UI components.

pub mod button;
pub mod container;
pub mod overlay;

// Re-exports for the most common call sites
pub use button::{menu_item as button_menu_item, primary as button_primary};
