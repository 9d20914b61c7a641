// SPDX-License-Identifier: MPL-2.0
//! Custom Iced widgets.

pub mod press_watch;
pub mod scroll_gate;

pub use press_watch::press_watch;
pub use scroll_gate::scroll_gate;
