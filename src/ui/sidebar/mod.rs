// SPDX-License-Identifier: MPL-2.0
//! Sliding sidebar menu with a recursively nested item tree.
//!
//! # Components
//!
//! - [`menu`] - The `MenuNode` item tree and the pre-order flatten used for
//!   rendering
//! - [`panel`] - The panel itself: expansion state, activation dispatch,
//!   scrim handling, and the Iced view
//!
//! The panel owns which branches are expanded; everything else (the item
//! tree, the open flag, reacting to activations) belongs to the host.

pub mod menu;
pub mod panel;

pub use menu::{flatten_visible, MenuNode, RowEntry};
pub use panel::{Edge, Event, Message, PanelWidth, State, ViewContext};
