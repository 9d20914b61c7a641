// SPDX-License-Identifier: MPL-2.0
//! The sliding panel: expansion state, activation dispatch, and rendering.
//!
//! The panel owns exactly one piece of state — the set of expanded branch
//! ids — plus the scroll-lock guard it holds while open. Activating a row
//! resolves to one of three disjoint outcomes, evaluated in strict order:
//! disabled nodes do nothing, branches toggle their expansion, leaves
//! propagate an event to the host (navigation or plain activation), after
//! which the host is expected to close the panel.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::scroll_lock::{self, ScrollLock};
use crate::ui::sidebar::menu::{flatten_visible, MenuNode, RowEntry};
use crate::ui::styles;
use iced::widget::{button, mouse_area, scrollable, Column, Container, Row, Space, Stack, Text};
use iced::{
    alignment::{Horizontal, Vertical},
    Element, Length,
};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Smallest usable panel width.
pub const MIN_PANEL_WIDTH: f32 = 160.0;
/// Largest panel width before the overlay stops feeling like a sidebar.
pub const MAX_PANEL_WIDTH: f32 = 560.0;

/// Viewport edge the panel slides in from.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Edge {
    Leading,
    #[default]
    Trailing,
}

/// Panel width in logical pixels.
///
/// This newtype enforces validity at the type level, clamping values to the
/// supported range.
///
/// # Example
///
/// ```
/// use iced_gallery::ui::sidebar::PanelWidth;
///
/// let width = PanelWidth::new(300.0);
/// assert_eq!(width.value(), 300.0);
///
/// // Values outside range are clamped
/// let too_small = PanelWidth::new(10.0);
/// assert_eq!(too_small.value(), 160.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelWidth(f32);

impl PanelWidth {
    /// Creates a new panel width, clamping to the valid range.
    #[must_use]
    pub fn new(value: f32) -> Self {
        Self(value.clamp(MIN_PANEL_WIDTH, MAX_PANEL_WIDTH))
    }

    /// Returns the width as f32.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }
}

impl Default for PanelWidth {
    fn default() -> Self {
        Self(sizing::PANEL_WIDTH)
    }
}

/// Panel state: the expansion set, the open flag supplied by the host, and
/// the scroll-lock share held while open.
#[derive(Debug, Default)]
pub struct State {
    expanded: HashSet<String>,
    open: bool,
    lock: Option<ScrollLock>,
}

impl State {
    /// Creates a closed panel with every branch collapsed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets panel visibility.
    ///
    /// Opening acquires a share of the process-wide scroll lock; closing (or
    /// dropping the state) releases it. The expansion set is never touched,
    /// so previously expanded branches survive open/close cycles.
    pub fn set_open(&mut self, open: bool) {
        self.open = open;
        if open {
            if self.lock.is_none() {
                self.lock = Some(scroll_lock::acquire());
            }
        } else {
            self.lock = None;
        }
    }

    /// Returns whether the panel is currently shown.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Check if a branch is expanded.
    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded.contains(id)
    }

    /// Read access for the flatten pass.
    #[must_use]
    pub fn expanded(&self) -> &HashSet<String> {
        &self.expanded
    }

    fn toggle(&mut self, id: &str) {
        if !self.expanded.remove(id) {
            self.expanded.insert(id.to_string());
        }
    }

    /// Resolves an activation on the given node.
    ///
    /// Dispatch is evaluated in strict order: disabled, branch, navigation
    /// leaf, plain leaf.
    pub fn activate(&mut self, node: &MenuNode) -> Event {
        if node.disabled {
            return Event::None;
        }
        if node.has_children() {
            self.toggle(&node.id);
            return Event::None;
        }
        if let Some(target) = &node.target {
            return Event::Navigated {
                target: target.clone(),
            };
        }
        Event::Activated(node.clone())
    }
}

/// Contextual data needed to render the panel overlay.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub items: &'a [MenuNode],
    pub state: &'a State,
    pub width: PanelWidth,
    pub position: Edge,
    pub show_scrim: bool,
}

/// Messages emitted by the panel.
#[derive(Debug, Clone)]
pub enum Message {
    /// A rendered row was pressed.
    ItemPressed(MenuNode),
    /// The backdrop behind the panel was pressed.
    ScrimPressed,
    /// The ✕ button in the panel header was pressed.
    ClosePressed,
}

/// Events propagated to the host application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    /// The host should close the panel. The expansion set is untouched.
    Closed,
    /// A leaf with a navigation target was chosen: the host performs the
    /// navigation side effect, then closes the panel.
    Navigated { target: String },
    /// A plain leaf was chosen: the host reacts, then closes the panel.
    Activated(MenuNode),
}

/// Process a panel message and return the corresponding event.
pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::ItemPressed(node) => state.activate(&node),
        Message::ScrimPressed | Message::ClosePressed => Event::Closed,
    }
}

/// Render the panel overlay (scrim + sliding panel).
///
/// Callers only include this element while the panel is open; an empty root
/// list renders an empty nav region, not an error.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let mut layers = Stack::new().width(Length::Fill).height(Length::Fill);

    if ctx.show_scrim {
        let backdrop = mouse_area(
            Container::new(Space::new().width(Length::Fill).height(Length::Fill))
                .width(Length::Fill)
                .height(Length::Fill)
                .style(styles::overlay::scrim),
        )
        .on_press(Message::ScrimPressed);
        layers = layers.push(backdrop);
    }

    let panel = Container::new(build_panel(&ctx))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(match ctx.position {
            Edge::Leading => Horizontal::Left,
            Edge::Trailing => Horizontal::Right,
        });
    layers = layers.push(panel);

    layers.into()
}

/// Build the panel surface: header plus the scrollable nav region.
fn build_panel<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let title = Text::new(ctx.i18n.tr("sidebar-title")).size(typography::TITLE_SM);

    let close_button = button(Text::new("✕").size(typography::BODY))
        .on_press(Message::ClosePressed)
        .padding(spacing::XXS)
        .style(styles::button::chrome);

    let header = Row::new()
        .spacing(spacing::SM)
        .padding(spacing::SM)
        .align_y(Vertical::Center)
        .push(Container::new(title).width(Length::Fill))
        .push(close_button);

    let mut nav = Column::new().spacing(spacing::XXS).padding(spacing::XS);
    for entry in flatten_visible(ctx.items, ctx.state.expanded()) {
        nav = nav.push(build_row(ctx.state, entry));
    }

    Container::new(
        Column::new()
            .push(header)
            .push(scrollable(nav).height(Length::Fill)),
    )
    .width(Length::Fixed(ctx.width.value()))
    .height(Length::Fill)
    .style(styles::overlay::panel_surface)
    .into()
}

/// Build a single menu row at its nesting depth.
fn build_row<'a>(state: &State, entry: RowEntry<'a>) -> Element<'a, Message> {
    let node = entry.node;
    let indent = entry.depth as f32 * sizing::MENU_INDENT;

    let mut content = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(Space::new().width(Length::Fixed(indent)));

    if let Some(icon) = &node.icon {
        content = content.push(Text::new(icon.clone()).size(typography::BODY));
    }

    content = content.push(
        Container::new(Text::new(node.label.clone()).size(typography::BODY))
            .width(Length::Fill),
    );

    if node.has_children() {
        let indicator = if state.is_expanded(&node.id) {
            "▼"
        } else {
            "▶"
        };
        content = content.push(Text::new(indicator).size(typography::CAPTION));
    } else {
        content = content.push(Space::new().width(Length::Fixed(spacing::XS)));
    }

    let row = button(content)
        .padding([spacing::XS, spacing::SM])
        .width(Length::Fill);

    if node.disabled {
        row.style(styles::button::disabled()).into()
    } else {
        row.on_press(Message::ItemPressed(node.clone()))
            .style(styles::button::menu_item)
            .into()
    }
}
