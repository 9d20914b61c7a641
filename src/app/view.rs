// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! This module handles the `view()` function that renders the current screen
//! based on application state, and stacks the overlays (toast layer, sidebar
//! panel) above it.

use super::{Message, Screen};
use crate::i18n::fluent::I18n;
use crate::ui::about::{self, ViewContext as AboutViewContext};
use crate::ui::catalog::{self, ViewContext as CatalogViewContext};
use crate::ui::demo::{self, ViewContext as DemoViewContext};
use crate::ui::navbar::{self, ViewContext as NavbarViewContext};
use crate::ui::notifications::{Manager, Toast};
use crate::ui::sidebar::{self, MenuNode};
use iced::{
    widget::{Container, Stack},
    Element, Length,
};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
    pub demo: &'a demo::State,
    pub catalog: &'a catalog::State,
    pub sidebar: &'a sidebar::State,
    pub menu_items: &'a [MenuNode],
    pub panel_width: sidebar::PanelWidth,
    pub panel_position: sidebar::Edge,
    pub panel_show_scrim: bool,
    pub notifications: &'a Manager,
}

/// Renders the current application view based on the active screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let current_view: Element<'_, Message> = match ctx.screen {
        Screen::Demo => view_demo(ctx.demo, ctx.i18n),
        Screen::Catalog => view_catalog(ctx.catalog, ctx.i18n),
        Screen::About => view_about(ctx.i18n),
    };

    let base = Container::new(current_view)
        .width(Length::Fill)
        .height(Length::Fill);

    // Overlays above the screen: toasts first, then the sidebar panel so its
    // scrim dims everything behind it.
    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(base);

    if ctx.notifications.visible_count() > 0 {
        layers = layers.push(Toast::view_overlay(ctx.notifications).map(Message::Notification));
    }

    if ctx.sidebar.is_open() {
        let panel = sidebar::panel::view(sidebar::ViewContext {
            i18n: ctx.i18n,
            items: ctx.menu_items,
            state: ctx.sidebar,
            width: ctx.panel_width,
            position: ctx.panel_position,
            show_scrim: ctx.panel_show_scrim,
        });
        layers = layers.push(panel.map(Message::Sidebar));
    }

    layers.into()
}

fn view_demo<'a>(demo: &'a demo::State, i18n: &'a I18n) -> Element<'a, Message> {
    let navbar_view = navbar::view(NavbarViewContext { i18n }).map(Message::Navbar);

    let demo_content = demo::view(DemoViewContext { i18n, state: demo }).map(Message::Demo);

    iced::widget::Column::new()
        .push(navbar_view)
        .push(demo_content)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn view_catalog<'a>(catalog: &'a catalog::State, i18n: &'a I18n) -> Element<'a, Message> {
    catalog::view(CatalogViewContext {
        i18n,
        state: catalog,
    })
    .map(Message::Catalog)
}

fn view_about(i18n: &I18n) -> Element<'_, Message> {
    about::view(AboutViewContext { i18n }).map(Message::About)
}
