// SPDX-License-Identifier: MPL-2.0
//! Navigation bar for app-level navigation.
//!
//! The bar sits at the top of the demo screen and gives access to the
//! component catalog and the about screen.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, Container, Row, Text},
    Element, Length, Theme,
};

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone)]
pub enum Message {
    OpenCatalog,
    OpenAbout,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    OpenCatalog,
    OpenAbout,
}

/// Process a navbar message and return the corresponding event.
#[must_use]
pub fn update(message: &Message) -> Event {
    match message {
        Message::OpenCatalog => Event::OpenCatalog,
        Message::OpenAbout => Event::OpenAbout,
    }
}

/// Render the navigation bar.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let title = Text::new(ctx.i18n.tr("app-title")).size(typography::TITLE_MD);

    let catalog_button = button(Text::new(ctx.i18n.tr("navbar-catalog-button")))
        .on_press(Message::OpenCatalog)
        .style(styles::button::primary);

    let about_button = button(Text::new(ctx.i18n.tr("navbar-about-button")))
        .on_press(Message::OpenAbout)
        .style(styles::button::chrome);

    let row = Row::new()
        .spacing(spacing::SM)
        .padding(spacing::SM)
        .align_y(Vertical::Center)
        .push(Container::new(title).width(Length::Fill))
        .push(catalog_button)
        .push(about_button);

    Container::new(row)
        .width(Length::Fill)
        .align_x(Horizontal::Left)
        .style(|theme: &Theme| iced::widget::container::Style {
            background: Some(theme.extended_palette().background.weak.color.into()),
            ..Default::default()
        })
        .into()
}
