// SPDX-License-Identifier: MPL-2.0
//! About screen module displaying application information and licenses.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::Horizontal,
    widget::{button, rule, scrollable, text, Column, Container, Text},
    Element, Length,
};

/// Application version from Cargo.toml.
const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// License identifier for the code.
const LICENSE: &str = "MPL-2.0";

/// Contextual data needed to render the about screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

/// Messages emitted by the about screen.
#[derive(Debug, Clone)]
pub enum Message {
    BackToDemo,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    BackToDemo,
}

/// Process an about screen message and return the corresponding event.
#[must_use]
pub fn update(message: &Message) -> Event {
    match message {
        Message::BackToDemo => Event::BackToDemo,
    }
}

/// Render the about screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let back_button = button(
        text(format!("← {}", ctx.i18n.tr("about-back-button"))).size(typography::BODY),
    )
    .on_press(Message::BackToDemo)
    .style(styles::button::chrome);

    let title = Text::new(ctx.i18n.tr("about-title")).size(typography::TITLE_LG);

    let app_line = Text::new(format!(
        "{} {}",
        ctx.i18n.tr("app-title"),
        APP_VERSION
    ))
    .size(typography::TITLE_SM);

    let description = Text::new(ctx.i18n.tr("about-description")).size(typography::BODY);

    let license_line = Text::new(ctx.i18n.tr_with_args("about-license", &[("license", LICENSE)]))
        .size(typography::BODY);

    let credits = Text::new(ctx.i18n.tr("about-credits")).size(typography::BODY);

    let content = Column::new()
        .width(Length::Fill)
        .spacing(spacing::SM)
        .align_x(Horizontal::Left)
        .padding(spacing::MD)
        .push(back_button)
        .push(title)
        .push(app_line)
        .push(description)
        .push(rule::horizontal(1))
        .push(license_line)
        .push(credits);

    Container::new(scrollable(content))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::fluent::I18n;

    #[test]
    fn about_view_renders() {
        let i18n = I18n::default();
        let _element = view(ViewContext { i18n: &i18n });
    }

    #[test]
    fn back_emits_event() {
        let event = update(&Message::BackToDemo);
        assert!(matches!(event, Event::BackToDemo));
    }
}
