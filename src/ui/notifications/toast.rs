// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering individual notifications.
//!
//! Toasts are the visual representation of notifications, appearing as
//! small cards with severity-colored accents, an optional action button,
//! and an optional dismiss button. Exiting toasts are rendered faded until
//! their removal completes.

use super::manager::{Manager, Message};
use super::notification::{Anchor, Notification, Phase};
use crate::ui::design_tokens::{border, opacity, radius, shadow, sizing, spacing, typography};
use crate::ui::styles;
use iced::font::Weight;
use iced::widget::{button, container, text, Column, Container, Row, Space, Stack, Text};
use iced::{alignment, Color, Element, Font, Length, Theme};

/// Toast widget configuration.
pub struct Toast;

impl Toast {
    /// Renders a single toast notification.
    pub fn view(notification: &Notification) -> Element<'_, Message> {
        let severity = notification.severity();
        let accent_color = severity.color();
        let exiting = notification.phase() == Phase::Exiting;

        let glyph = Text::new(severity.glyph())
            .size(typography::BODY_LG)
            .style(move |_theme: &Theme| text::Style {
                color: Some(accent_color),
            });

        let mut body = Column::new().spacing(spacing::XXS);
        if let Some(title) = notification.title() {
            body = body.push(Text::new(title.to_string()).size(typography::BODY).font(Font {
                weight: Weight::Bold,
                ..Font::default()
            }));
        }
        body = body.push(Text::new(notification.message().to_string()).size(typography::BODY));

        let mut content = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(Container::new(glyph).padding(spacing::XXS))
            .push(
                Container::new(body)
                    .width(Length::Fill)
                    .align_x(alignment::Horizontal::Left),
            );

        if let Some(label) = notification.action_label() {
            let action_button = button(Text::new(label.to_string()).size(typography::BODY_SM))
                .on_press(Message::ActionPressed(notification.id()))
                .padding([spacing::XXS, spacing::XS])
                .style(styles::button::primary);
            content = content.push(action_button);
        }

        if notification.is_dismissable() {
            let dismiss_button = button(Text::new("✕").size(typography::BODY_SM))
                .on_press(Message::Dismiss(notification.id()))
                .padding(spacing::XXS)
                .style(styles::button::chrome);
            content = content.push(dismiss_button);
        }

        Container::new(content)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .padding(spacing::SM)
            .style(move |theme: &Theme| toast_container_style(theme, accent_color, exiting))
            .into()
    }

    /// Renders the toast overlay with all displayed notifications.
    ///
    /// Toasts are grouped by anchor and stacked vertically at each occupied
    /// anchor, newest first.
    pub fn view_overlay(manager: &Manager) -> Element<'_, Message> {
        if manager.visible_count() == 0 {
            // Return an empty element that takes no space
            return Container::new(Space::new()).into();
        }

        let mut layers = Stack::new().width(Length::Fill).height(Length::Fill);

        for anchor in Anchor::ALL {
            let toasts: Vec<Element<'_, Message>> = manager
                .visible()
                .filter(|notification| notification.anchor() == anchor)
                .map(Self::view)
                .collect();

            if toasts.is_empty() {
                continue;
            }

            let toast_column = Column::with_children(toasts)
                .spacing(spacing::XS)
                .align_x(anchor.align_x());

            layers = layers.push(
                Container::new(toast_column)
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .align_x(anchor.align_x())
                    .align_y(anchor.align_y())
                    .padding(spacing::MD),
            );
        }

        layers.into()
    }
}

/// Style function for the toast container.
///
/// Exiting toasts fade: both the surface and the accent border drop to the
/// exit opacity until removal.
fn toast_container_style(theme: &Theme, accent_color: Color, exiting: bool) -> container::Style {
    let bg_color = theme.extended_palette().background.base.color;
    let alpha = if exiting {
        opacity::OVERLAY_EXITING
    } else {
        opacity::OPAQUE
    };

    container::Style {
        background: Some(iced::Background::Color(Color {
            a: bg_color.a * alpha,
            ..bg_color
        })),
        border: iced::Border {
            color: Color {
                a: accent_color.a * alpha,
                ..accent_color
            },
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        text_color: Some(Color {
            a: alpha,
            ..theme.palette().text
        }),
        ..Default::default()
    }
}
