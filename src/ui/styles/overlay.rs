// SPDX-License-Identifier: MPL-2.0
//! Overlay styles for the sidebar scrim and panel surface.

use crate::ui::design_tokens::{
    opacity,
    palette::{BLACK, WHITE},
    shadow,
};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Dimmed backdrop color shown behind an open overlay panel.
fn scrim_background() -> Color {
    Color {
        a: opacity::OVERLAY_MEDIUM,
        ..BLACK
    }
}

/// Style for the scrim that covers the page behind the sidebar.
#[must_use]
pub fn scrim(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(scrim_background())),
        ..Default::default()
    }
}

/// Style for the sliding panel surface itself, raised above the scrim.
pub fn panel_surface(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(palette.background.base.color.into()),
        border: Border {
            color: Color {
                a: opacity::OVERLAY_SUBTLE,
                ..WHITE
            },
            width: 1.0,
            radius: 0.0.into(),
        },
        shadow: shadow::LG,
        text_color: Some(palette.background.base.text),
        ..Default::default()
    }
}
