// SPDX-License-Identifier: MPL-2.0
//! Design system constants shared by every widget in the gallery.
//!
//! Tokens are grouped by concern: [`palette`] for colors, [`opacity`],
//! [`spacing`] (8 px baseline grid), [`sizing`] for component geometry,
//! [`typography`] for the font size scale, plus [`border`], [`radius`], and
//! [`shadow`]. Widgets never hard-code a pixel value or color that exists
//! here; pulling from one place keeps the demo, the catalog, and the
//! overlays visually consistent.
//!
//! ```
//! use iced_gallery::ui::design_tokens::{opacity, palette, spacing};
//! use iced::Color;
//!
//! let scrim = Color {
//!     a: opacity::OVERLAY_MEDIUM,
//!     ..palette::BLACK
//! };
//! let card_padding = spacing::MD;
//! ```
//!
//! The scales are ratio-bound (the `const` block below refuses to compile
//! when an edit breaks an ordering), so adjust values together rather than
//! point-tweaking a single one.

use iced::Color;

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);

    // Brand blues, light to dark
    pub const PRIMARY_400: Color = Color::from_rgb(0.4, 0.7, 1.0);
    pub const PRIMARY_500: Color = Color::from_rgb(0.3, 0.6, 0.9);
    pub const PRIMARY_600: Color = Color::from_rgb(0.2, 0.5, 0.8);

    // Severity accents shared by toasts, input validation, and buttons
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
    pub const INFO_500: Color = Color::from_rgb(0.392, 0.588, 1.0);
}

pub mod opacity {
    /// Subtle wash behind hovered chrome buttons.
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    /// Exit-transition opacity for toasts fading out.
    pub const OVERLAY_EXITING: f32 = 0.35;
    /// Scrim behind an open sidebar panel.
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const OVERLAY_HOVER: f32 = 0.8;
    pub const OVERLAY_PRESSED: f32 = 0.9;
    pub const OPAQUE: f32 = 1.0;

    /// Semi-transparent panel and card surfaces.
    pub const SURFACE: f32 = 0.95;
}

pub mod spacing {
    //! 8 px baseline grid; SM sits on the half step.

    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
}

pub mod sizing {
    /// Sidebar panel width, also the configuration default.
    pub const PANEL_WIDTH: f32 = 280.0;
    /// Fixed toast card width.
    pub const TOAST_WIDTH: f32 = 320.0;
    /// Indentation applied per nesting level in the sidebar menu.
    pub const MENU_INDENT: f32 = 20.0;
}

pub mod typography {
    //! Font size scale, titles down to captions.

    /// Screen headings (Demo, Catalog, About).
    pub const TITLE_LG: f32 = 30.0;
    /// App name in the navbar.
    pub const TITLE_MD: f32 = 20.0;
    /// Section and panel headers.
    pub const TITLE_SM: f32 = 18.0;
    /// Emphasis text, toast glyphs.
    pub const BODY_LG: f32 = 16.0;
    /// Default for labels, messages, and menu rows.
    pub const BODY: f32 = 14.0;
    /// Hints and secondary labels.
    pub const BODY_SM: f32 = 13.0;
    /// Badges, counters, expansion indicators.
    pub const CAPTION: f32 = 12.0;
}

pub mod border {
    /// Input field outlines.
    pub const WIDTH_SM: f32 = 1.0;
    /// Toast severity accents.
    pub const WIDTH_MD: f32 = 2.0;
}

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
}

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };

    pub const LG: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 8.0 },
        blur_radius: 16.0,
    };
}

// Ratio and ordering checks, enforced at compile time.
const _: () = {
    assert!(spacing::XXS > 0.0);
    assert!(spacing::XS > spacing::XXS);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::OVERLAY_SUBTLE > 0.0);
    assert!(opacity::OVERLAY_EXITING < opacity::OVERLAY_MEDIUM);
    assert!(opacity::OVERLAY_MEDIUM < opacity::OVERLAY_STRONG);
    assert!(opacity::SURFACE < opacity::OPAQUE);
    assert!(opacity::OPAQUE == 1.0);

    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY_LG);
    assert!(typography::BODY_LG > typography::BODY);
    assert!(typography::BODY > typography::BODY_SM);
    assert!(typography::BODY_SM > typography::CAPTION);

    assert!(border::WIDTH_MD > border::WIDTH_SM);
    assert!(radius::SM < radius::MD && radius::MD < radius::LG);

    // The menu indent must stay visible next to row padding
    assert!(sizing::MENU_INDENT > spacing::SM);
    assert!(sizing::TOAST_WIDTH > sizing::PANEL_WIDTH * 0.5);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_rides_the_8px_grid() {
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::LG, spacing::MD * 1.5);
    }

    #[test]
    fn panel_width_matches_the_documented_default() {
        assert_eq!(sizing::PANEL_WIDTH, 280.0);
    }

    #[test]
    fn severity_colors_are_fully_opaque() {
        for color in [
            palette::ERROR_500,
            palette::WARNING_500,
            palette::SUCCESS_500,
            palette::INFO_500,
        ] {
            assert_eq!(color.a, 1.0);
        }
    }
}
