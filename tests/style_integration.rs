// SPDX-License-Identifier: MPL-2.0
//! Integration tests to validate style and design token coherence.

#[cfg(test)]
mod tests {
    use iced::Theme;
    use iced_gallery::ui::design_tokens::{opacity, palette, sizing, spacing};
    use iced_gallery::ui::styles::{button, container, overlay};
    use iced_gallery::ui::theming::ThemeMode;

    #[test]
    fn all_button_styles_compile() {
        let theme = Theme::Dark;

        // Smoke-test all button styles compile and are callable
        let _ = button::primary(&theme, iced::widget::button::Status::Active);
        let _ = button::menu_item(&theme, iced::widget::button::Status::Hovered);
        let _ = button::chrome(&theme, iced::widget::button::Status::Pressed);
        let _ = button::selected(&theme, iced::widget::button::Status::Active);
        let accent = button::accent(palette::WARNING_500);
        let _ = accent(&theme, iced::widget::button::Status::Active);
        let disabled = button::disabled();
        let _ = disabled(&theme, iced::widget::button::Status::Disabled);
    }

    #[test]
    fn container_styles_compile() {
        let theme = Theme::Light;

        let _ = container::panel(&theme);
        let _ = container::card(&theme);
        let _ = container::badge(&theme);
        let _ = overlay::scrim(&theme);
        let _ = overlay::panel_surface(&theme);
    }

    #[test]
    fn design_tokens_are_accessible() {
        // Palette
        let _ = palette::PRIMARY_500;
        let _ = palette::WHITE;

        // Spacing
        let _ = spacing::MD;

        // Opacity
        let _ = opacity::OVERLAY_STRONG;

        // Sizing
        let _ = sizing::TOAST_WIDTH;
    }

    #[test]
    fn theme_modes_map_to_the_matching_iced_theme() {
        assert_eq!(ThemeMode::Light.to_iced_theme(), Theme::Light);
        assert_eq!(ThemeMode::Dark.to_iced_theme(), Theme::Dark);
        // System depends on the desktop preference; it must still resolve
        assert!(matches!(
            ThemeMode::System.to_iced_theme(),
            Theme::Light | Theme::Dark
        ));
    }

    #[test]
    fn severity_accents_match_the_palette() {
        use iced_gallery::ui::notifications::Severity;

        assert_eq!(Severity::Success.color(), palette::SUCCESS_500);
        assert_eq!(Severity::Error.color(), palette::ERROR_500);
        assert_eq!(Severity::Warning.color(), palette::WARNING_500);
        assert_eq!(Severity::Info.color(), palette::INFO_500);
    }
}
