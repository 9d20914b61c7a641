// SPDX-License-Identifier: MPL-2.0
//! Labelled single-line text input.
//!
//! Wraps `iced::widget::text_input` with the chrome the demo and catalog
//! exercise: an optional label, a clear button, a password visibility
//! toggle, focus/error/success accents, and a character counter with a
//! hard length limit. Focus follows pointer presses (a press on the field
//! takes it, a press elsewhere drops it), reported to the host as
//! [`Event::Focused`] and [`Event::Blurred`].

use crate::ui::design_tokens::{border, palette, radius, spacing, typography};
use crate::ui::styles;
use crate::ui::widgets::press_watch;
use iced::widget::{button, container, text_input, Column, Container, Row, Text};
use iced::{
    alignment::{Horizontal, Vertical},
    Border, Element, Length, Theme,
};

/// Semantic kind of the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Kind {
    #[default]
    Text,
    Password,
    Email,
    Number,
}

/// Visual size of the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Size {
    Small,
    #[default]
    Medium,
    Large,
}

impl Size {
    fn text_size(self) -> f32 {
        match self {
            Size::Small => typography::BODY_SM,
            Size::Medium => typography::BODY,
            Size::Large => typography::BODY_LG,
        }
    }

    fn padding(self) -> f32 {
        match self {
            Size::Small => spacing::XXS,
            Size::Medium => spacing::XS,
            Size::Large => spacing::SM,
        }
    }
}

/// Static configuration of one input instance, owned by the host.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub kind: Kind,
    pub size: Size,
    /// Label shown above the field, already localized.
    pub label: Option<String>,
    /// Placeholder text, already localized.
    pub placeholder: String,
    /// Show a ✕ button while the field is non-empty.
    pub clearable: bool,
    /// Hard limit on the number of characters.
    pub max_length: Option<usize>,
    /// Render a `len/max` counter (requires `max_length`).
    pub show_counter: bool,
    /// Error message shown under the field; also tints the border.
    pub error: Option<String>,
    /// Tints the border with the success color.
    pub success: bool,
    pub disabled: bool,
}

impl Config {
    pub fn new(placeholder: impl Into<String>) -> Self {
        Self {
            placeholder: placeholder.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn kind(mut self, kind: Kind) -> Self {
        self.kind = kind;
        self
    }

    #[must_use]
    pub fn size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    #[must_use]
    pub fn clearable(mut self) -> Self {
        self.clearable = true;
        self
    }

    #[must_use]
    pub fn max_length(mut self, max: usize, show_counter: bool) -> Self {
        self.max_length = Some(max);
        self.show_counter = show_counter;
        self
    }

    #[must_use]
    pub fn error(mut self, message: impl Into<String>) -> Self {
        self.error = Some(message.into());
        self
    }

    #[must_use]
    pub fn success(mut self) -> Self {
        self.success = true;
        self
    }

    #[must_use]
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }
}

/// Per-instance mutable state.
#[derive(Debug, Clone, Default)]
pub struct State {
    value: String,
    focused: bool,
    show_password: bool,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates state with an initial value.
    pub fn with_value(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            focused: false,
            show_password: false,
        }
    }

    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Whether the field currently has focus.
    #[must_use]
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Number of characters currently entered.
    #[must_use]
    pub fn len(&self) -> usize {
        self.value.chars().count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

/// Messages emitted by the input.
#[derive(Debug, Clone)]
pub enum Message {
    ValueChanged(String),
    ClearPressed,
    ToggleVisibilityPressed,
    /// A pointer press landed on the field.
    Focused,
    /// A pointer press landed elsewhere on the page.
    Blurred,
}

/// Events propagated to the host; missing host interest is simply ignored.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    /// The value changed (edit or clear); carries the new value.
    Changed(String),
    /// The field took focus.
    Focused,
    /// The field lost focus.
    Blurred,
}

/// Process an input message and return the corresponding event.
pub fn update(state: &mut State, config: &Config, message: Message) -> Event {
    match message {
        Message::ValueChanged(raw) => {
            let mut value = raw;

            // Numeric inputs only accept digits
            if config.kind == Kind::Number {
                value.retain(|c| c.is_ascii_digit());
            }

            // Enforce the character limit
            if let Some(max) = config.max_length {
                if value.chars().count() > max {
                    value = value.chars().take(max).collect();
                }
            }

            if value == state.value {
                return Event::None;
            }
            state.value = value.clone();
            Event::Changed(value)
        }
        Message::ClearPressed => {
            state.value.clear();
            Event::Changed(String::new())
        }
        Message::ToggleVisibilityPressed => {
            state.show_password = !state.show_password;
            Event::None
        }
        Message::Focused => {
            if config.disabled || state.focused {
                return Event::None;
            }
            state.focused = true;
            Event::Focused
        }
        Message::Blurred => {
            // Outside presses arrive for every field; only a focused one blurs
            if !state.focused {
                return Event::None;
            }
            state.focused = false;
            Event::Blurred
        }
    }
}

/// Contextual data needed to render the input.
pub struct ViewContext<'a> {
    pub config: &'a Config,
    pub state: &'a State,
}

/// Render the input with its label and footer.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let config = ctx.config;
    let state = ctx.state;

    let mut column = Column::new().spacing(spacing::XXS);

    if let Some(label) = &config.label {
        column = column.push(Text::new(label.clone()).size(typography::BODY_SM));
    }

    let secure = config.kind == Kind::Password && !state.show_password;
    let mut field = text_input(&config.placeholder, &state.value)
        .size(config.size.text_size())
        .padding(config.size.padding())
        .secure(secure);
    if !config.disabled {
        field = field.on_input(Message::ValueChanged);
    }

    let mut wrapper = Row::new()
        .spacing(spacing::XXS)
        .align_y(Vertical::Center)
        .push(field);

    if config.kind == Kind::Password {
        let glyph = if state.show_password {
            "👁️"
        } else {
            "👁️‍🗨️"
        };
        let mut toggle = button(Text::new(glyph).size(typography::BODY_SM))
            .padding(spacing::XXS)
            .style(styles::button::chrome);
        if !config.disabled {
            toggle = toggle.on_press(Message::ToggleVisibilityPressed);
        }
        wrapper = wrapper.push(toggle);
    }

    if config.clearable && !state.is_empty() && !config.disabled {
        let clear = button(Text::new("✕").size(typography::BODY_SM))
            .padding(spacing::XXS)
            .style(styles::button::chrome)
            .on_press(Message::ClearPressed);
        wrapper = wrapper.push(clear);
    }

    let error = config.error.is_some();
    let success = config.success;
    let focused = state.focused && !config.disabled;
    let at_max = config
        .max_length
        .is_some_and(|max| state.len() >= max);

    let framed = Container::new(wrapper)
        .padding(spacing::XXS)
        .style(move |theme: &Theme| wrapper_style(theme, error, success, focused));

    // Disabled fields never take focus, so they are not watched
    let framed: Element<'a, Message> = if config.disabled {
        framed.into()
    } else {
        press_watch(framed)
            .on_press_inside(Message::Focused)
            .on_press_outside(Message::Blurred)
            .into()
    };
    column = column.push(framed);

    // Footer: error message on the left, counter on the right
    let mut footer = Row::new().spacing(spacing::SM);
    if let Some(message) = &config.error {
        footer = footer.push(
            Text::new(message.clone())
                .size(typography::CAPTION)
                .style(|_theme: &Theme| iced::widget::text::Style {
                    color: Some(palette::ERROR_500),
                }),
        );
    }
    if config.show_counter {
        if let Some(max) = config.max_length {
            let counter = Text::new(format!("{}/{}", state.len(), max))
                .size(typography::CAPTION)
                .style(move |theme: &Theme| iced::widget::text::Style {
                    color: Some(if at_max {
                        palette::ERROR_500
                    } else {
                        theme.extended_palette().background.strong.text
                    }),
                });
            footer = footer.push(
                Container::new(counter)
                    .width(Length::Fill)
                    .align_x(Horizontal::Right),
            );
        }
    }
    column = column.push(footer);

    column.into()
}

/// Border accent for the field wrapper: error wins over success, which
/// wins over the focus accent.
fn wrapper_style(theme: &Theme, error: bool, success: bool, focused: bool) -> container::Style {
    let color = if error {
        palette::ERROR_500
    } else if success {
        palette::SUCCESS_500
    } else if focused {
        palette::PRIMARY_500
    } else {
        theme.extended_palette().background.strong.color
    };

    container::Style {
        border: Border {
            color,
            width: border::WIDTH_SM,
            radius: radius::SM.into(),
        },
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_change_emits_event_with_new_value() {
        let config = Config::new("type here");
        let mut state = State::new();

        match update(&mut state, &config, Message::ValueChanged("abc".into())) {
            Event::Changed(value) => assert_eq!(value, "abc"),
            other => panic!("expected Changed, got {:?}", other),
        }
        assert_eq!(state.value(), "abc");
    }

    #[test]
    fn unchanged_value_emits_nothing() {
        let config = Config::new("");
        let mut state = State::with_value("same");

        let event = update(&mut state, &config, Message::ValueChanged("same".into()));
        assert!(matches!(event, Event::None));
    }

    #[test]
    fn clear_empties_the_value() {
        let config = Config::new("").clearable();
        let mut state = State::with_value("something");

        match update(&mut state, &config, Message::ClearPressed) {
            Event::Changed(value) => assert!(value.is_empty()),
            other => panic!("expected Changed, got {:?}", other),
        }
        assert!(state.is_empty());
    }

    #[test]
    fn max_length_truncates_input() {
        let config = Config::new("").max_length(5, true);
        let mut state = State::new();

        update(
            &mut state,
            &config,
            Message::ValueChanged("abcdefghij".into()),
        );
        assert_eq!(state.value(), "abcde");
        assert_eq!(state.len(), 5);
    }

    #[test]
    fn max_length_counts_characters_not_bytes() {
        let config = Config::new("").max_length(3, false);
        let mut state = State::new();

        update(&mut state, &config, Message::ValueChanged("éèêë".into()));
        assert_eq!(state.value(), "éèê");
    }

    #[test]
    fn number_kind_filters_non_digits() {
        let config = Config::new("").kind(Kind::Number);
        let mut state = State::new();

        update(&mut state, &config, Message::ValueChanged("1a2b3!".into()));
        assert_eq!(state.value(), "123");
    }

    #[test]
    fn visibility_toggle_flips_without_event() {
        let config = Config::new("").kind(Kind::Password);
        let mut state = State::new();
        assert!(!state.show_password);

        let event = update(&mut state, &config, Message::ToggleVisibilityPressed);
        assert!(matches!(event, Event::None));
        assert!(state.show_password);
    }

    #[test]
    fn focus_and_blur_each_fire_once() {
        let config = Config::new("");
        let mut state = State::new();
        assert!(!state.is_focused());

        let event = update(&mut state, &config, Message::Focused);
        assert!(matches!(event, Event::Focused));
        assert!(state.is_focused());

        // Repeated presses on an already-focused field stay quiet
        let event = update(&mut state, &config, Message::Focused);
        assert!(matches!(event, Event::None));

        let event = update(&mut state, &config, Message::Blurred);
        assert!(matches!(event, Event::Blurred));
        assert!(!state.is_focused());
    }

    #[test]
    fn outside_presses_on_an_unfocused_field_stay_quiet() {
        let config = Config::new("");
        let mut state = State::new();

        let event = update(&mut state, &config, Message::Blurred);
        assert!(matches!(event, Event::None));
        assert!(!state.is_focused());
    }

    #[test]
    fn disabled_field_never_takes_focus() {
        let config = Config::new("").disabled();
        let mut state = State::new();

        let event = update(&mut state, &config, Message::Focused);
        assert!(matches!(event, Event::None));
        assert!(!state.is_focused());
    }

    #[test]
    fn error_accent_wins_over_the_focus_accent() {
        let theme = Theme::Light;
        let focused_only = wrapper_style(&theme, false, false, true);
        assert_eq!(focused_only.border.color, palette::PRIMARY_500);

        let focused_with_error = wrapper_style(&theme, true, false, true);
        assert_eq!(focused_with_error.border.color, palette::ERROR_500);
    }

    #[test]
    fn view_renders_all_variants() {
        let configs = [
            Config::new("plain").label("Text"),
            Config::new("secret").kind(Kind::Password).label("Password"),
            Config::new("mail").kind(Kind::Email).error("invalid address"),
            Config::new("age").kind(Kind::Number).size(Size::Small),
            Config::new("bio").max_length(100, true).clearable(),
            Config::new("locked").disabled(),
            Config::new("done").success(),
        ];
        let state = State::with_value("value");

        for config in &configs {
            let _element = view(ViewContext {
                config,
                state: &state,
            });
        }

        // A focused field renders with the focus accent
        let config = Config::new("plain");
        let mut focused_state = State::with_value("value");
        update(&mut focused_state, &config, Message::Focused);
        let _element = view(ViewContext {
            config: &config,
            state: &focused_state,
        });
    }
}
