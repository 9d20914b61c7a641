// SPDX-License-Identifier: MPL-2.0
//! The demo screen: one page exercising every widget in the gallery.
//!
//! The screen owns the state of its five showcase inputs and the
//! "current location" the sidebar navigates. Toast pushes and sidebar
//! opening are propagated to the application as events, since the
//! notification manager and the panel's open flag live with the host.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::input;
use crate::ui::notifications::Severity;
use crate::ui::scroll_lock;
use crate::ui::styles;
use crate::ui::widgets::scroll_gate;
use iced::{
    alignment::Horizontal,
    widget::{button, scrollable, Column, Container, Row, Text},
    Element, Length,
};

/// One showcase input: its static configuration plus its live state.
#[derive(Debug)]
struct Field {
    config: input::Config,
    state: input::State,
}

impl Field {
    fn new(config: input::Config) -> Self {
        Self {
            config,
            state: input::State::new(),
        }
    }

    fn update(&mut self, message: input::Message) -> input::Event {
        input::update(&mut self.state, &self.config, message)
    }

    fn view(&self) -> Element<'_, input::Message> {
        input::view(input::ViewContext {
            config: &self.config,
            state: &self.state,
        })
    }
}

/// Demo screen state.
#[derive(Debug)]
pub struct State {
    name: Field,
    password: Field,
    email: Field,
    age: Field,
    bio: Field,
    /// The environment's current location, replaced by sidebar navigation.
    location: String,
}

impl State {
    /// Builds the showcase fields with localized chrome.
    pub fn new(i18n: &I18n) -> Self {
        Self {
            name: Field::new(
                input::Config::new(i18n.tr("demo-input-text-placeholder"))
                    .label(i18n.tr("demo-input-text-label"))
                    .clearable(),
            ),
            password: Field::new(
                input::Config::new(i18n.tr("demo-input-password-placeholder"))
                    .kind(input::Kind::Password)
                    .label(i18n.tr("demo-input-password-label"))
                    .clearable(),
            ),
            email: Field::new(
                input::Config::new(i18n.tr("demo-input-email-placeholder"))
                    .kind(input::Kind::Email)
                    .label(i18n.tr("demo-input-email-label"))
                    .error(i18n.tr("demo-input-email-error")),
            ),
            age: Field::new(
                input::Config::new(i18n.tr("demo-input-age-placeholder"))
                    .kind(input::Kind::Number)
                    .label(i18n.tr("demo-input-age-label"))
                    .size(input::Size::Small),
            ),
            bio: Field::new(
                input::Config::new(i18n.tr("demo-input-bio-placeholder"))
                    .label(i18n.tr("demo-input-bio-label"))
                    .max_length(100, true)
                    .clearable(),
            ),
            location: "/".to_string(),
        }
    }

    /// Replaces the current location (the navigation side effect).
    pub fn set_location(&mut self, target: impl Into<String>) {
        self.location = target.into();
    }

    #[must_use]
    pub fn location(&self) -> &str {
        &self.location
    }
}

/// Messages emitted by the demo screen.
#[derive(Debug, Clone)]
pub enum Message {
    NameInput(input::Message),
    PasswordInput(input::Message),
    EmailInput(input::Message),
    AgeInput(input::Message),
    BioInput(input::Message),
    ShowToastPressed(Severity),
    OpenSidebarPressed,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    /// The host should push a toast of the given severity.
    ShowToast(Severity),
    /// The host should open the sidebar panel.
    OpenSidebar,
}

/// Process a demo screen message and return the corresponding event.
pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::NameInput(m) => {
            state.name.update(m);
            Event::None
        }
        Message::PasswordInput(m) => {
            state.password.update(m);
            Event::None
        }
        Message::EmailInput(m) => {
            state.email.update(m);
            Event::None
        }
        Message::AgeInput(m) => {
            state.age.update(m);
            Event::None
        }
        Message::BioInput(m) => {
            state.bio.update(m);
            Event::None
        }
        Message::ShowToastPressed(severity) => Event::ShowToast(severity),
        Message::OpenSidebarPressed => Event::OpenSidebar,
    }
}

/// Contextual data needed to render the demo screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
}

/// Render the demo screen.
///
/// The page scrollable sits behind a scroll gate, so the wheel is swallowed
/// while a sidebar panel holds the scroll lock.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let header = build_header(&ctx);
    let inputs = build_input_section(&ctx);
    let toasts = build_toast_section(&ctx);
    let sidebar = build_sidebar_section(&ctx);

    let content = Column::new()
        .width(Length::Fill)
        .spacing(spacing::LG)
        .padding(spacing::MD)
        .push(header)
        .push(inputs)
        .push(toasts)
        .push(sidebar);

    scroll_gate(scrollable(content), scroll_lock::is_locked()).into()
}

fn build_header<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let location_line = ctx
        .i18n
        .tr_with_args("demo-current-location", &[("location", ctx.state.location())]);

    Column::new()
        .spacing(spacing::XS)
        .push(Text::new(ctx.i18n.tr("demo-title")).size(typography::TITLE_LG))
        .push(Text::new(ctx.i18n.tr("demo-subtitle")).size(typography::BODY))
        .push(Text::new(location_line).size(typography::BODY_SM))
        .into()
}

fn build_input_section<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let state = ctx.state;

    let fields = Column::new()
        .spacing(spacing::MD)
        .push(state.name.view().map(Message::NameInput))
        .push(state.password.view().map(Message::PasswordInput))
        .push(state.email.view().map(Message::EmailInput))
        .push(state.age.view().map(Message::AgeInput))
        .push(state.bio.view().map(Message::BioInput));

    build_section(ctx.i18n.tr("demo-section-input"), fields.into())
}

fn build_toast_section<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let buttons = Row::new()
        .spacing(spacing::SM)
        .push(toast_button(
            ctx.i18n.tr("demo-toast-success-button"),
            Severity::Success,
        ))
        .push(toast_button(
            ctx.i18n.tr("demo-toast-error-button"),
            Severity::Error,
        ))
        .push(toast_button(
            ctx.i18n.tr("demo-toast-warning-button"),
            Severity::Warning,
        ))
        .push(toast_button(
            ctx.i18n.tr("demo-toast-info-button"),
            Severity::Info,
        ));

    build_section(ctx.i18n.tr("demo-section-toast"), buttons.into())
}

fn build_sidebar_section<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let open_button = button(Text::new(ctx.i18n.tr("demo-sidebar-open-button")))
        .on_press(Message::OpenSidebarPressed)
        .style(styles::button::primary);

    build_section(ctx.i18n.tr("demo-section-sidebar"), open_button.into())
}

/// Build one titled showcase card.
fn build_section(title: String, body: Element<'_, Message>) -> Element<'_, Message> {
    let column = Column::new()
        .spacing(spacing::SM)
        .push(Text::new(title).size(typography::TITLE_SM))
        .push(body);

    Container::new(column)
        .width(Length::Fill)
        .padding(spacing::MD)
        .align_x(Horizontal::Left)
        .style(styles::container::card)
        .into()
}

fn toast_button(label: String, severity: Severity) -> Element<'static, Message> {
    button(Text::new(label))
        .on_press(Message::ShowToastPressed(severity))
        .style(styles::button::accent(severity.color()))
        .into()
}
