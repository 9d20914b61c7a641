// SPDX-License-Identifier: MPL-2.0
//! Component catalog screen.
//!
//! The catalog documents each widget in the gallery with a description, its
//! configuration surface, and rendered variants, organized as collapsible
//! sections. Input variants are live; toast and sidebar variants are static
//! renderings.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::input;
use crate::ui::notifications::{Notification, NotificationMessage, Toast};
use crate::ui::sidebar::{flatten_visible, MenuNode};
use crate::ui::styles;
use iced::{
    alignment::Vertical,
    widget::{button, scrollable, text, Column, Container, Row, Space, Text},
    Element, Length, Theme,
};
use std::collections::HashSet;
use std::time::Duration;

/// Catalog sections that can be expanded/collapsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Input,
    Toast,
    Sidebar,
}

impl Section {
    /// All available sections in display order.
    pub const ALL: [Section; 3] = [Section::Input, Section::Toast, Section::Sidebar];
}

/// Live input variant identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleId {
    Text,
    Password,
    Counter,
}

/// One live input variant.
#[derive(Debug)]
struct Sample {
    config: input::Config,
    state: input::State,
}

impl Sample {
    fn new(config: input::Config) -> Self {
        Self {
            config,
            state: input::State::new(),
        }
    }
}

/// State for the catalog screen: the expansion set plus the owned variant
/// states the section bodies render from.
#[derive(Debug)]
pub struct State {
    expanded: HashSet<Section>,
    text_sample: Sample,
    password_sample: Sample,
    counter_sample: Sample,
    toast_samples: Vec<Notification>,
    menu_sample: Vec<MenuNode>,
}

impl State {
    /// Create a new catalog state with all sections collapsed.
    pub fn new(i18n: &I18n) -> Self {
        let toast_samples = vec![
            Notification::success(i18n.tr("catalog-toast-success-message"))
                .with_title(i18n.tr("catalog-toast-success-title"))
                .with_duration(Duration::ZERO),
            Notification::error(i18n.tr("catalog-toast-error-message"))
                .with_title(i18n.tr("catalog-toast-error-title"))
                .with_duration(Duration::ZERO),
            Notification::warning(i18n.tr("catalog-toast-warning-message"))
                .with_action(i18n.tr("catalog-toast-action-label"))
                .with_duration(Duration::ZERO),
            Notification::info(i18n.tr("catalog-toast-info-message")).with_duration(Duration::ZERO),
        ];

        let menu_sample = vec![
            MenuNode::leaf("dashboard", i18n.tr("catalog-menu-dashboard"))
                .with_icon("🏠")
                .with_target("/dashboard"),
            MenuNode::leaf("content", i18n.tr("catalog-menu-content"))
                .with_icon("📝")
                .with_children(vec![
                    MenuNode::leaf("articles", i18n.tr("catalog-menu-articles"))
                        .with_target("/articles"),
                    MenuNode::leaf("pages", i18n.tr("catalog-menu-pages")).with_target("/pages"),
                ]),
            MenuNode::leaf("admin", i18n.tr("catalog-menu-admin")).disabled(),
        ];

        Self {
            expanded: HashSet::new(),
            text_sample: Sample::new(
                input::Config::new(i18n.tr("catalog-input-text-placeholder"))
                    .label(i18n.tr("catalog-input-text-label"))
                    .clearable(),
            ),
            password_sample: Sample::new(
                input::Config::new(i18n.tr("catalog-input-password-placeholder"))
                    .kind(input::Kind::Password)
                    .label(i18n.tr("catalog-input-password-label")),
            ),
            counter_sample: Sample::new(
                input::Config::new(i18n.tr("catalog-input-counter-placeholder"))
                    .label(i18n.tr("catalog-input-counter-label"))
                    .max_length(40, true)
                    .clearable(),
            ),
            toast_samples,
            menu_sample,
        }
    }

    /// Check if a section is expanded.
    pub fn is_expanded(&self, section: Section) -> bool {
        self.expanded.contains(&section)
    }

    /// Toggle a section's expanded state.
    pub fn toggle(&mut self, section: Section) {
        if self.expanded.contains(&section) {
            self.expanded.remove(&section);
        } else {
            self.expanded.insert(section);
        }
    }

    fn sample_mut(&mut self, id: SampleId) -> &mut Sample {
        match id {
            SampleId::Text => &mut self.text_sample,
            SampleId::Password => &mut self.password_sample,
            SampleId::Counter => &mut self.counter_sample,
        }
    }
}

/// Contextual data needed to render the catalog screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
}

/// Messages emitted by the catalog screen.
#[derive(Debug, Clone)]
pub enum Message {
    BackToDemo,
    ToggleSection(Section),
    SampleInput(SampleId, input::Message),
    /// Interactions with the static toast variants; ignored by design.
    SampleToast(NotificationMessage),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    BackToDemo,
}

/// Process a catalog screen message and return the corresponding event.
pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::BackToDemo => Event::BackToDemo,
        Message::ToggleSection(section) => {
            state.toggle(section);
            Event::None
        }
        Message::SampleInput(id, m) => {
            let sample = state.sample_mut(id);
            input::update(&mut sample.state, &sample.config, m);
            Event::None
        }
        // Toast variants in the catalog are display-only
        Message::SampleToast(_) => Event::None,
    }
}

/// Render the catalog screen.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let back_button = button(
        text(format!("← {}", ctx.i18n.tr("catalog-back-button"))).size(typography::BODY),
    )
    .on_press(Message::BackToDemo)
    .style(styles::button::chrome);

    let title = Text::new(ctx.i18n.tr("catalog-title")).size(typography::TITLE_LG);
    let subtitle = Text::new(ctx.i18n.tr("catalog-subtitle")).size(typography::BODY);

    let input_section = build_collapsible_section(
        &ctx,
        Section::Input,
        ctx.i18n.tr("catalog-section-input"),
        build_input_content(&ctx),
    );

    let toast_section = build_collapsible_section(
        &ctx,
        Section::Toast,
        ctx.i18n.tr("catalog-section-toast"),
        build_toast_content(&ctx),
    );

    let sidebar_section = build_collapsible_section(
        &ctx,
        Section::Sidebar,
        ctx.i18n.tr("catalog-section-sidebar"),
        build_sidebar_content(&ctx),
    );

    let content = Column::new()
        .width(Length::Fill)
        .spacing(spacing::SM)
        .padding(spacing::MD)
        .push(back_button)
        .push(title)
        .push(subtitle)
        .push(input_section)
        .push(toast_section)
        .push(sidebar_section);

    scrollable(content).into()
}

/// Build a collapsible section with header and content.
fn build_collapsible_section<'a>(
    ctx: &ViewContext<'a>,
    section: Section,
    title: String,
    content: Element<'a, Message>,
) -> Element<'a, Message> {
    let is_expanded = ctx.state.is_expanded(section);

    // Expand/collapse indicator
    let indicator = Text::new(if is_expanded { "▼" } else { "▶" }).size(typography::BODY);

    let header_content = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(indicator)
        .push(Text::new(title).size(typography::TITLE_SM));

    let header = button(header_content)
        .width(Length::Fill)
        .padding(spacing::SM)
        .style(styles::button::menu_item)
        .on_press(Message::ToggleSection(section));

    let mut section_column = Column::new().spacing(spacing::XS).push(header);

    if is_expanded {
        let content_container = Container::new(content)
            .padding(spacing::MD)
            .width(Length::Fill)
            .style(styles::container::card);
        section_column = section_column.push(content_container);
    }

    section_column.into()
}

// ─────────────────────────────────────────────────────────────────────────────
// Section content builders
// ─────────────────────────────────────────────────────────────────────────────

fn build_input_content<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let description = build_paragraph(ctx.i18n.tr("catalog-input-description"));

    let props_title = build_subsection_title(ctx.i18n.tr("catalog-props-title"));
    let props = Column::new()
        .spacing(spacing::XXS)
        .push(build_prop_row("kind", "text | password | email | number", "text"))
        .push(build_prop_row("size", "small | medium | large", "medium"))
        .push(build_prop_row("clearable", "bool", "false"))
        .push(build_prop_row("max_length", "usize", "—"))
        .push(build_prop_row("error", "String", "—"))
        .push(build_prop_row("disabled", "bool", "false"));

    let variants_title = build_subsection_title(ctx.i18n.tr("catalog-variants-title"));
    let variants = Column::new()
        .spacing(spacing::MD)
        .push(sample_view(&ctx.state.text_sample, SampleId::Text))
        .push(sample_view(&ctx.state.password_sample, SampleId::Password))
        .push(sample_view(&ctx.state.counter_sample, SampleId::Counter));

    Column::new()
        .spacing(spacing::SM)
        .push(description)
        .push(props_title)
        .push(props)
        .push(variants_title)
        .push(variants)
        .into()
}

fn build_toast_content<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let description = build_paragraph(ctx.i18n.tr("catalog-toast-description"));

    let props_title = build_subsection_title(ctx.i18n.tr("catalog-props-title"));
    let props = Column::new()
        .spacing(spacing::XXS)
        .push(build_prop_row("kind", "success | error | warning | info", "info"))
        .push(build_prop_row("message", "String", "required"))
        .push(build_prop_row("title", "String", "—"))
        .push(build_prop_row("duration_ms", "u64 (0 disables auto-dismiss)", "5000"))
        .push(build_prop_row("dismissable", "bool", "true"))
        .push(build_prop_row("position", "one of six anchors", "bottom-trailing"))
        .push(build_prop_row("action_label", "String", "—"));

    let variants_title = build_subsection_title(ctx.i18n.tr("catalog-variants-title"));
    let mut variants = Column::new().spacing(spacing::SM);
    for notification in &ctx.state.toast_samples {
        variants = variants.push(Toast::view(notification).map(Message::SampleToast));
    }

    Column::new()
        .spacing(spacing::SM)
        .push(description)
        .push(props_title)
        .push(props)
        .push(variants_title)
        .push(variants)
        .into()
}

fn build_sidebar_content<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let description = build_paragraph(ctx.i18n.tr("catalog-sidebar-description"));

    let props_title = build_subsection_title(ctx.i18n.tr("catalog-props-title"));
    let props = Column::new()
        .spacing(spacing::XXS)
        .push(build_prop_row("items", "Vec<MenuNode>", "required"))
        .push(build_prop_row("is_open", "bool", "false"))
        .push(build_prop_row("width", "f32", "280"))
        .push(build_prop_row("position", "leading | trailing", "trailing"))
        .push(build_prop_row("show_scrim", "bool", "true"));

    let variants_title = build_subsection_title(ctx.i18n.tr("catalog-variants-title"));

    // Static rendering of a fully expanded sample tree
    let expanded: HashSet<String> = ctx
        .state
        .menu_sample
        .iter()
        .filter(|node| node.has_children())
        .map(|node| node.id.clone())
        .collect();

    let mut rows = Column::new().spacing(spacing::XXS);
    for entry in flatten_visible(&ctx.state.menu_sample, &expanded) {
        let indent = entry.depth as f32 * sizing::MENU_INDENT;
        let mut row = Row::new()
            .spacing(spacing::SM)
            .align_y(Vertical::Center)
            .push(Space::new().width(Length::Fixed(indent)));
        if let Some(icon) = &entry.node.icon {
            row = row.push(Text::new(icon.clone()).size(typography::BODY));
        }
        let label = Text::new(entry.node.label.clone())
            .size(typography::BODY)
            .style(move |theme: &Theme| iced::widget::text::Style {
                color: entry
                    .node
                    .disabled
                    .then(|| theme.extended_palette().background.weak.text),
            });
        row = row.push(label);
        if entry.node.has_children() {
            row = row.push(Text::new("▼").size(typography::CAPTION));
        }
        rows = rows.push(row);
    }

    Column::new()
        .spacing(spacing::SM)
        .push(description)
        .push(props_title)
        .push(props)
        .push(variants_title)
        .push(rows)
        .into()
}

// ─────────────────────────────────────────────────────────────────────────────
// Helper functions for building UI elements
// ─────────────────────────────────────────────────────────────────────────────

fn sample_view(sample: &Sample, id: SampleId) -> Element<'_, Message> {
    input::view(input::ViewContext {
        config: &sample.config,
        state: &sample.state,
    })
    .map(move |m| Message::SampleInput(id, m))
}

/// Build a paragraph of text.
fn build_paragraph<'a>(content: String) -> Element<'a, Message> {
    Text::new(content).size(typography::BODY).into()
}

/// Build a subsection title (e.g., "Configuration", "Variants").
fn build_subsection_title<'a>(title: String) -> Element<'a, Message> {
    Text::new(title)
        .size(typography::BODY)
        .style(|theme: &Theme| iced::widget::text::Style {
            color: Some(theme.extended_palette().background.strong.text),
        })
        .into()
}

/// Build a single configuration row with name badge, type, and default.
fn build_prop_row<'a>(name: &'a str, ty: &'a str, default: &'a str) -> Element<'a, Message> {
    let name_badge = Container::new(Text::new(name).size(typography::CAPTION))
        .padding([spacing::XXS, spacing::XS])
        .style(styles::container::badge);

    Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(Container::new(name_badge).width(Length::Fixed(110.0)))
        .push(Container::new(Text::new(ty).size(typography::BODY_SM)).width(Length::Fill))
        .push(Text::new(default).size(typography::BODY_SM))
        .into()
}
