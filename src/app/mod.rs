// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the screens and widgets.
//!
//! The `App` struct wires together the demo page, the component catalog, the
//! sidebar panel, and the notification manager, and translates widget events
//! into host-side effects: pushing toasts, toggling the panel's open flag,
//! and replacing the current location when a navigation leaf is activated.
//! Policy decisions (toast defaults, panel geometry, localization) stay
//! close to the main update loop so user-facing behavior is easy to audit.

mod message;
mod screen;
mod subscription;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::config::{self, Config};
use crate::i18n::fluent::I18n;
use crate::ui::notifications::{Anchor, Notification, NotificationMessage, Severity};
use crate::ui::sidebar::{self, Edge, MenuNode, PanelWidth};
use crate::ui::theming::ThemeMode;
use crate::ui::{about, catalog, demo, navbar, notifications};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;
use std::time::{Duration, Instant};

pub const WINDOW_DEFAULT_WIDTH: u32 = 900;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 700;
pub const MIN_WINDOW_WIDTH: u32 = 600;
pub const MIN_WINDOW_HEIGHT: u32 = 500;

/// Root Iced application state that bridges the widgets, localization, and
/// persisted preferences.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    theme_mode: ThemeMode,
    demo: demo::State,
    catalog: catalog::State,
    /// Panel-local state (expansion set + scroll lock). The open flag is
    /// flipped from here, the host side.
    sidebar: sidebar::State,
    /// The menu tree handed to the panel; the panel only reads it.
    menu_items: Vec<MenuNode>,
    /// Toast notification manager; doubles as the host's list of active
    /// notifications.
    notifications: notifications::Manager,
    toast_duration: Duration,
    toast_anchor: Anchor,
    toast_dismissable: bool,
    panel_width: PanelWidth,
    panel_position: Edge,
    panel_show_scrim: bool,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("sidebar_open", &self.sidebar.is_open())
            .field("notifications", &self.notifications.visible_count())
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 wants a Fn boot closure; the RefCell<Option<_>> lets the
    // one-shot flags move out on the single call that actually happens
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes application state from `Flags` received from the launcher.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) =
            config::load_with_override(flags.config_dir.as_ref().map(PathBuf::from));
        Self::from_config(config, config_warning, flags)
    }

    /// Builds the application from an already-loaded configuration.
    fn from_config(
        config: Config,
        config_warning: Option<String>,
        flags: Flags,
    ) -> (Self, Task<Message>) {
        let i18n = I18n::new(flags.lang.clone(), &config);
        let theme_mode = flags
            .theme
            .as_deref()
            .and_then(parse_theme_flag)
            .unwrap_or(config.general.theme_mode);

        let toast_duration = Duration::from_millis(
            config
                .toast
                .duration_ms
                .unwrap_or(config::DEFAULT_TOAST_DURATION_MS),
        );
        let toast_anchor = config.toast.anchor.unwrap_or_default();
        let toast_dismissable = config.toast.dismissable.unwrap_or(true);

        let panel_width =
            PanelWidth::new(config.sidebar.width.unwrap_or(config::DEFAULT_PANEL_WIDTH));
        let panel_position = config.sidebar.position.unwrap_or_default();
        let panel_show_scrim = config.sidebar.show_scrim.unwrap_or(true);

        let mut app = App {
            screen: Screen::Demo,
            theme_mode,
            demo: demo::State::new(&i18n),
            catalog: catalog::State::new(&i18n),
            sidebar: sidebar::State::new(),
            menu_items: build_menu_items(&i18n),
            notifications: notifications::Manager::new(),
            toast_duration,
            toast_anchor,
            toast_dismissable,
            panel_width,
            panel_position,
            panel_show_scrim,
            i18n,
        };

        if let Some(key) = config_warning {
            let message = app.i18n.tr(&key);
            app.notifications.push(Notification::warning(message));
        }

        (app, Task::none())
    }

    fn title(&self) -> String {
        self.i18n.tr("app-title")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.to_iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_tick_subscription(self.notifications.has_notifications())
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            screen: self.screen,
            demo: &self.demo,
            catalog: &self.catalog,
            sidebar: &self.sidebar,
            menu_items: &self.menu_items,
            panel_width: self.panel_width,
            panel_position: self.panel_position,
            panel_show_scrim: self.panel_show_scrim,
            notifications: &self.notifications,
        })
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Demo(demo_message) => {
                match demo::update(&mut self.demo, demo_message) {
                    demo::Event::None => {}
                    demo::Event::ShowToast(severity) => self.push_demo_toast(severity),
                    demo::Event::OpenSidebar => self.sidebar.set_open(true),
                }
                Task::none()
            }
            Message::Catalog(catalog_message) => {
                match catalog::update(&mut self.catalog, catalog_message) {
                    catalog::Event::None => {}
                    catalog::Event::BackToDemo => self.screen = Screen::Demo,
                }
                Task::none()
            }
            Message::About(about_message) => {
                match about::update(&about_message) {
                    about::Event::BackToDemo => self.screen = Screen::Demo,
                }
                Task::none()
            }
            Message::Navbar(navbar_message) => {
                match navbar::update(&navbar_message) {
                    navbar::Event::OpenCatalog => self.screen = Screen::Catalog,
                    navbar::Event::OpenAbout => self.screen = Screen::About,
                }
                Task::none()
            }
            Message::Sidebar(sidebar_message) => {
                match sidebar::panel::update(&mut self.sidebar, sidebar_message) {
                    sidebar::Event::None => {}
                    sidebar::Event::Closed => self.sidebar.set_open(false),
                    sidebar::Event::Navigated { target } => {
                        // The navigation side effect: replace the current
                        // location, then close the panel.
                        self.demo.set_location(target);
                        self.sidebar.set_open(false);
                    }
                    sidebar::Event::Activated(node) => {
                        let message = self
                            .i18n
                            .tr_with_args("notification-item-activated", &[("label", &node.label)]);
                        self.notifications.push(self.build_toast(Severity::Info, message, None));
                        self.sidebar.set_open(false);
                    }
                }
                Task::none()
            }
            Message::Notification(notification_message) => {
                let now = Instant::now();
                match notification_message {
                    NotificationMessage::Dismiss(id) => {
                        self.notifications.close(id, now);
                    }
                    NotificationMessage::ActionPressed(id) => {
                        if self.notifications.press_action(id, now) {
                            let message = self.i18n.tr("notification-action-feedback");
                            self.notifications
                                .push(self.build_toast(Severity::Info, message, None));
                        }
                    }
                }
                Task::none()
            }
            Message::Tick(now) => {
                // Completed removals come back here; the manager has already
                // dropped them from the host's list.
                let _closed = self.notifications.tick(now);
                Task::none()
            }
        }
    }

    /// Builds a toast using the configured defaults.
    fn build_toast(
        &self,
        severity: Severity,
        message: String,
        title: Option<String>,
    ) -> Notification {
        let mut toast = Notification::new(severity, message)
            .with_duration(self.toast_duration)
            .with_anchor(self.toast_anchor);
        if let Some(title) = title {
            toast = toast.with_title(title);
        }
        if !self.toast_dismissable {
            toast = toast.not_dismissable();
        }
        toast
    }

    /// Pushes the demo toast for the given severity.
    fn push_demo_toast(&mut self, severity: Severity) {
        let (title_key, message_key) = match severity {
            Severity::Success => ("demo-toast-success-title", "demo-toast-success-message"),
            Severity::Error => ("demo-toast-error-title", "demo-toast-error-message"),
            Severity::Warning => ("demo-toast-warning-title", "demo-toast-warning-message"),
            Severity::Info => ("demo-toast-info-title", "demo-toast-info-message"),
        };

        let mut toast = self.build_toast(
            severity,
            self.i18n.tr(message_key),
            Some(self.i18n.tr(title_key)),
        );
        // The warning demo carries the action button
        if severity == Severity::Warning {
            toast = toast.with_action(self.i18n.tr("demo-toast-action-label"));
        }
        self.notifications.push(toast);
    }
}

/// Builds the demo's sidebar menu tree.
fn build_menu_items(i18n: &I18n) -> Vec<MenuNode> {
    vec![
        MenuNode::leaf("dashboard", i18n.tr("menu-dashboard"))
            .with_icon("🏠")
            .with_target("/dashboard"),
        MenuNode::leaf("components", i18n.tr("menu-components"))
            .with_icon("🧩")
            .with_children(vec![
                MenuNode::leaf("components-input", i18n.tr("menu-components-input"))
                    .with_target("/components/input"),
                MenuNode::leaf("components-toast", i18n.tr("menu-components-toast"))
                    .with_target("/components/toast"),
                MenuNode::leaf("components-sidebar", i18n.tr("menu-components-sidebar"))
                    .with_target("/components/sidebar"),
            ]),
        MenuNode::leaf("docs", i18n.tr("menu-docs"))
            .with_icon("📚")
            .with_target("/docs"),
        MenuNode::leaf("settings", i18n.tr("menu-settings")).with_icon("⚙"),
    ]
}

fn parse_theme_flag(raw: &str) -> Option<ThemeMode> {
    match raw.to_lowercase().as_str() {
        "light" => Some(ThemeMode::Light),
        "dark" => Some(ThemeMode::Dark),
        "system" => Some(ThemeMode::System),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::demo::Message as DemoMessage;
    use crate::ui::sidebar::Message as SidebarMessage;

    fn test_app() -> App {
        let (app, _task) = App::from_config(Config::default(), None, Flags::default());
        app
    }

    #[test]
    fn demo_toast_button_pushes_with_config_defaults() {
        let mut app = test_app();

        app.update(Message::Demo(DemoMessage::ShowToastPressed(
            Severity::Success,
        )));

        assert_eq!(app.notifications.visible_count(), 1);
        let toast = app.notifications.visible().next().unwrap();
        assert_eq!(toast.severity(), Severity::Success);
        assert_eq!(toast.anchor(), Anchor::BottomTrailing);
        assert_eq!(toast.duration(), Duration::from_millis(5000));
        assert!(toast.is_dismissable());
    }

    #[test]
    fn warning_demo_toast_carries_the_action() {
        let mut app = test_app();

        app.update(Message::Demo(DemoMessage::ShowToastPressed(
            Severity::Warning,
        )));

        let toast = app.notifications.visible().next().unwrap();
        assert!(toast.action_label().is_some());
    }

    #[test]
    fn sidebar_opens_from_demo_and_closes_from_scrim() {
        let mut app = test_app();
        assert!(!app.sidebar.is_open());

        app.update(Message::Demo(DemoMessage::OpenSidebarPressed));
        assert!(app.sidebar.is_open());

        app.update(Message::Sidebar(SidebarMessage::ScrimPressed));
        assert!(!app.sidebar.is_open());
    }

    #[test]
    fn navigation_replaces_location_and_closes_panel() {
        let mut app = test_app();
        app.update(Message::Demo(DemoMessage::OpenSidebarPressed));

        let docs = app.menu_items[2].clone();
        app.update(Message::Sidebar(SidebarMessage::ItemPressed(docs)));

        assert_eq!(app.demo.location(), "/docs");
        assert!(!app.sidebar.is_open());
        assert_eq!(app.notifications.visible_count(), 0);
    }

    #[test]
    fn branch_activation_keeps_panel_open() {
        let mut app = test_app();
        app.update(Message::Demo(DemoMessage::OpenSidebarPressed));

        let components = app.menu_items[1].clone();
        app.update(Message::Sidebar(SidebarMessage::ItemPressed(components)));

        assert!(app.sidebar.is_open());
        assert!(app.sidebar.is_expanded("components"));
    }

    #[test]
    fn plain_leaf_activation_notifies_and_closes() {
        let mut app = test_app();
        app.update(Message::Demo(DemoMessage::OpenSidebarPressed));

        let settings = app.menu_items[3].clone();
        app.update(Message::Sidebar(SidebarMessage::ItemPressed(settings)));

        assert!(!app.sidebar.is_open());
        assert_eq!(app.notifications.visible_count(), 1);
        assert_eq!(
            app.notifications.visible().next().unwrap().severity(),
            Severity::Info
        );
    }

    #[test]
    fn dismiss_then_tick_removes_the_toast() {
        let mut app = test_app();
        app.update(Message::Demo(DemoMessage::ShowToastPressed(Severity::Info)));
        let id = app.notifications.visible().next().unwrap().id();

        app.update(Message::Notification(NotificationMessage::Dismiss(id)));
        assert_eq!(app.notifications.visible_count(), 1, "exit is not instant");

        app.update(Message::Tick(Instant::now() + Duration::from_millis(400)));
        assert_eq!(app.notifications.visible_count(), 0);
    }

    #[test]
    fn action_press_is_acknowledged_once() {
        let mut app = test_app();
        app.update(Message::Demo(DemoMessage::ShowToastPressed(
            Severity::Warning,
        )));
        let id = app.notifications.visible().next().unwrap().id();

        app.update(Message::Notification(NotificationMessage::ActionPressed(id)));
        assert_eq!(app.notifications.visible_count(), 2);

        // A duplicate press adds nothing
        app.update(Message::Notification(NotificationMessage::ActionPressed(id)));
        assert_eq!(app.notifications.visible_count(), 2);
    }

    #[test]
    fn navbar_and_back_buttons_switch_screens() {
        let mut app = test_app();
        assert_eq!(app.screen, Screen::Demo);

        app.update(Message::Navbar(navbar::Message::OpenCatalog));
        assert_eq!(app.screen, Screen::Catalog);

        app.update(Message::Catalog(catalog::Message::BackToDemo));
        assert_eq!(app.screen, Screen::Demo);

        app.update(Message::Navbar(navbar::Message::OpenAbout));
        assert_eq!(app.screen, Screen::About);

        app.update(Message::About(about::Message::BackToDemo));
        assert_eq!(app.screen, Screen::Demo);
    }

    #[test]
    fn config_warning_surfaces_as_warning_toast() {
        let (app, _task) = App::from_config(
            Config::default(),
            Some("notification-config-load-error".to_string()),
            Flags::default(),
        );

        assert_eq!(app.notifications.visible_count(), 1);
        assert_eq!(
            app.notifications.visible().next().unwrap().severity(),
            Severity::Warning
        );
    }

    #[test]
    fn theme_flag_overrides_config() {
        let flags = Flags {
            theme: Some("light".to_string()),
            ..Flags::default()
        };
        let (app, _task) = App::from_config(Config::default(), None, flags);
        assert_eq!(app.theme_mode, ThemeMode::Light);
    }

    #[test]
    fn view_renders_every_screen_with_overlays() {
        let mut app = test_app();
        app.update(Message::Demo(DemoMessage::ShowToastPressed(Severity::Info)));
        app.update(Message::Demo(DemoMessage::OpenSidebarPressed));

        for screen in [Screen::Demo, Screen::Catalog, Screen::About] {
            app.screen = screen;
            let _element = app.view();
        }
    }
}
