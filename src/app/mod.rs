// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the page and the engines.
//!
//! The `App` struct wires together the domains (localization, carousels,
//! notifications) and translates messages into side effects like state
//! persistence or translation loading. This file intentionally keeps policy
//! decisions (minimum window size, startup language resolution, autoplay
//! gating) close to the main update loop so it is easy to audit user-facing
//! behavior.

pub mod config;
mod message;
pub mod paths;
pub mod persisted_state;
mod persistence;
mod subscription;
mod update;
mod view;

pub use message::{ArrowKey, Flags, Message};

use crate::carousel::{Carousel, TrackMotion};
use crate::diagnostics::{DiagnosticKind, DiagnosticLog};
use crate::i18n::{LanguageTable, Localizer, DEFAULT_LANGUAGE};
use crate::page::Page;
use crate::ui::notifications;
use crate::ui::theming::AppTheme;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

/// Root Iced application state that bridges the showcase page, localization,
/// and persisted preferences.
pub struct App {
    pub localizer: Localizer,
    page: Page,
    /// One slide machine per non-empty deck, in page order.
    carousels: Vec<Carousel>,
    /// In-flight track animation per carousel, `None` when parked.
    motions: Vec<Option<TrackMotion>>,
    /// Last imposed track offset per carousel, in percent space.
    track_offsets: Vec<f32>,
    /// Carousel targeted by the arrow keys. Inert until a dot or arrow
    /// button establishes it.
    focused_carousel: Option<usize>,
    diagnostics: DiagnosticLog,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
    config: config::Config,
    /// Persisted application state (language preference).
    app_state: persisted_state::AppState,
    /// Horizontal pointer position, tracked while the cursor is in the window.
    cursor_x: Option<f32>,
    viewport_width: f32,
    window_focused: bool,
    /// Set once the first translation table arrives; gates the initial apply.
    translations_ready: bool,
    theme: AppTheme,
    cli_lang: Option<String>,
    i18n_dir: Option<String>,
    content_dir: Option<PathBuf>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("language", &self.localizer.current_language())
            .field("carousel_count", &self.carousels.len())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1024;
pub const MIN_WINDOW_HEIGHT: u32 = 600;
pub const MIN_WINDOW_WIDTH: u32 = 760;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    let icon = crate::icon::load_window_icon();

    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        icon,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = std::cell::RefCell::new(Some(flags));
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

impl Default for App {
    fn default() -> Self {
        Self {
            localizer: Localizer::new(LanguageTable::empty_default(), DEFAULT_LANGUAGE),
            page: Page::default(),
            carousels: Vec::new(),
            motions: Vec::new(),
            track_offsets: Vec::new(),
            focused_carousel: None,
            diagnostics: DiagnosticLog::new(),
            notifications: notifications::Manager::new(),
            config: config::Config::default(),
            app_state: persisted_state::AppState::default(),
            cursor_x: None,
            viewport_width: WINDOW_DEFAULT_WIDTH as f32,
            window_focused: true,
            translations_ready: false,
            theme: AppTheme::new(crate::ui::theming::ThemeMode::System),
            cli_lang: None,
            i18n_dir: None,
            content_dir: None,
        }
    }
}

impl App {
    /// Initializes application state and kicks off the asynchronous
    /// translation table load based on `Flags` received from the launcher.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();

        let mut app = App {
            page: flags.page,
            cli_lang: flags.lang,
            i18n_dir: flags.i18n_dir,
            content_dir: flags.content_dir,
            ..Self::default()
        };

        app.theme = AppTheme::new(config.general.theme_mode);

        // The real table arrives asynchronously; until then the localizer
        // holds an empty map for the configured fallback language.
        app.localizer = Localizer::new(
            LanguageTable::default(),
            &config.general.default_language,
        );

        // One machine per deck that has slides; empty decks render nothing
        // and get no controller, so indices stay aligned with the view.
        app.carousels = app
            .page
            .carousels()
            .filter_map(|deck| Carousel::new(deck.slides.len()))
            .collect();
        app.motions = vec![None; app.carousels.len()];
        app.track_offsets = vec![0.0; app.carousels.len()];

        // Load application state (persisted language preference)
        let (app_state, state_warning) = persisted_state::AppState::load();
        app.app_state = app_state;

        // A broken settings file warrants a toast; a broken state file only
        // costs the language preference, so it stays in the diagnostic log.
        if let Some(detail) = config_warning {
            app.diagnostics
                .record(DiagnosticKind::ConfigLoadFailed { detail });
            app.notifications.push(notifications::Notification::warning(
                "notification-config-load-error",
            ));
        }
        if let Some(detail) = state_warning {
            app.diagnostics
                .record(DiagnosticKind::StateStoreFailed { detail });
        }
        if flags.content_warning.is_some() {
            app.notifications.push(notifications::Notification::warning(
                "notification-content-load-error",
            ));
        }

        app.config = config;

        let task = update::load_translations_task(app.i18n_dir.clone());
        (app, task)
    }

    fn title(&self) -> String {
        self.page.metadata.title.clone()
    }

    fn theme(&self) -> Theme {
        if self.theme.mode.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription();
        let autoplay_sub = subscription::create_autoplay_subscription(
            self.config.carousel.autoplay,
            self.window_focused,
            self.carousels.iter().any(Carousel::is_dragging),
            self.carousels.len(),
            self.config.carousel.autoplay_interval(),
        );
        let animation_sub = subscription::create_animation_subscription(
            self.motions.iter().any(Option::is_some),
        );
        let tick_sub =
            subscription::create_tick_subscription(self.notifications.has_notifications());

        Subscription::batch([event_sub, autoplay_sub, animation_sub, tick_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            localizer: &mut self.localizer,
            page: &mut self.page,
            carousels: &mut self.carousels,
            motions: &mut self.motions,
            track_offsets: &mut self.track_offsets,
            focused_carousel: &mut self.focused_carousel,
            diagnostics: &mut self.diagnostics,
            notifications: &mut self.notifications,
            config: &self.config,
            app_state: &mut self.app_state,
            cursor_x: &mut self.cursor_x,
            viewport_width: &mut self.viewport_width,
            translations_ready: &mut self.translations_ready,
            cli_lang: &self.cli_lang,
            i18n_dir: &self.i18n_dir,
        };

        match message {
            Message::LanguageSelected(language) => {
                update::handle_language_selected(&mut ctx, &language)
            }
            Message::TranslationsLoaded { table, warning } => {
                update::handle_translations_loaded(&mut ctx, table, warning)
            }
            Message::ReloadTranslations => update::handle_reload_translations(&mut ctx),
            Message::Carousel { index, message } => {
                update::handle_carousel_message(&mut ctx, index, message)
            }
            Message::ArrowKeyPressed(key) => update::handle_arrow_key(&mut ctx, key),
            Message::AutoplayTick(_instant) => update::handle_autoplay_tick(&mut ctx),
            Message::AnimationTick(now) => update::handle_animation_tick(&mut ctx, now),
            Message::PointerMoved(x) => update::handle_pointer_moved(&mut ctx, x),
            Message::PointerReleased => update::handle_pointer_released(&mut ctx),
            Message::PointerLeft => update::handle_pointer_left(&mut ctx),
            Message::WindowFocusChanged(focused) => {
                self.window_focused = focused;
                Task::none()
            }
            Message::ViewportResized(width) => update::handle_viewport_resized(&mut ctx, width),
            Message::Notification(notification_message) => {
                self.notifications.handle_message(&notification_message);
                Task::none()
            }
            Message::Tick(_instant) => {
                // Periodic tick while toasts are visible; the manager retires
                // the ones whose auto-dismiss window has elapsed.
                self.notifications.tick();
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            localizer: &self.localizer,
            page: &self.page,
            carousels: &self.carousels,
            notifications: &self.notifications,
            colors: &self.theme.colors,
            viewport_width: self.viewport_width,
            content_dir: self.content_dir.as_deref(),
        })
    }
}
