// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::i18n::LanguageTable;
use crate::page::Page;
use crate::ui::carousel_view;
use crate::ui::notifications;
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    /// A language was picked in the header selector.
    LanguageSelected(String),
    /// The translation table finished loading (startup or reload).
    TranslationsLoaded {
        table: LanguageTable,
        warning: Option<String>,
    },
    /// Reload the translation table from disk (F5).
    ReloadTranslations,
    /// Interaction with one carousel, addressed by its position on the page.
    Carousel {
        index: usize,
        message: carousel_view::Message,
    },
    /// A keyboard arrow stepped the focused carousel.
    ArrowKeyPressed(ArrowKey),
    /// Shared autoplay timer fired; every carousel advances together.
    AutoplayTick(Instant),
    /// Redraw cadence tick sampling the in-flight track motions.
    AnimationTick(Instant),
    /// Cursor moved inside the window; feeds any in-flight drag.
    PointerMoved(f32),
    /// Primary button released anywhere in the window; settles an in-flight drag.
    PointerReleased,
    /// Cursor left the window; treated as a release at the last known position.
    PointerLeft,
    /// The window gained or lost focus; autoplay pauses while unfocused.
    WindowFocusChanged(bool),
    /// The window was resized; drag distances stay in physical pixels.
    ViewportResized(f32),
    Notification(notifications::NotificationMessage),
    Tick(Instant), // Periodic tick for notification auto-dismiss
}

/// Horizontal arrow keys recognized by the keyboard subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrowKey {
    Left,
    Right,
}

/// Runtime flags passed in from the CLI or launcher to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional language override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional directory containing a `translations.json` for custom builds.
    pub i18n_dir: Option<String>,
    /// Optional directory the page manifest and slide images were read from.
    /// `None` means the embedded assets are in use.
    pub content_dir: Option<PathBuf>,
    /// The page model parsed by the launcher before the UI starts.
    pub page: Page,
    /// Detail of a non-fatal embedded-content failure, surfaced as a toast.
    pub content_warning: Option<String>,
}
