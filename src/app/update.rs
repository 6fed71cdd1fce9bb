// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! This module contains the specialized message handlers `App::update`
//! dispatches to, all working through a single [`UpdateContext`] borrowed
//! from the application state for the duration of one message.

use super::config::Config;
use super::persisted_state::AppState;
use super::{persistence, ArrowKey, Message};
use crate::carousel::{offset_to_fraction, Carousel, TrackMotion};
use crate::diagnostics::{DiagnosticKind, DiagnosticLog};
use crate::i18n::{self, LanguageTable, Localizer};
use crate::page::{self, Page};
use crate::ui::carousel_view;
use crate::ui::notifications;
use iced::widget::scrollable::RelativeOffset;
use iced::widget::{operation, Id};
use iced::Task;
use std::path::Path;
use std::time::Instant;

/// Toast key shown when a translation table load fails.
const TABLE_LOAD_ERROR_KEY: &str = "notification-table-load-error";

/// Context for update operations containing mutable references to app state.
pub struct UpdateContext<'a> {
    pub localizer: &'a mut Localizer,
    pub page: &'a mut Page,
    pub carousels: &'a mut Vec<Carousel>,
    pub motions: &'a mut Vec<Option<TrackMotion>>,
    pub track_offsets: &'a mut Vec<f32>,
    pub focused_carousel: &'a mut Option<usize>,
    pub diagnostics: &'a mut DiagnosticLog,
    pub notifications: &'a mut notifications::Manager,
    pub config: &'a Config,
    pub app_state: &'a mut AppState,
    pub cursor_x: &'a mut Option<f32>,
    pub viewport_width: &'a mut f32,
    pub translations_ready: &'a mut bool,
    pub cli_lang: &'a Option<String>,
    pub i18n_dir: &'a Option<String>,
}

/// Spawns the asynchronous translation table load.
///
/// The table is read fresh from the override directory (or the embedded
/// resource) on every call, so a redeployed `translations.json` takes
/// effect on the next reload without a restart.
pub fn load_translations_task(i18n_dir: Option<String>) -> Task<Message> {
    Task::perform(
        async move {
            // Run the file read in a blocking task to keep the UI responsive
            tokio::task::spawn_blocking(move || {
                LanguageTable::load_with_override(i18n_dir.as_deref().map(Path::new))
            })
            .await
            .unwrap_or_else(|e| (LanguageTable::empty_default(), Some(e.to_string())))
        },
        |(table, warning)| Message::TranslationsLoaded { table, warning },
    )
}

/// Handles a selection from the language picker.
pub fn handle_language_selected(ctx: &mut UpdateContext<'_>, language: &str) -> Task<Message> {
    persistence::apply_language_change(
        ctx.localizer,
        ctx.page,
        ctx.app_state,
        ctx.diagnostics,
        language,
    )
}

/// Handles the arrival of a freshly loaded translation table.
///
/// The first arrival completes startup: the startup language is resolved
/// against the real table and the deferred first apply pass runs. Later
/// arrivals (F5 reloads) keep the active language, revalidated against the
/// new table. A failed load still swaps the table in; the loader already
/// degraded it to an empty default table, and the page keeps its current
/// texts while a toast and a diagnostic report the failure.
pub fn handle_translations_loaded(
    ctx: &mut UpdateContext<'_>,
    table: LanguageTable,
    warning: Option<String>,
) -> Task<Message> {
    let load_failed = warning.is_some();
    if let Some(detail) = warning {
        ctx.diagnostics
            .record(DiagnosticKind::TableLoadFailed { detail });
        ctx.notifications
            .push(notifications::Notification::warning(TABLE_LOAD_ERROR_KEY));
    }

    if *ctx.translations_ready {
        ctx.localizer.replace_table(table);
    } else {
        *ctx.translations_ready = true;
        let startup = i18n::resolve_startup_language(
            ctx.cli_lang.as_deref(),
            ctx.app_state.language.as_deref(),
            ctx.config.general.detect_system_locale,
            &ctx.config.general.default_language,
            &table,
        );
        ctx.localizer.replace_table(table);
        ctx.localizer.set_language(&startup);
    }

    if !load_failed {
        ctx.notifications.clear_table_load_errors();
    }

    page::apply(ctx.page, ctx.localizer, ctx.diagnostics);
    Task::none()
}

/// Handles the F5 reload shortcut.
pub fn handle_reload_translations(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    load_translations_task(ctx.i18n_dir.clone())
}

/// Task that scrolls the track of carousel `index` to `offset_percent`.
fn impose_track_offset(index: usize, offset_percent: f32, slide_count: usize) -> Task<Message> {
    operation::snap_to(
        Id::from(carousel_view::track_id(index)),
        RelativeOffset {
            x: offset_to_fraction(offset_percent, slide_count),
            y: 0.0,
        },
    )
}

/// Brings the rendered track of carousel `index` in line with its state.
///
/// Animated transitions (a committed move, a snap back) start a
/// [`TrackMotion`] that the redraw ticks sample; instantaneous ones (pointer
/// tracking during a drag) park the offset and scroll the track right away.
fn sync_track(ctx: &mut UpdateContext<'_>, index: usize) -> Task<Message> {
    let Some(carousel) = ctx.carousels.get(index) else {
        return Task::none();
    };
    let (Some(motion), Some(offset)) = (
        ctx.motions.get_mut(index),
        ctx.track_offsets.get_mut(index),
    ) else {
        return Task::none();
    };

    let render = carousel.render(*ctx.viewport_width);
    match render.transition.duration() {
        Some(duration) => {
            *motion = Some(TrackMotion::new(
                *offset,
                render.offset_percent,
                duration,
                Instant::now(),
            ));
            Task::none()
        }
        None => {
            *motion = None;
            *offset = render.offset_percent;
            impose_track_offset(index, render.offset_percent, carousel.slide_count())
        }
    }
}

/// Handles pointer interaction with one carousel.
///
/// Any interaction makes that carousel the keyboard focus. Drag starts use
/// the cursor position tracked by the event subscription; a press that
/// arrives before any cursor movement has no coordinate to anchor to and
/// starts no gesture.
pub fn handle_carousel_message(
    ctx: &mut UpdateContext<'_>,
    index: usize,
    message: carousel_view::Message,
) -> Task<Message> {
    *ctx.focused_carousel = Some(index);
    let Some(carousel) = ctx.carousels.get_mut(index) else {
        return Task::none();
    };

    match message {
        carousel_view::Message::Previous => carousel.prev(),
        carousel_view::Message::Next => carousel.next(),
        carousel_view::Message::DotPressed(slide) => carousel.go_to(slide as i64),
        carousel_view::Message::DragStarted => {
            let Some(x) = *ctx.cursor_x else {
                return Task::none();
            };
            carousel.begin_drag(x);
        }
        carousel_view::Message::DragReleased => {
            if carousel
                .end_drag(ctx.config.carousel.drag_commit_threshold)
                .is_none()
            {
                return Task::none();
            }
        }
    }

    sync_track(ctx, index)
}

/// Handles left/right arrow keys.
///
/// Arrows step the carousel the visitor last pressed on and nothing else;
/// before any press they are inert.
pub fn handle_arrow_key(ctx: &mut UpdateContext<'_>, key: ArrowKey) -> Task<Message> {
    let Some(index) = *ctx.focused_carousel else {
        return Task::none();
    };
    let Some(carousel) = ctx.carousels.get_mut(index) else {
        return Task::none();
    };

    match key {
        ArrowKey::Left => carousel.prev(),
        ArrowKey::Right => carousel.next(),
    }

    sync_track(ctx, index)
}

/// Handles one shared autoplay tick by advancing every carousel in lockstep.
///
/// A tick can already be queued when a drag starts; such stragglers are
/// dropped so the track never jumps under the visitor's pointer.
pub fn handle_autoplay_tick(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    if ctx.carousels.iter().any(Carousel::is_dragging) {
        return Task::none();
    }

    let mut tasks = Vec::new();
    for index in 0..ctx.carousels.len() {
        ctx.carousels[index].next();
        tasks.push(sync_track(ctx, index));
    }

    Task::batch(tasks)
}

/// Advances every in-flight track motion by one redraw tick.
///
/// Each sampled offset is imposed on its track; finished motions are
/// dropped, which in turn lets the animation subscription go dormant.
pub fn handle_animation_tick(ctx: &mut UpdateContext<'_>, now: Instant) -> Task<Message> {
    let mut tasks = Vec::new();
    for index in 0..ctx.motions.len() {
        let Some(motion) = ctx.motions[index] else {
            continue;
        };

        let sampled = motion.offset_at(now);
        if let Some(offset) = ctx.track_offsets.get_mut(index) {
            *offset = sampled;
        }
        let slide_count = ctx.carousels.get(index).map_or(1, Carousel::slide_count);
        tasks.push(impose_track_offset(index, sampled, slide_count));

        if motion.is_finished(now) {
            ctx.motions[index] = None;
        }
    }

    Task::batch(tasks)
}

/// Handles raw cursor movement.
///
/// The coordinate is remembered for the next drag start and fed to any
/// drag already in flight. Only the horizontal component is tracked;
/// vertical movement never changes slides.
pub fn handle_pointer_moved(ctx: &mut UpdateContext<'_>, x: f32) -> Task<Message> {
    *ctx.cursor_x = Some(x);

    let mut tasks = Vec::new();
    for index in 0..ctx.carousels.len() {
        if !ctx.carousels[index].is_dragging() {
            continue;
        }
        ctx.carousels[index].update_drag(x);
        tasks.push(sync_track(ctx, index));
    }

    Task::batch(tasks)
}

/// Handles a primary-button release anywhere in the window.
///
/// Releases are forwarded unconditionally by the subscription because the
/// pointer routinely leaves the carousel mid-drag; settling the gesture
/// twice is harmless since ending is idempotent.
pub fn handle_pointer_released(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let threshold = ctx.config.carousel.drag_commit_threshold;
    let mut tasks = Vec::new();
    for index in 0..ctx.carousels.len() {
        if ctx.carousels[index].end_drag(threshold).is_some() {
            tasks.push(sync_track(ctx, index));
        }
    }

    Task::batch(tasks)
}

/// Handles the cursor leaving the window: any drag settles at the last
/// coordinate seen inside it, and tracking resets.
pub fn handle_pointer_left(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let task = handle_pointer_released(ctx);
    *ctx.cursor_x = None;
    task
}

/// Handles a window resize by re-pinning every track at its current offset.
///
/// Scroll fractions survive a resize unchanged, but slide widths derive from
/// the viewport, so the imposition is repeated against the new geometry.
pub fn handle_viewport_resized(ctx: &mut UpdateContext<'_>, width: f32) -> Task<Message> {
    *ctx.viewport_width = width.max(1.0);

    let mut tasks = Vec::new();
    for index in 0..ctx.carousels.len() {
        let offset = ctx.track_offsets.get(index).copied().unwrap_or(0.0);
        tasks.push(impose_track_offset(
            index,
            offset,
            ctx.carousels[index].slide_count(),
        ));
    }

    Task::batch(tasks)
}
