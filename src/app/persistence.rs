// SPDX-License-Identifier: MPL-2.0
//! Language preference persistence logic.
//!
//! This module applies a language selection end to end: revalidate the
//! requested code against the loaded table, rewrite the page, and persist
//! the choice so the next session starts where the visitor left off.

use super::persisted_state::AppState;
use super::Message;
use crate::diagnostics::{DiagnosticKind, DiagnosticLog};
use crate::i18n::Localizer;
use crate::page::{self, Page};
use iced::Task;

/// Activates `language`, rewrites the page, and persists the result.
///
/// The persisted value is the language actually activated, which is the
/// default when the requested code has no map in the table.
pub fn apply_language_change(
    localizer: &mut Localizer,
    page: &mut Page,
    app_state: &mut AppState,
    log: &mut DiagnosticLog,
    language: &str,
) -> Task<Message> {
    localizer.set_language(language);
    page::apply(page, localizer, log);

    app_state.language = Some(localizer.current_language().to_string());
    persist_state(app_state, log);

    Task::none()
}

/// Writes the session state to disk, recording a diagnostic on failure.
///
/// A failed write is never surfaced as a toast; the session keeps running
/// on the in-memory state and only the log keeps the evidence.
///
/// Guarded during tests to keep isolation: unit tests exercise the logic by
/// calling `AppState::save_to` directly with a temp directory.
pub fn persist_state(app_state: &AppState, log: &mut DiagnosticLog) {
    if cfg!(test) {
        return;
    }

    if let Some(warning) = app_state.save() {
        log.record(DiagnosticKind::StateStoreFailed { detail: warning });
    }
}
