// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event types.
//!
//! Each event captures one non-fatal problem: a translation lookup that fell
//! through both tiers, a directive the parser could not read, or a storage
//! layer that failed underneath the session.

use std::time::Instant;

use serde::{Deserialize, Serialize};

/// The type and payload of a diagnostic event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// A translation key was absent from both the active language map and
    /// the default language map.
    MissingKey {
        /// The key that was looked up.
        key: String,
        /// The active language at the time of the lookup.
        language: String,
        /// The default language that was consulted second.
        fallback: String,
    },

    /// An attribute directive segment did not have the `attr:key` shape.
    MalformedDirective {
        /// The offending segment, as written.
        directive: String,
    },

    /// The translation table could not be read or parsed.
    TableLoadFailed {
        /// Underlying I/O or parse error.
        detail: String,
    },

    /// The persisted language preference could not be read or written.
    StateStoreFailed {
        /// Underlying I/O or encoding error.
        detail: String,
    },

    /// The settings file could not be read or parsed.
    ConfigLoadFailed {
        /// Underlying I/O or parse error.
        detail: String,
    },
}

impl DiagnosticKind {
    /// Returns the console form of this event.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            DiagnosticKind::MissingKey {
                key,
                language,
                fallback,
            } => {
                format!("[i18n] Missing key \"{key}\" for lang \"{language}\" (and {fallback})")
            }
            DiagnosticKind::MalformedDirective { directive } => {
                format!("[i18n] Malformed attribute directive \"{directive}\"")
            }
            DiagnosticKind::TableLoadFailed { detail } => {
                format!("[i18n] Failed to load translations.json: {detail}")
            }
            DiagnosticKind::StateStoreFailed { detail } => {
                format!("[state] Failed to persist language preference: {detail}")
            }
            DiagnosticKind::ConfigLoadFailed { detail } => {
                format!("[config] Failed to load settings: {detail}")
            }
        }
    }
}

/// A diagnostic event with timestamp.
#[derive(Debug, Clone)]
pub struct DiagnosticEvent {
    /// When the event occurred (monotonic clock).
    pub timestamp: Instant,
    /// The type and payload of the event.
    pub kind: DiagnosticKind,
}

impl DiagnosticEvent {
    /// Creates a new diagnostic event with the current timestamp.
    #[must_use]
    pub fn new(kind: DiagnosticKind) -> Self {
        Self {
            timestamp: Instant::now(),
            kind,
        }
    }
}
