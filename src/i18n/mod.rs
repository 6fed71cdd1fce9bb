// SPDX-License-Identifier: MPL-2.0
//! Localization engine.
//!
//! Translations live in a single JSON resource shaped as
//! `{ language: { key: value } }` with two reserved keys (`_title`,
//! `_description`) carrying page metadata. Lookups resolve in two tiers:
//! the active language first, then the default language, and a key absent
//! from both leaves the target untouched and records a diagnostic.
//!
//! # Features
//!
//! - Fresh table loads from an override directory or the embedded resource,
//!   degrading to an empty default table instead of failing
//! - Explicit two-tier resolution with an origin code per lookup
//! - Revalidating language switches (unknown codes fall back to the default)
//! - Attribute-mapping directive parsing for per-attribute translations
//! - Startup language resolution from CLI, stored preference, or OS locale

mod directive;
mod localizer;
mod resolve;
mod table;

pub use directive::{parse_directive, AttributeBinding, ParsedDirective};
pub use localizer::{resolve_startup_language, Localizer};
pub use resolve::{resolve, Origin, Resolution};
pub use table::{LanguageTable, DEFAULT_LANGUAGE, KEY_DESCRIPTION, KEY_TITLE, TRANSLATIONS_FILE};
