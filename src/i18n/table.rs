// SPDX-License-Identifier: MPL-2.0
//! The translation table.
//!
//! A [`LanguageTable`] is the in-memory form of `translations.json`: flat
//! key-to-string maps grouped by language code. The table is loaded once
//! (and re-loaded fresh on demand) and read-only afterwards.

use std::collections::BTreeMap;
use std::path::Path;

use rust_embed::RustEmbed;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Reserved key carrying the page title.
pub const KEY_TITLE: &str = "_title";

/// Reserved key carrying the page meta description.
pub const KEY_DESCRIPTION: &str = "_description";

/// The always-present fallback language.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Name of the translation resource file.
pub const TRANSLATIONS_FILE: &str = "translations.json";

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

/// Flat `{ language: { key: value } }` translation table.
///
/// Language codes are opaque strings; `BTreeMap` keeps the available
/// languages in a stable order for selector widgets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LanguageTable {
    languages: BTreeMap<String, BTreeMap<String, String>>,
}

impl LanguageTable {
    /// Parses a table from its JSON form.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a table from `path`.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// The minimal table: an empty map under the default language.
    ///
    /// Every lookup against it degrades to "untouched plus diagnostic",
    /// which keeps the page interactive under total load failure.
    #[must_use]
    pub fn empty_default() -> Self {
        let mut table = Self::default();
        table.ensure_default(DEFAULT_LANGUAGE);
        table
    }

    /// Loads the table fresh from `dir`, or from the embedded resource when
    /// no override directory is given.
    ///
    /// On any read or parse failure the table degrades to
    /// [`LanguageTable::empty_default`] and the failure detail is returned
    /// alongside it for the caller to record.
    #[must_use]
    pub fn load_with_override(dir: Option<&Path>) -> (Self, Option<String>) {
        let loaded = match dir {
            Some(dir) => Self::load_from_path(&dir.join(TRANSLATIONS_FILE)),
            None => Self::load_embedded(),
        };

        match loaded {
            Ok(table) => (table, None),
            Err(error) => (Self::empty_default(), Some(error.to_string())),
        }
    }

    fn load_embedded() -> Result<Self> {
        let asset = Asset::get(TRANSLATIONS_FILE).ok_or_else(|| {
            crate::error::Error::Io(format!("embedded {TRANSLATIONS_FILE} not found"))
        })?;
        Self::from_json(&String::from_utf8_lossy(asset.data.as_ref()))
    }

    /// Guarantees that `default_language` has a (possibly empty) map, so the
    /// fallback tier always has somewhere to look.
    pub fn ensure_default(&mut self, default_language: &str) {
        self.languages
            .entry(default_language.to_string())
            .or_default();
    }

    /// Returns true when `language` has a map in the table.
    #[must_use]
    pub fn contains_language(&self, language: &str) -> bool {
        self.languages.contains_key(language)
    }

    /// Looks up `key` in the map for `language`.
    ///
    /// Only the language's own entries count; there is no fallback at this
    /// level.
    #[must_use]
    pub fn get(&self, language: &str, key: &str) -> Option<&str> {
        self.languages
            .get(language)
            .and_then(|entries| entries.get(key))
            .map(String::as_str)
    }

    /// The language codes present in the table, in stable sorted order.
    #[must_use]
    pub fn available_languages(&self) -> Vec<String> {
        self.languages.keys().cloned().collect()
    }

    /// Number of languages in the table.
    #[must_use]
    pub fn language_count(&self) -> usize {
        self.languages.len()
    }

    /// Inserts a single entry; used to build tables in tests and tools.
    pub fn insert(&mut self, language: &str, key: &str, value: &str) {
        self.languages
            .entry(language.to_string())
            .or_default()
            .insert(key.to_string(), value.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const SAMPLE: &str = r#"{
        "en": { "greeting": "Hello", "_title": "Showcase" },
        "fr": { "greeting": "Bonjour" }
    }"#;

    #[test]
    fn from_json_parses_nested_maps() {
        let table = LanguageTable::from_json(SAMPLE).expect("sample should parse");

        assert_eq!(table.get("en", "greeting"), Some("Hello"));
        assert_eq!(table.get("fr", "greeting"), Some("Bonjour"));
        assert_eq!(table.get("en", KEY_TITLE), Some("Showcase"));
    }

    #[test]
    fn from_json_rejects_malformed_input() {
        assert!(LanguageTable::from_json("{ not json").is_err());
        assert!(LanguageTable::from_json(r#"{"en": 3}"#).is_err());
    }

    #[test]
    fn get_has_no_cross_language_fallback() {
        let table = LanguageTable::from_json(SAMPLE).expect("sample should parse");

        assert_eq!(table.get("fr", KEY_TITLE), None);
        assert_eq!(table.get("de", "greeting"), None);
    }

    #[test]
    fn empty_default_has_only_the_default_language() {
        let table = LanguageTable::empty_default();

        assert!(table.contains_language(DEFAULT_LANGUAGE));
        assert_eq!(table.language_count(), 1);
        assert_eq!(table.get(DEFAULT_LANGUAGE, "anything"), None);
    }

    #[test]
    fn ensure_default_is_idempotent_and_preserves_entries() {
        let mut table = LanguageTable::from_json(SAMPLE).expect("sample should parse");

        table.ensure_default("en");
        table.ensure_default("en");

        assert_eq!(table.get("en", "greeting"), Some("Hello"));
        assert_eq!(table.language_count(), 2);
    }

    #[test]
    fn available_languages_are_sorted() {
        let mut table = LanguageTable::default();
        table.insert("fr", "k", "v");
        table.insert("de", "k", "v");
        table.insert("en", "k", "v");

        assert_eq!(table.available_languages(), vec!["de", "en", "fr"]);
    }

    #[test]
    fn load_with_override_reads_directory() {
        let dir = tempdir().expect("tempdir should be created");
        std::fs::write(dir.path().join(TRANSLATIONS_FILE), SAMPLE)
            .expect("sample table should be written");

        let (table, warning) = LanguageTable::load_with_override(Some(dir.path()));

        assert!(warning.is_none());
        assert_eq!(table.get("fr", "greeting"), Some("Bonjour"));
    }

    #[test]
    fn load_with_override_degrades_on_missing_file() {
        let dir = tempdir().expect("tempdir should be created");

        let (table, warning) = LanguageTable::load_with_override(Some(dir.path()));

        assert!(warning.is_some());
        assert_eq!(table, LanguageTable::empty_default());
    }

    #[test]
    fn load_with_override_degrades_on_parse_failure() {
        let dir = tempdir().expect("tempdir should be created");
        std::fs::write(dir.path().join(TRANSLATIONS_FILE), "{ broken")
            .expect("broken table should be written");

        let (table, warning) = LanguageTable::load_with_override(Some(dir.path()));

        assert!(warning.is_some());
        assert!(table.contains_language(DEFAULT_LANGUAGE));
        assert_eq!(table.language_count(), 1);
    }

    #[test]
    fn embedded_resource_parses() {
        let (table, warning) = LanguageTable::load_with_override(None);

        assert!(warning.is_none(), "embedded table should load: {warning:?}");
        assert!(table.contains_language(DEFAULT_LANGUAGE));
        assert!(table.language_count() >= 2);
    }
}
