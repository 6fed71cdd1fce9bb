// SPDX-License-Identifier: MPL-2.0
//! Language state: the loaded table plus the active and default languages.

use super::resolve::{resolve, Resolution};
use super::table::LanguageTable;

/// Owns the translation table and the active language.
///
/// All mutation goes through [`Localizer::set_language`] and
/// [`Localizer::replace_table`]; both revalidate the active language so it
/// always names a map that actually exists in the table.
#[derive(Debug, Clone)]
pub struct Localizer {
    table: LanguageTable,
    current_language: String,
    default_language: String,
}

impl Localizer {
    /// Creates a localizer over `table` with `default_language` active.
    ///
    /// The default language's map is created when absent, so the fallback
    /// tier can never dangle.
    #[must_use]
    pub fn new(mut table: LanguageTable, default_language: &str) -> Self {
        table.ensure_default(default_language);
        Self {
            table,
            current_language: default_language.to_string(),
            default_language: default_language.to_string(),
        }
    }

    /// The language currently driving all lookups.
    #[must_use]
    pub fn current_language(&self) -> &str {
        &self.current_language
    }

    /// The fallback language.
    #[must_use]
    pub fn default_language(&self) -> &str {
        &self.default_language
    }

    /// The language codes available for selection, in stable order.
    #[must_use]
    pub fn available_languages(&self) -> Vec<String> {
        self.table.available_languages()
    }

    /// Read access to the underlying table.
    #[must_use]
    pub fn table(&self) -> &LanguageTable {
        &self.table
    }

    /// Switches the active language to `code`.
    ///
    /// Codes with no map in the table fall back to the default language, so
    /// the active language always names a real map. Switching to the language
    /// that is already active is a no-op; the operation is idempotent either
    /// way.
    pub fn set_language(&mut self, code: &str) {
        if self.table.contains_language(code) {
            self.current_language = code.to_string();
        } else {
            self.current_language = self.default_language.clone();
        }
    }

    /// Replaces the table wholesale (fresh load or reload).
    ///
    /// The new table gets the default map guarantee, and the active language
    /// is revalidated against the new contents.
    pub fn replace_table(&mut self, table: LanguageTable) {
        self.table = table;
        self.table.ensure_default(&self.default_language);
        if !self.table.contains_language(&self.current_language) {
            self.current_language = self.default_language.clone();
        }
    }

    /// Resolves `key` in the active language with default-language fallback.
    #[must_use]
    pub fn resolve(&self, key: &str) -> Resolution<'_> {
        resolve(
            &self.table,
            &self.current_language,
            &self.default_language,
            key,
        )
    }

    /// Convenience lookup returning just the resolved value.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<&str> {
        self.resolve(key).value
    }
}

/// Resolves the language to activate at startup.
///
/// Candidates are tried in priority order (CLI override, stored preference,
/// then the OS locale when enabled) and the first one with a map in the
/// table wins. When none match, `default_language` is used. OS locales are
/// matched exactly first, then by primary subtag, so `fr-FR` activates `fr`.
#[must_use]
pub fn resolve_startup_language(
    cli_lang: Option<&str>,
    stored: Option<&str>,
    detect_system_locale: bool,
    default_language: &str,
    table: &LanguageTable,
) -> String {
    // 1. CLI override
    if let Some(lang) = cli_lang {
        if table.contains_language(lang) {
            return lang.to_string();
        }
    }

    // 2. Stored preference
    if let Some(lang) = stored {
        if table.contains_language(lang) {
            return lang.to_string();
        }
    }

    // 3. OS locale, when the startup policy asks for it
    if detect_system_locale {
        if let Some(os_locale) = sys_locale::get_locale() {
            if table.contains_language(&os_locale) {
                return os_locale;
            }
            if let Some(primary) = os_locale.split(['-', '_']).next() {
                if table.contains_language(primary) {
                    return primary.to_string();
                }
            }
        }
    }

    default_language.to_string()
}
