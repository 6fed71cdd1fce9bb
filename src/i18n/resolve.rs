// SPDX-License-Identifier: MPL-2.0
//! Two-tier translation lookup.

use super::table::LanguageTable;

/// Which tier produced a resolved value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    /// Found in the active language's map.
    Primary,
    /// Absent from the active language, found in the default language.
    Fallback,
    /// Absent from both tiers.
    Missing,
}

/// Outcome of a two-tier lookup: the value (if any) and where it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution<'a> {
    /// The resolved string, `None` when both tiers missed.
    pub value: Option<&'a str>,
    /// Which tier answered.
    pub origin: Origin,
}

impl Resolution<'_> {
    /// True when neither tier had the key.
    #[must_use]
    pub fn is_missing(&self) -> bool {
        self.origin == Origin::Missing
    }
}

/// Resolves `key` against `language`, falling back to `default_language`.
///
/// The fallback tier is consulted only when the active language's map lacks
/// the key entirely; an empty string in the active map is a legitimate value
/// and wins.
#[must_use]
pub fn resolve<'a>(
    table: &'a LanguageTable,
    language: &str,
    default_language: &str,
    key: &str,
) -> Resolution<'a> {
    if let Some(value) = table.get(language, key) {
        return Resolution {
            value: Some(value),
            origin: Origin::Primary,
        };
    }
    if let Some(value) = table.get(default_language, key) {
        return Resolution {
            value: Some(value),
            origin: Origin::Fallback,
        };
    }
    Resolution {
        value: None,
        origin: Origin::Missing,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> LanguageTable {
        let mut table = LanguageTable::default();
        table.insert("en", "greeting", "Hello");
        table.insert("en", "cta", "Book now");
        table.insert("fr", "greeting", "Bonjour");
        table.insert("fr", "empty", "");
        table
    }

    #[test]
    fn primary_tier_wins() {
        let table = table();
        let resolution = resolve(&table, "fr", "en", "greeting");

        assert_eq!(resolution.value, Some("Bonjour"));
        assert_eq!(resolution.origin, Origin::Primary);
    }

    #[test]
    fn fallback_tier_fills_gaps() {
        let table = table();
        let resolution = resolve(&table, "fr", "en", "cta");

        assert_eq!(resolution.value, Some("Book now"));
        assert_eq!(resolution.origin, Origin::Fallback);
    }

    #[test]
    fn both_tiers_missing_yields_missing() {
        let table = table();
        let resolution = resolve(&table, "fr", "en", "nonexistent");

        assert_eq!(resolution.value, None);
        assert!(resolution.is_missing());
    }

    #[test]
    fn empty_string_is_a_legitimate_primary_value() {
        let table = table();
        let resolution = resolve(&table, "fr", "en", "empty");

        // An empty value still counts as found in the primary tier
        assert_eq!(resolution.value, Some(""));
        assert_eq!(resolution.origin, Origin::Primary);
    }

    #[test]
    fn unknown_language_resolves_through_fallback() {
        let table = table();
        let resolution = resolve(&table, "de", "en", "greeting");

        assert_eq!(resolution.value, Some("Hello"));
        assert_eq!(resolution.origin, Origin::Fallback);
    }
}
