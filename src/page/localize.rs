// SPDX-License-Identifier: MPL-2.0
//! The translation pass.
//!
//! [`apply`] walks every element of a page exactly once, in document order,
//! and rewrites it from the localizer's current state. The pass is total and
//! deterministic: it never stops early, and applying it twice with the same
//! localizer state produces the same page.
//!
//! Element text is only replaced when a key resolves in the active or the
//! default language; a key missing from both tiers leaves the element alone
//! and records a diagnostic. Attribute directives resolve per binding, so
//! one malformed segment never blocks its neighbors.

use crate::diagnostics::{DiagnosticKind, DiagnosticLog};
use crate::i18n::{parse_directive, Localizer, KEY_DESCRIPTION, KEY_TITLE};

use super::Page;

/// Key announced through the status line after a language switch.
pub const LIVE_REGION_KEY: &str = "language-changed";

/// Rewrites `page` from the localizer's current language.
///
/// Page metadata and the live region come from reserved keys and stay
/// unchanged (respectively empty) when those keys are absent, without
/// diagnostics; only element text and directive bindings report misses.
pub fn apply(page: &mut Page, localizer: &Localizer, log: &mut DiagnosticLog) {
    for element in page.elements_mut() {
        if let Some(key) = &element.translation_key {
            match localizer.resolve(key).value {
                Some(value) => element.text = value.to_string(),
                None => log.record(missing_key(key, localizer)),
            }
        }

        let parsed = match &element.attribute_directive {
            Some(directive) => parse_directive(directive, element.translation_key.as_deref()),
            None => continue,
        };

        for segment in parsed.malformed {
            log.record(DiagnosticKind::MalformedDirective { directive: segment });
        }

        for binding in parsed.bindings {
            match localizer.resolve(&binding.key).value {
                Some(value) => {
                    element.attributes.insert(binding.attribute, value.to_string());
                }
                None => log.record(missing_key(&binding.key, localizer)),
            }
        }
    }

    page.metadata.language = localizer.current_language().to_string();
    if let Some(title) = localizer.lookup(KEY_TITLE) {
        page.metadata.title = title.to_string();
    }
    if let Some(description) = localizer.lookup(KEY_DESCRIPTION) {
        page.metadata.description = description.to_string();
    }

    page.selector_language = localizer.current_language().to_string();
    page.live_region = localizer.lookup(LIVE_REGION_KEY).map(str::to_string);
}

fn missing_key(key: &str, localizer: &Localizer) -> DiagnosticKind {
    DiagnosticKind::MissingKey {
        key: key.to_string(),
        language: localizer.current_language().to_string(),
        fallback: localizer.default_language().to_string(),
    }
}
