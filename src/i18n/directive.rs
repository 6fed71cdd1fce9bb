// SPDX-License-Identifier: MPL-2.0
//! Attribute-mapping directive grammar.
//!
//! Elements can localize attributes as well as text. The directive string
//! takes one of two forms:
//!
//! 1. A bare attribute name (`"alt"`), which reuses the element's primary
//!    translation key.
//! 2. A semicolon-separated list of `attribute:key` pairs
//!    (`"aria-label:hero_label;title:hero_title"`), each resolved
//!    independently.
//!
//! Whitespace around segments, attributes, and keys is trimmed. Empty
//! segments (stray semicolons) are ignored; segments missing either side of
//! the colon are reported as malformed without stopping the rest.

/// One attribute assignment parsed from a directive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeBinding {
    /// The attribute to set.
    pub attribute: String,
    /// The translation key to resolve for it.
    pub key: String,
}

/// Parse result: usable bindings plus the segments that could not be read.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedDirective {
    /// Bindings in directive order.
    pub bindings: Vec<AttributeBinding>,
    /// Malformed segments, verbatim, for diagnostics.
    pub malformed: Vec<String>,
}

/// Parses a directive string.
///
/// `element_key` is the element's primary translation key, consumed by the
/// bare-attribute form; a bare directive on an element without a primary key
/// is malformed.
#[must_use]
pub fn parse_directive(directive: &str, element_key: Option<&str>) -> ParsedDirective {
    let directive = directive.trim();
    let mut parsed = ParsedDirective::default();

    if directive.is_empty() {
        return parsed;
    }

    if !directive.contains(':') {
        // Bare form: the attribute name, keyed by the element's own key
        match element_key {
            Some(key) if !key.is_empty() => parsed.bindings.push(AttributeBinding {
                attribute: directive.to_string(),
                key: key.to_string(),
            }),
            _ => parsed.malformed.push(directive.to_string()),
        }
        return parsed;
    }

    for segment in directive.split(';') {
        let segment = segment.trim();
        if segment.is_empty() {
            continue;
        }

        let mut parts = segment.split(':');
        let attribute = parts.next().unwrap_or_default().trim();
        let key = parts.next().unwrap_or_default().trim();

        if attribute.is_empty() || key.is_empty() {
            parsed.malformed.push(segment.to_string());
        } else {
            parsed.bindings.push(AttributeBinding {
                attribute: attribute.to_string(),
                key: key.to_string(),
            });
        }
    }

    parsed
}
