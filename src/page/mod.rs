// SPDX-License-Identifier: MPL-2.0
//! The showcase page model.
//!
//! A [`Page`] is the headless form of what the window shows: metadata,
//! sections of text elements, and the slide decks. It carries the authored
//! fallback text from the manifest until [`apply`] overwrites it with
//! translations, so a failed table load leaves readable content behind.
//!
//! The model knows nothing about widgets; the view layer projects it into
//! Iced elements each frame.

mod localize;
pub mod manifest;

pub use localize::{apply, LIVE_REGION_KEY};
pub use manifest::MANIFEST_FILE;

use std::collections::BTreeMap;

/// Metadata mirrored into the window chrome.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageMetadata {
    /// Language the page is currently rendered in.
    pub language: String,
    /// Window title.
    pub title: String,
    /// Meta description shown in the footer.
    pub description: String,
}

/// One localizable piece of content.
///
/// `text` starts as the authored manifest text and is replaced on every
/// successful resolution of `translation_key`; a key missing from both
/// lookup tiers leaves it untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageElement {
    /// Stable element identifier from the manifest.
    pub id: String,
    /// Displayed text.
    pub text: String,
    /// Primary translation key, when the element is localized.
    pub translation_key: Option<String>,
    /// Attribute-mapping directive, when attributes are localized too.
    pub attribute_directive: Option<String>,
    /// Resolved attribute values (alt text, labels, tooltips).
    pub attributes: BTreeMap<String, String>,
}

impl PageElement {
    /// Looks up a resolved attribute by name.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }
}

/// One slide of a deck: an image plus its localizable caption element.
///
/// The caption element also carries the slide's `alt` attribute through the
/// regular directive machinery.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Slide {
    /// Image path relative to the content directory.
    pub image: String,
    /// Caption element.
    pub content: PageElement,
}

/// The content of one slide deck.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CarouselContent {
    /// Stable deck identifier from the manifest.
    pub id: String,
    /// Slides in authored order.
    pub slides: Vec<Slide>,
}

/// A titled region of the page, optionally ending in a slide deck.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Section {
    /// Stable section identifier from the manifest.
    pub id: String,
    /// Text elements in authored order.
    pub elements: Vec<PageElement>,
    /// Slide deck, when the section has one.
    pub carousel: Option<CarouselContent>,
}

/// The whole showcase page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Page {
    /// Window chrome metadata.
    pub metadata: PageMetadata,
    /// Sections in authored order.
    pub sections: Vec<Section>,
    /// Language the selector widget should display as chosen.
    pub selector_language: String,
    /// Status-line announcement after a language switch.
    pub live_region: Option<String>,
}

impl Page {
    /// All localizable elements in document order, slide captions included.
    pub fn elements(&self) -> impl Iterator<Item = &PageElement> {
        self.sections.iter().flat_map(|section| {
            section.elements.iter().chain(
                section
                    .carousel
                    .iter()
                    .flat_map(|deck| deck.slides.iter().map(|slide| &slide.content)),
            )
        })
    }

    /// Mutable view over all localizable elements in document order.
    pub fn elements_mut(&mut self) -> impl Iterator<Item = &mut PageElement> {
        self.sections.iter_mut().flat_map(|section| {
            section.elements.iter_mut().chain(
                section
                    .carousel
                    .iter_mut()
                    .flat_map(|deck| deck.slides.iter_mut().map(|slide| &mut slide.content)),
            )
        })
    }

    /// The slide decks in authored order.
    pub fn carousels(&self) -> impl Iterator<Item = &CarouselContent> {
        self.sections
            .iter()
            .filter_map(|section| section.carousel.as_ref())
    }

    /// Finds an element by its manifest identifier.
    #[must_use]
    pub fn element(&self, id: &str) -> Option<&PageElement> {
        self.elements().find(|element| element.id == id)
    }
}
