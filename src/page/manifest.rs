// SPDX-License-Identifier: MPL-2.0
//! The showcase manifest.
//!
//! `showcase.toml` declares the page structure: sections, their elements
//! with authored fallback text and translation keys, and slide decks. The
//! copy shipped inside the binary is the default; `--content-dir` points at
//! a directory carrying a replacement manifest and its slide images.
//!
//! A broken override directory is a startup error and reported as such. The
//! embedded manifest is covered by tests, so its parse path degrades to an
//! empty page instead of aborting.

use std::borrow::Cow;
use std::path::Path;

use rust_embed::RustEmbed;
use serde::Deserialize;

use super::{CarouselContent, Page, PageElement, PageMetadata, Section, Slide};
use crate::error::{Error, Result};

/// Name of the manifest file inside the content directory.
pub const MANIFEST_FILE: &str = "showcase.toml";

#[derive(RustEmbed)]
#[folder = "assets/showcase/"]
struct Asset;

/// Loads the page, either from an override directory or from the embedded
/// manifest.
///
/// With an override directory, every failure is returned as an error for the
/// caller to treat as fatal. Without one, a failure of the embedded copy
/// yields an empty page plus the failure detail.
pub fn load(content_dir: Option<&Path>) -> Result<(Page, Option<String>)> {
    match content_dir {
        Some(dir) => {
            let text = std::fs::read_to_string(dir.join(MANIFEST_FILE))?;
            Ok((parse(&text)?, None))
        }
        None => match load_embedded() {
            Ok(page) => Ok((page, None)),
            Err(error) => Ok((Page::default(), Some(error.to_string()))),
        },
    }
}

/// Parses a manifest document into a [`Page`].
pub fn parse(text: &str) -> Result<Page> {
    let doc: ManifestDoc =
        toml::from_str(text).map_err(|error| Error::Manifest(error.to_string()))?;
    Ok(doc.into_page())
}

fn load_embedded() -> Result<Page> {
    let asset = Asset::get(MANIFEST_FILE)
        .ok_or_else(|| Error::Manifest(format!("embedded {MANIFEST_FILE} not found")))?;
    parse(&String::from_utf8_lossy(asset.data.as_ref()))
}

/// Raw bytes of an embedded content asset, such as a slide image.
#[must_use]
pub fn embedded_asset(relative: &str) -> Option<Cow<'static, [u8]>> {
    Asset::get(relative).map(|file| file.data)
}

#[derive(Debug, Deserialize)]
struct ManifestDoc {
    #[serde(default)]
    page: PageDefaults,
    #[serde(default, rename = "section")]
    sections: Vec<SectionDef>,
}

#[derive(Debug, Default, Deserialize)]
struct PageDefaults {
    #[serde(default)]
    default_title: String,
    #[serde(default)]
    default_description: String,
}

#[derive(Debug, Deserialize)]
struct SectionDef {
    id: String,
    #[serde(default, rename = "element")]
    elements: Vec<ElementDef>,
    carousel: Option<CarouselDef>,
}

#[derive(Debug, Deserialize)]
struct ElementDef {
    id: String,
    #[serde(default)]
    text: String,
    key: Option<String>,
    attrs: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CarouselDef {
    id: String,
    #[serde(default, rename = "slide")]
    slides: Vec<SlideDef>,
}

#[derive(Debug, Deserialize)]
struct SlideDef {
    image: String,
    #[serde(default)]
    caption: String,
    caption_key: Option<String>,
    alt_key: Option<String>,
}

impl ManifestDoc {
    fn into_page(self) -> Page {
        Page {
            metadata: PageMetadata {
                language: String::new(),
                title: self.page.default_title,
                description: self.page.default_description,
            },
            sections: self
                .sections
                .into_iter()
                .map(SectionDef::into_section)
                .collect(),
            selector_language: String::new(),
            live_region: None,
        }
    }
}

impl SectionDef {
    fn into_section(self) -> Section {
        Section {
            id: self.id,
            elements: self
                .elements
                .into_iter()
                .map(ElementDef::into_element)
                .collect(),
            carousel: self.carousel.map(CarouselDef::into_content),
        }
    }
}

impl ElementDef {
    fn into_element(self) -> PageElement {
        PageElement {
            id: self.id,
            text: self.text,
            translation_key: self.key,
            attribute_directive: self.attrs,
            attributes: Default::default(),
        }
    }
}

impl CarouselDef {
    fn into_content(self) -> CarouselContent {
        let slides = self
            .slides
            .into_iter()
            .enumerate()
            .map(|(index, slide)| slide.into_slide(&self.id, index))
            .collect();
        CarouselContent {
            id: self.id,
            slides,
        }
    }
}

impl SlideDef {
    /// Slide captions flow through the same element machinery as section
    /// text; the `alt` attribute is expressed as a directive on the caption.
    fn into_slide(self, deck_id: &str, index: usize) -> Slide {
        Slide {
            image: self.image,
            content: PageElement {
                id: format!("{deck_id}-slide-{}", index + 1),
                text: self.caption,
                translation_key: self.caption_key,
                attribute_directive: self.alt_key.map(|key| format!("alt:{key}")),
                attributes: Default::default(),
            },
        }
    }
}
