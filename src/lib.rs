// SPDX-License-Identifier: MPL-2.0
//! `iced_vitrine` is a localized product-showcase kiosk built with the Iced
//! GUI framework.
//!
//! It renders a single scrolling page of sections and image carousels,
//! with runtime language switching over a JSON translation table and a
//! persisted language preference.

#![doc(html_root_url = "https://docs.rs/iced_vitrine/0.1.0")]

pub mod app;
pub mod carousel;
pub mod diagnostics;
pub mod error;
pub mod i18n;
pub mod icon;
pub mod page;
pub mod ui;
