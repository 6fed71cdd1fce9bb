// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The showcase page is the only screen, so this module just assembles the
//! render context from application state and hands it to the page builder.

use super::Message;
use crate::carousel::Carousel;
use crate::i18n::Localizer;
use crate::page::Page;
use crate::ui::notifications;
use crate::ui::showcase;
use crate::ui::theming::ColorScheme;
use iced::Element;
use std::path::Path;

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub localizer: &'a Localizer,
    pub page: &'a Page,
    pub carousels: &'a [Carousel],
    pub notifications: &'a notifications::Manager,
    pub colors: &'a ColorScheme,
    pub viewport_width: f32,
    pub content_dir: Option<&'a Path>,
}

/// Renders the showcase page.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    showcase::view(showcase::ViewContext {
        page: ctx.page,
        localizer: ctx.localizer,
        carousels: ctx.carousels,
        notifications: ctx.notifications,
        colors: ctx.colors,
        viewport_width: ctx.viewport_width,
        content_dir: ctx.content_dir,
    })
}
