// SPDX-License-Identifier: MPL-2.0
//! The showcase page.
//!
//! Projects the [`Page`] model into widgets: a header bar with the language
//! selector, the sections with their slide decks, and the footer. Text
//! panels keep a margin; decks run edge to edge so a slide spans the whole
//! window. The toast overlay is stacked over everything.

use crate::app::Message;
use crate::carousel::Carousel;
use crate::i18n::Localizer;
use crate::page::{Page, Section};
use crate::ui::carousel_view;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::notifications::{self, Toast};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{container, pick_list, scrollable, Column, Container, Row, Space, Stack, Text};
use iced::{Background, Element, Length, Theme};
use std::path::Path;

/// Context required to render the page.
pub struct ViewContext<'a> {
    pub page: &'a Page,
    pub localizer: &'a Localizer,
    pub carousels: &'a [Carousel],
    pub notifications: &'a notifications::Manager,
    pub colors: &'a ColorScheme,
    pub viewport_width: f32,
    pub content_dir: Option<&'a Path>,
}

/// Renders the whole page with the toast overlay on top.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let mut column = Column::new().spacing(spacing::XL).push(header(&ctx));

    // Decks are numbered in page order, skipping empty ones, to match the
    // controllers built at startup.
    let mut deck_index = 0;
    for section in &ctx.page.sections {
        column = column.push(section_view(&ctx, section, &mut deck_index));
    }

    column = column.push(footer(&ctx));

    let content = scrollable(column.width(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill);

    let surface = ctx.colors.surface;
    let page = Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(move |_theme: &Theme| container::Style {
            background: Some(Background::Color(surface)),
            ..container::Style::default()
        });

    Stack::new()
        .push(page)
        .push(Toast::view_overlay(ctx.notifications, ctx.localizer).map(Message::Notification))
        .into()
}

/// Header bar: page title on the left, language selector on the right,
/// and the announcement line for language switches underneath.
fn header<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let title = Text::new(ctx.page.metadata.title.as_str())
        .size(typography::TITLE_LG)
        .color(ctx.colors.text_primary);

    let selector = pick_list(
        ctx.localizer.available_languages(),
        Some(ctx.page.selector_language.clone()),
        Message::LanguageSelected,
    )
    .text_size(typography::BODY)
    .padding([spacing::XXS, spacing::XS]);

    let bar = Row::new()
        .align_y(Vertical::Center)
        .spacing(spacing::MD)
        .push(title)
        .push(Space::new().width(Length::Fill))
        .push(selector);

    let mut column = Column::new().spacing(spacing::XS).push(bar);
    if let Some(announcement) = &ctx.page.live_region {
        column = column.push(
            Text::new(announcement.as_str())
                .size(typography::CAPTION)
                .color(ctx.colors.text_muted),
        );
    }

    Container::new(column)
        .width(Length::Fill)
        .padding(spacing::MD)
        .into()
}

/// One page section: its text panel, then its deck when it has one.
fn section_view<'a>(
    ctx: &ViewContext<'a>,
    section: &'a Section,
    deck_index: &mut usize,
) -> Element<'a, Message> {
    let mut outer = Column::new().spacing(spacing::MD);

    if !section.elements.is_empty() {
        let mut inner = Column::new().spacing(spacing::SM);
        for (position, element) in section.elements.iter().enumerate() {
            // The leading element of a section is its heading.
            let text = if position == 0 {
                Text::new(element.text.as_str())
                    .size(typography::TITLE_MD)
                    .color(ctx.colors.text_primary)
            } else {
                Text::new(element.text.as_str())
                    .size(typography::BODY_LG)
                    .color(ctx.colors.text_secondary)
            };
            inner = inner.push(text);
        }

        let panel = Container::new(inner)
            .width(Length::Fill)
            .padding(spacing::LG)
            .style(styles::container::panel);

        outer = outer.push(Container::new(panel).padding([0.0, spacing::MD]));
    }

    if let Some(deck) = &section.carousel {
        if !deck.slides.is_empty() {
            let index = *deck_index;
            *deck_index += 1;

            if let Some(machine) = ctx.carousels.get(index) {
                let model = carousel_view::ViewModel {
                    index,
                    deck,
                    render: machine.render(ctx.viewport_width),
                    is_dragging: machine.is_dragging(),
                    viewport_width: ctx.viewport_width,
                    content_dir: ctx.content_dir,
                    colors: ctx.colors,
                };
                outer = outer.push(
                    carousel_view::view(model)
                        .map(move |message| Message::Carousel { index, message }),
                );
            }
        }
    }

    outer.into()
}

/// Footer carrying the localized page description.
fn footer<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let description = Text::new(ctx.page.metadata.description.as_str())
        .size(typography::BODY_SM)
        .color(ctx.colors.text_muted);

    Container::new(description)
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .padding(spacing::XL)
        .into()
}
