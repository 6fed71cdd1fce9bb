// SPDX-License-Identifier: MPL-2.0
//! View for one slide deck.
//!
//! The track is a horizontal scrollable of viewport-wide slides whose offset
//! the update loop imposes through scroll tasks; nothing in here scrolls on
//! its own. Arrows, dots, and the drag surface emit [`Message`]s that the
//! application routes back to the matching state machine.

use crate::carousel::TrackRender;
use crate::page::{manifest, CarouselContent, Slide};
use crate::ui::design_tokens::{opacity, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use crate::ui::widgets::wheel_filter;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::scrollable::{Direction, Scrollbar};
use iced::widget::{button, container, image, mouse_area, tooltip, Container, Row, Scrollable, Stack, Text};
use iced::{mouse, widget::Id, Background, ContentFit, Element, Length, Theme};
use std::path::Path;

/// Messages emitted by one carousel view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// The left arrow was pressed.
    Previous,
    /// The right arrow was pressed.
    Next,
    /// A navigation dot was pressed.
    DotPressed(usize),
    /// The primary button went down over the track.
    DragStarted,
    /// The primary button came up over the track.
    DragReleased,
}

/// Scrollable identifier of the track of carousel `index`, shared with the
/// update loop that imposes offsets on it.
#[must_use]
pub fn track_id(index: usize) -> String {
    format!("carousel-track-{index}")
}

/// Everything the view needs to draw one deck.
pub struct ViewModel<'a> {
    /// Position of the deck among the page's carousels.
    pub index: usize,
    /// Slides and captions from the page model.
    pub deck: &'a CarouselContent,
    /// Projection of the deck's state machine.
    pub render: TrackRender,
    /// True while the visitor is dragging this track.
    pub is_dragging: bool,
    /// Window width; every slide spans it fully.
    pub viewport_width: f32,
    /// Directory slide images load from when content is overridden;
    /// `None` uses the embedded assets.
    pub content_dir: Option<&'a Path>,
    /// Active color scheme.
    pub colors: &'a ColorScheme,
}

/// Renders one deck: the track, both arrows, and the dot row.
///
/// Single-slide decks get the bare track; there is nothing to navigate, so
/// no chrome is drawn over them.
pub fn view(model: ViewModel<'_>) -> Element<'_, Message> {
    let cursor_interaction = if model.is_dragging {
        mouse::Interaction::Grabbing
    } else {
        mouse::Interaction::Grab
    };

    let drag_surface = mouse_area(wheel_filter(build_track(&model)))
        .interaction(cursor_interaction)
        .on_press(Message::DragStarted)
        .on_release(Message::DragReleased);

    let mut stack = Stack::new().push(drag_surface);

    if model.deck.slides.len() > 1 {
        stack = stack
            .push(arrow_zone(&model, "◀", Horizontal::Left, Message::Previous))
            .push(arrow_zone(&model, "▶", Horizontal::Right, Message::Next))
            .push(dot_row(&model));
    }

    stack.into()
}

/// The horizontal strip of slides behind the overlay chrome.
fn build_track<'a>(model: &ViewModel<'a>) -> Element<'a, Message> {
    let mut strip = Row::new();
    for slide in &model.deck.slides {
        strip = strip.push(build_slide(model, slide));
    }

    Scrollable::new(strip)
        .id(Id::from(track_id(model.index)))
        .width(Length::Fill)
        .height(Length::Fixed(sizing::CAROUSEL_HEIGHT))
        .direction(Direction::Horizontal(Scrollbar::hidden()))
        .into()
}

/// One viewport-wide slide: the image with its caption band.
///
/// A slide whose image cannot be resolved falls back to its alt text on a
/// flat surface, so a deck with a missing asset stays readable.
fn build_slide<'a>(model: &ViewModel<'a>, slide: &'a Slide) -> Element<'a, Message> {
    let surface = model.colors.surface_raised;
    let picture: Element<'a, Message> = match slide_image_handle(model.content_dir, &slide.image) {
        Some(handle) => image(handle)
            .width(Length::Fill)
            .height(Length::Fill)
            .content_fit(ContentFit::Cover)
            .into(),
        None => {
            let alt = slide.content.attribute("alt").unwrap_or_default();
            Container::new(
                Text::new(alt)
                    .size(typography::BODY_LG)
                    .color(model.colors.text_secondary),
            )
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center)
            .style(move |_theme: &Theme| container::Style {
                background: Some(Background::Color(surface)),
                ..container::Style::default()
            })
            .into()
        }
    };

    let mut framed = Stack::new().push(picture);
    if !slide.content.text.is_empty() {
        framed = framed.push(caption_band(model, &slide.content.text));
    }

    Container::new(framed)
        .width(Length::Fixed(model.viewport_width.max(1.0)))
        .height(Length::Fixed(sizing::CAROUSEL_HEIGHT))
        .clip(true)
        .into()
}

/// Translucent band along the bottom edge carrying the slide caption.
fn caption_band<'a>(model: &ViewModel<'a>, text: &'a str) -> Element<'a, Message> {
    let band = model.colors.overlay_background;
    let caption = Container::new(
        Text::new(text)
            .size(typography::BODY_LG)
            .color(model.colors.overlay_text),
    )
    .width(Length::Fill)
    .padding(spacing::SM)
    .style(move |_theme: &Theme| container::Style {
        background: Some(Background::Color(band)),
        ..container::Style::default()
    });

    Container::new(caption)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_y(Vertical::Bottom)
        .into()
}

/// A full-height edge zone holding one navigation arrow.
fn arrow_zone<'a>(
    model: &ViewModel<'a>,
    glyph: &'a str,
    side: Horizontal,
    message: Message,
) -> Element<'a, Message> {
    let arrow = button(Text::new(glyph).size(typography::TITLE_LG))
        .padding(spacing::SM)
        .style(styles::button_overlay(
            model.colors.overlay_text,
            opacity::OVERLAY_SUBTLE,
            opacity::OVERLAY_MEDIUM,
        ))
        .on_press(message);

    let zone = Container::new(arrow)
        .height(Length::Fill)
        .padding(spacing::MD)
        .align_y(Vertical::Center);

    Container::new(zone)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(side)
        .into()
}

/// The dot indicator row, centered along the bottom edge.
fn dot_row<'a>(model: &ViewModel<'a>) -> Element<'a, Message> {
    let mut row = Row::new().spacing(spacing::XS);
    for (slide, dot) in model.render.dots.iter().enumerate() {
        let fill = if dot.is_active {
            model.colors.accent
        } else {
            model.colors.dot_inactive
        };
        let pip = button(Text::new(""))
            .width(Length::Fixed(sizing::DOT))
            .height(Length::Fixed(sizing::DOT))
            .padding(0)
            .style(styles::button::dot(fill))
            .on_press(Message::DotPressed(slide));

        row = row.push(styles::tooltip::styled(
            pip,
            dot.label.clone(),
            tooltip::Position::Top,
        ));
    }

    Container::new(row)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Bottom)
        .padding(spacing::MD)
        .into()
}

/// Resolves the image handle for a slide.
fn slide_image_handle(content_dir: Option<&Path>, relative: &str) -> Option<image::Handle> {
    match content_dir {
        Some(dir) => Some(image::Handle::from_path(dir.join(relative))),
        None => manifest::embedded_asset(relative)
            .map(|bytes| image::Handle::from_bytes(bytes.into_owned())),
    }
}
