//! Section view modules and shared section chrome.

pub mod about;
pub mod contact;
pub mod footer;
pub mod header;
pub mod hero;
pub mod projects;
pub mod skills;

use std::time::Duration;

use iced::widget::{column, container, text};
use iced::{Element, Length, Padding, alignment};

use crate::image_cache::ImageState;
use crate::layout::Section;
use crate::message::Message;
use crate::state::State;
use crate::theme::{self, PortfolioTheme, Surface};
use crate::transitions;

/// Transition progress for a section child, with a render-time stagger so
/// siblings settle one after another.
pub fn reveal_progress(
    state: &State,
    section: Section,
    stagger_ms: u64,
) -> f32 {
    state.reveal.progress(
        section,
        state.now,
        Duration::from_millis(stagger_ms),
    )
}

/// Apply the reveal slide to a child: hidden content sits offset below its
/// settled position and glides up as the transition runs.
pub fn reveal_slide<'a>(
    content: impl Into<Element<'a, Message>>,
    progress: f32,
) -> Element<'a, Message> {
    let offset = transitions::reveal_offset(progress);
    container(content)
        .padding(Padding {
            top: offset,
            right: 0.0,
            bottom: 0.0,
            left: 0.0,
        })
        .into()
}

/// Fixed-height frame every section renders inside, keeping the on-screen
/// geometry in sync with [`crate::layout::SectionLayout`].
pub fn section_frame<'a>(
    state: &State,
    section: Section,
    banded: bool,
    content: Element<'a, Message>,
) -> Element<'a, Message> {
    let mut frame = container(content)
        .width(Length::Fill)
        .height(Length::Fixed(state.layout.height_of(section)))
        .clip(true);
    if banded {
        frame = frame.style(Surface::Band.style());
    }
    frame.into()
}

/// Accent label over a large title, fading in with the reveal.
pub fn section_heading<'a>(
    label: &'a str,
    title: &'a str,
    progress: f32,
) -> Element<'a, Message> {
    column![
        text(label)
            .size(13)
            .color(theme::fade(PortfolioTheme::ACCENT, progress)),
        text(title)
            .size(34)
            .color(theme::fade(PortfolioTheme::TEXT_PRIMARY, progress)),
    ]
    .spacing(6)
    .into()
}

/// Render a cached image by display URI, degrading to a placeholder while
/// it loads or when it failed.
pub fn cached_image<'a>(
    state: &State,
    uri: &str,
    height: f32,
    unavailable_label: &'a str,
) -> Element<'a, Message> {
    match state.images.get(uri) {
        Some(ImageState::Loaded(handle)) => iced::widget::image(handle)
            .width(Length::Fill)
            .height(Length::Fixed(height))
            .content_fit(iced::ContentFit::Cover)
            .into(),
        Some(ImageState::Loading) => media_placeholder("Loading…", height),
        _ => media_placeholder(unavailable_label, height),
    }
}

/// Framed placeholder for missing or still-loading media.
pub fn media_placeholder<'a>(
    label: &'a str,
    height: f32,
) -> Element<'a, Message> {
    container(text(label).size(14).color(PortfolioTheme::TEXT_DIMMED))
        .width(Length::Fill)
        .height(Length::Fixed(height))
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(Surface::Placeholder.style())
        .into()
}
