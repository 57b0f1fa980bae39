//! Project showcase: one card per project with a cyclic media carousel.

use iced::widget::{button, column, container, row, stack, text};
use iced::{Alignment, Element, Length, alignment};

use folio_model::{MediaKind, Project};

use crate::layout::Section;
use crate::message::Message;
use crate::state::State;
use crate::theme::{self, Button, PortfolioTheme, Surface};
use crate::views::{
    cached_image, media_placeholder, reveal_progress, reveal_slide,
    section_frame, section_heading,
};

const MEDIA_HEIGHT: f32 = 280.0;
const THUMB_WIDTH: f32 = 76.0;
const THUMB_HEIGHT: f32 = 46.0;

pub fn view_projects(state: &State) -> Element<'_, Message> {
    let p0 = reveal_progress(state, Section::Projects, 0);

    let heading = container(reveal_slide(
        section_heading("MY WORK", "Featured Projects", p0),
        p0,
    ))
    .width(Length::Fill)
    .align_x(alignment::Horizontal::Center);

    let mut cards = column![].spacing(28);
    for (index, project) in state.portfolio.projects.iter().enumerate() {
        let progress =
            reveal_progress(state, Section::Projects, index as u64 * 120);
        cards = cards.push(reveal_slide(
            project_card(state, project, progress),
            progress,
        ));
    }

    let content = container(
        column![heading, cards].spacing(40).width(Length::Fill),
    )
    .width(Length::Fill)
    .padding([50.0, 64.0]);

    section_frame(state, Section::Projects, true, content.into())
}

fn project_card<'a>(
    state: &'a State,
    project: &'a Project,
    progress: f32,
) -> Element<'a, Message> {
    let active = state.carousels.active_index(&project.id);

    let media = column![
        carousel_stage(state, project, active),
        thumb_strip(state, project, active),
    ]
    .spacing(10);

    let mut tech = row![].spacing(8);
    for entry in &project.tech {
        tech = tech.push(
            container(
                text(entry).size(12).color(PortfolioTheme::TEXT_SECONDARY),
            )
            .padding([4.0, 10.0])
            .style(Surface::Glass.style()),
        );
    }

    let mut links = row![].spacing(12);
    if let Some(demo) = &project.links.demo {
        links = links.push(
            button(text("Live Demo  ↗").size(14))
                .style(Button::Outline.style())
                .padding([10.0, 18.0])
                .on_press(Message::CopyLink(demo.clone())),
        );
    }
    if let Some(source) = &project.links.source {
        links = links.push(
            button(text("Source").size(14))
                .style(Button::Ghost.style())
                .padding([10.0, 18.0])
                .on_press(Message::CopyLink(source.clone())),
        );
    }

    let details = column![
        text(project.category.to_uppercase())
            .size(12)
            .color(theme::fade(PortfolioTheme::ACCENT, progress)),
        text(&project.title)
            .size(26)
            .color(theme::fade(PortfolioTheme::TEXT_PRIMARY, progress)),
        text(&project.summary)
            .size(14)
            .color(theme::fade(PortfolioTheme::TEXT_SECONDARY, progress)),
        tech,
        links,
    ]
    .spacing(14);

    container(
        row![
            container(media).width(Length::FillPortion(5)),
            container(details).width(Length::FillPortion(6)),
        ]
        .spacing(32)
        .align_y(Alignment::Center),
    )
    .padding(24.0)
    .width(Length::Fill)
    .style(Surface::Glass.style())
    .into()
}

/// The active media item between the two chevrons. Videos render their
/// derived thumbnail under a play marker.
fn carousel_stage<'a>(
    state: &'a State,
    project: &'a Project,
    active: usize,
) -> Element<'a, Message> {
    let stage: Element<'a, Message> = match project.media.get(active) {
        None => media_placeholder("No media", MEDIA_HEIGHT),
        Some(item) => {
            let still = container(cached_image(
                state,
                &item.display_uri(),
                MEDIA_HEIGHT,
                "Preview unavailable",
            ))
            .style(Surface::MediaFrame.style())
            .clip(true);

            if item.kind == MediaKind::Video {
                stack![
                    still,
                    container(
                        container(
                            text("▶").size(30).color(PortfolioTheme::TEXT_PRIMARY),
                        )
                        .padding([10.0, 18.0])
                        .style(Surface::Placeholder.style()),
                    )
                    .width(Length::Fill)
                    .height(Length::Fixed(MEDIA_HEIGHT))
                    .align_x(alignment::Horizontal::Center)
                    .align_y(alignment::Vertical::Center),
                ]
                .into()
            } else {
                still.into()
            }
        }
    };

    row![
        button(text("‹").size(22))
            .style(Button::Chevron.style())
            .padding([4.0, 12.0])
            .on_press(Message::CarouselPrevious(project.id.clone())),
        container(stage).width(Length::Fill),
        button(text("›").size(22))
            .style(Button::Chevron.style())
            .padding([4.0, 12.0])
            .on_press(Message::CarouselNext(project.id.clone())),
    ]
    .spacing(10)
    .align_y(Alignment::Center)
    .into()
}

/// Selector strip: one thumb per media item, the active slot ringed.
fn thumb_strip<'a>(
    state: &'a State,
    project: &'a Project,
    active: usize,
) -> Element<'a, Message> {
    let mut strip = row![].spacing(8);

    for (index, item) in project.media.items().iter().enumerate() {
        let style = if index == active {
            Button::ThumbActive
        } else {
            Button::Thumb
        };

        let face: Element<'a, Message> = match state.images.get(&item.display_uri()) {
            Some(crate::image_cache::ImageState::Loaded(handle)) => {
                iced::widget::image(handle)
                    .width(Length::Fixed(THUMB_WIDTH))
                    .height(Length::Fixed(THUMB_HEIGHT))
                    .content_fit(iced::ContentFit::Cover)
                    .into()
            }
            _ => container(
                text(match item.kind {
                    MediaKind::Video => "▶",
                    MediaKind::Image => "▦",
                })
                .size(14)
                .color(PortfolioTheme::TEXT_DIMMED),
            )
            .width(Length::Fixed(THUMB_WIDTH))
            .height(Length::Fixed(THUMB_HEIGHT))
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center)
            .into(),
        };

        strip = strip.push(
            button(face)
                .style(style.style())
                .padding(2.0)
                .on_press(Message::CarouselSelect(project.id.clone(), index)),
        );
    }

    container(strip)
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .into()
}
