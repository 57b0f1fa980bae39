//! About section: portrait, bio, stats, and the CV link.

use iced::widget::{button, column, container, row, text};
use iced::{Alignment, Element, Length};

use crate::layout::Section;
use crate::message::Message;
use crate::state::State;
use crate::theme::{self, Button, PortfolioTheme, Surface};
use crate::views::{
    cached_image, reveal_progress, reveal_slide, section_frame,
    section_heading,
};

const PORTRAIT_HEIGHT: f32 = 460.0;

pub fn view_about(state: &State) -> Element<'_, Message> {
    let profile = &state.portfolio.profile;

    let p0 = reveal_progress(state, Section::About, 0);
    let p1 = reveal_progress(state, Section::About, 100);
    let p2 = reveal_progress(state, Section::About, 250);
    let p3 = reveal_progress(state, Section::About, 400);

    let portrait = container(cached_image(
        state,
        &profile.photo_uri,
        PORTRAIT_HEIGHT,
        "Portrait unavailable",
    ))
    .style(Surface::MediaFrame.style())
    .clip(true);

    let mut bio = column![].spacing(14);
    for paragraph in &profile.bio {
        bio = bio.push(
            text(paragraph)
                .size(15)
                .color(theme::fade(PortfolioTheme::TEXT_SECONDARY, p1)),
        );
    }

    let mut stats = row![].spacing(36);
    for stat in &profile.stats {
        stats = stats.push(
            column![
                text(&stat.value)
                    .size(30)
                    .color(theme::fade(PortfolioTheme::TEXT_PRIMARY, p2)),
                text(&stat.label)
                    .size(13)
                    .color(theme::fade(PortfolioTheme::TEXT_DIMMED, p2)),
            ]
            .spacing(2),
        );
    }

    let details = column![
        reveal_slide(
            section_heading("ABOUT ME", "Creator & Tech Enthusiast", p0),
            p0,
        ),
        reveal_slide(bio, p1),
        reveal_slide(stats, p2),
        reveal_slide(
            button(text("Download CV  ↓").size(15))
                .style(Button::Outline.style())
                .padding([12.0, 22.0])
                .on_press(Message::CopyLink(profile.cv_uri.clone())),
            p3,
        ),
    ]
    .spacing(26);

    let body = row![
        container(reveal_slide(portrait, p0)).width(Length::FillPortion(2)),
        container(details).width(Length::FillPortion(3)),
    ]
    .spacing(48)
    .align_y(Alignment::Center);

    let content = container(body)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_y(iced::alignment::Vertical::Center)
        .padding([40.0, 64.0]);

    section_frame(state, Section::About, true, content.into())
}
