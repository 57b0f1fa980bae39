//! Skills grid: one glass card per category.

use iced::widget::{column, container, row, text};
use iced::{Element, Length, alignment};

use folio_model::SkillCategory;

use crate::layout::Section;
use crate::message::Message;
use crate::state::State;
use crate::theme::{self, PortfolioTheme, Surface};
use crate::views::{
    reveal_progress, reveal_slide, section_frame, section_heading,
};

pub fn view_skills(state: &State) -> Element<'_, Message> {
    let p0 = reveal_progress(state, Section::Skills, 0);

    let heading = container(reveal_slide(
        section_heading("MY EXPERTISE", "Skills & Technologies", p0),
        p0,
    ))
    .width(Length::Fill)
    .align_x(alignment::Horizontal::Center);

    // Two cards per row; categories keep their authored order.
    let mut grid = column![].spacing(20);
    for (row_index, pair) in state.portfolio.skills.chunks(2).enumerate() {
        let mut cards = row![].spacing(20);
        for (col_index, category) in pair.iter().enumerate() {
            let stagger = (row_index * 2 + col_index) as u64 * 100;
            let progress =
                reveal_progress(state, Section::Skills, stagger);
            cards = cards.push(
                container(reveal_slide(
                    skill_card(category, progress),
                    progress,
                ))
                .width(Length::FillPortion(1)),
            );
        }
        grid = grid.push(cards);
    }

    let content = container(
        column![heading, grid].spacing(44).width(Length::Fill),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .align_y(alignment::Vertical::Center)
    .padding([40.0, 64.0]);

    section_frame(state, Section::Skills, false, content.into())
}

fn skill_card(category: &SkillCategory, progress: f32) -> Element<'_, Message> {
    let badge = container(
        text(&category.glyph)
            .size(16)
            .color(PortfolioTheme::ACCENT),
    )
    .padding([10.0, 14.0])
    .style(Surface::MediaFrame.style());

    let mut lines = column![].spacing(8);
    for skill in &category.skills {
        lines = lines.push(
            row![
                text("•").size(14).color(PortfolioTheme::TEXT_DIMMED),
                text(skill)
                    .size(13)
                    .color(theme::fade(PortfolioTheme::TEXT_SECONDARY, progress)),
            ]
            .spacing(8),
        );
    }

    container(
        column![
            badge,
            text(&category.title)
                .size(19)
                .color(theme::fade(PortfolioTheme::TEXT_PRIMARY, progress)),
            lines,
        ]
        .spacing(16),
    )
    .padding(24.0)
    .width(Length::Fill)
    .height(Length::Fill)
    .style(Surface::Glass.style())
    .into()
}
