//! Landing section: name, headline, calls to action, and a code-card motif.

use iced::widget::{button, column, container, row, text};
use iced::{Alignment, Element, Font, Length};

use crate::layout::{HEADER_HEIGHT, Section};
use crate::message::Message;
use crate::state::State;
use crate::theme::{self, Button, PortfolioTheme, Surface};
use crate::views::{reveal_progress, reveal_slide, section_frame};

pub fn view_hero(state: &State) -> Element<'_, Message> {
    let profile = &state.portfolio.profile;

    let p0 = reveal_progress(state, Section::Hero, 0);
    let p1 = reveal_progress(state, Section::Hero, 100);
    let p2 = reveal_progress(state, Section::Hero, 200);
    let p3 = reveal_progress(state, Section::Hero, 400);

    let intro = column![
        reveal_slide(
            text("Hello, I'm")
                .size(16)
                .color(theme::fade(PortfolioTheme::TEXT_SECONDARY, p0)),
            p0,
        ),
        reveal_slide(
            text(&profile.name)
                .size(54)
                .color(theme::fade(PortfolioTheme::TEXT_PRIMARY, p0)),
            p0,
        ),
        reveal_slide(
            text(&profile.headline)
                .size(26)
                .color(theme::fade(PortfolioTheme::ACCENT, p1)),
            p1,
        ),
        reveal_slide(
            text(&profile.tagline)
                .size(16)
                .color(theme::fade(PortfolioTheme::TEXT_SECONDARY, p1)),
            p1,
        ),
        reveal_slide(
            row![
                button(text("View Projects").size(16))
                    .style(Button::Primary.style())
                    .padding([14.0, 28.0])
                    .on_press(Message::NavigateTo(Section::Projects)),
                button(text("Contact Me").size(16))
                    .style(Button::Outline.style())
                    .padding([14.0, 28.0])
                    .on_press(Message::NavigateTo(Section::Contact)),
            ]
            .spacing(16),
            p2,
        ),
    ]
    .spacing(18)
    .max_width(640.0);

    let hero = row![
        container(intro).width(Length::FillPortion(3)),
        container(reveal_slide(code_card(profile.name.as_str()), p3))
            .width(Length::FillPortion(2)),
    ]
    .spacing(40)
    .align_y(Alignment::Center);

    let content = container(hero)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_y(iced::alignment::Vertical::Center)
        .padding(iced::Padding {
            top: HEADER_HEIGHT + 24.0,
            right: 64.0,
            bottom: 24.0,
            left: 64.0,
        });

    section_frame(state, Section::Hero, false, content.into())
}

// Decorative stand-in for the portrait: a terminal card with a few lines of
// pseudo-source.
fn code_card(name: &str) -> Element<'_, Message> {
    let mono = Font::MONOSPACE;
    let keyword = PortfolioTheme::SECONDARY;
    let ident = PortfolioTheme::ACCENT_HOVER;
    let value = PortfolioTheme::SUCCESS;

    fn line<'a>(fragments: iced::widget::Row<'a, Message>) -> iced::widget::Row<'a, Message> {
        fragments.spacing(6)
    }

    let body = column![
        line(row![
            text("let").font(mono).size(14).color(keyword),
            text("dev").font(mono).size(14).color(ident),
            text("= Developer {").font(mono).size(14).color(PortfolioTheme::TEXT_SECONDARY),
        ]),
        line(row![
            text("    focus:").font(mono).size(14).color(PortfolioTheme::TEXT_SECONDARY),
            text("[\"web\", \"apps\", \"iot\"],").font(mono).size(14).color(value),
        ]),
        line(row![
            text("    passion:").font(mono).size(14).color(PortfolioTheme::TEXT_SECONDARY),
            text("\"innovation\",").font(mono).size(14).color(value),
        ]),
        line(row![
            text("    open_to_work:").font(mono).size(14).color(PortfolioTheme::TEXT_SECONDARY),
            text("true,").font(mono).size(14).color(keyword),
        ]),
        line(row![
            text("};").font(mono).size(14).color(PortfolioTheme::TEXT_SECONDARY),
        ]),
        line(row![
            text(format!("// {name} — let's build"))
                .font(mono)
                .size(14)
                .color(PortfolioTheme::TEXT_DIMMED),
        ]),
    ]
    .spacing(10);

    container(body)
        .padding(28.0)
        .width(Length::Fill)
        .style(Surface::Glass.style())
        .into()
}
