//! Fixed navigation header overlaying the page.

use iced::widget::{button, container, horizontal_space, row, text};
use iced::{Alignment, Element, Length};

use crate::layout::{HEADER_HEIGHT, Section};
use crate::message::Message;
use crate::state::State;
use crate::theme::{Button, PortfolioTheme, Surface};

pub fn view_header(state: &State) -> Element<'_, Message> {
    let brand = button(
        row![
            text(state.portfolio.profile.name.to_uppercase())
                .size(17)
                .color(PortfolioTheme::TEXT_PRIMARY),
            text(".DEV").size(17).color(PortfolioTheme::ACCENT),
        ]
        .spacing(1),
    )
    .style(Button::Ghost.style())
    .padding(0.0)
    .on_press(Message::NavigateTo(Section::Hero));

    let mut nav = row![].spacing(6).align_y(Alignment::Center);
    for section in Section::NAV {
        nav = nav.push(
            button(text(section.title()).size(15))
                .style(Button::Ghost.style())
                .padding([8.0, 14.0])
                .on_press(Message::NavigateTo(section)),
        );
    }

    container(
        row![brand, horizontal_space(), nav]
            .align_y(Alignment::Center)
            .padding([0.0, 28.0]),
    )
    .width(Length::Fill)
    .height(Length::Fixed(HEADER_HEIGHT))
    .align_y(iced::alignment::Vertical::Center)
    .style(Surface::Header.style())
    .into()
}
