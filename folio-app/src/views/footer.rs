//! Page footer.

use chrono::Datelike;
use iced::widget::{button, column, container, horizontal_rule, row, text};
use iced::{Alignment, Element, Length, alignment};

use crate::layout::Section;
use crate::message::Message;
use crate::state::State;
use crate::theme::{Button, PortfolioTheme};
use crate::views::section_frame;

pub fn view_footer(state: &State) -> Element<'_, Message> {
    let year = chrono::Utc::now().year();

    let line = row![
        text(format!(
            "© {year} {}. All rights reserved.",
            state.portfolio.profile.name
        ))
        .size(13)
        .color(PortfolioTheme::TEXT_DIMMED),
        iced::widget::horizontal_space(),
        button(text("Back to top ↑").size(13))
            .style(Button::Ghost.style())
            .on_press(Message::NavigateTo(Section::Hero)),
    ]
    .align_y(Alignment::Center);

    let content = container(
        column![horizontal_rule(1), line].spacing(24).width(Length::Fill),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .align_y(alignment::Vertical::Center)
    .padding([20.0, 64.0]);

    section_frame(state, Section::Footer, false, content.into())
}
