//! Top-level page composition.
//!
//! The page is one vertical scrollable; the navigation header and transient
//! status notes overlay it.

use iced::widget::{column, container, scrollable, stack, text};
use iced::{Element, Length, alignment};

use crate::message::Message;
use crate::state::State;
use crate::theme::Surface;
use crate::views;

/// Identifier of the page scrollable, shared with `scroll_to` navigation.
pub fn page_scrollable_id() -> scrollable::Id {
    scrollable::Id::new("folio-page")
}

pub fn view(state: &State) -> Element<'_, Message> {
    let page = column![
        views::hero::view_hero(state),
        views::about::view_about(state),
        views::skills::view_skills(state),
        views::projects::view_projects(state),
        views::contact::view_contact(state),
        views::footer::view_footer(state),
    ]
    .width(Length::Fill);

    let content = scrollable(page)
        .id(page_scrollable_id())
        .on_scroll(Message::PageScrolled)
        .direction(scrollable::Direction::Vertical(
            scrollable::Scrollbar::new().width(6).scroller_width(6),
        ))
        .width(Length::Fill)
        .height(Length::Fill);

    let mut layers = stack![content, views::header::view_header(state)];

    if let Some(note) = &state.status {
        layers = layers.push(
            container(
                container(text(&note.text).size(14))
                    .style(Surface::Note.style())
                    .padding([10.0, 16.0]),
            )
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Bottom)
            .padding(24.0),
        );
    }

    layers.into()
}
