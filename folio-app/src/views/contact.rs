//! Contact section: direct details plus the client-side form.

use iced::widget::{button, column, container, row, text, text_input};
use iced::{Element, Length, alignment};

use crate::contact::{ContactStatus, Field};
use crate::layout::Section;
use crate::message::Message;
use crate::state::State;
use crate::theme::{self, Button, PortfolioTheme, Surface};
use crate::views::{
    reveal_progress, reveal_slide, section_frame, section_heading,
};

pub fn view_contact(state: &State) -> Element<'_, Message> {
    let p0 = reveal_progress(state, Section::Contact, 0);
    let p1 = reveal_progress(state, Section::Contact, 150);

    let info = column![
        reveal_slide(
            section_heading("GET IN TOUCH", "Let's Work Together", p0),
            p0,
        ),
        detail_line("Location", &state.portfolio.contact.location, p0),
        detail_line("Email", &state.portfolio.contact.email, p0),
        detail_line("Phone", &state.portfolio.contact.phone, p0),
        social_row(state),
    ]
    .spacing(20);

    let content = container(
        row![
            container(info).width(Length::FillPortion(2)),
            container(reveal_slide(form(state), p1))
                .width(Length::FillPortion(3)),
        ]
        .spacing(48),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .align_y(alignment::Vertical::Center)
    .padding([40.0, 64.0]);

    section_frame(state, Section::Contact, true, content.into())
}

fn detail_line<'a>(
    label: &'a str,
    value: &'a str,
    progress: f32,
) -> Element<'a, Message> {
    row![
        text(label)
            .size(13)
            .color(theme::fade(PortfolioTheme::TEXT_DIMMED, progress))
            .width(Length::Fixed(80.0)),
        text(value)
            .size(14)
            .color(theme::fade(PortfolioTheme::TEXT_SECONDARY, progress)),
    ]
    .spacing(10)
    .into()
}

fn social_row(state: &State) -> Element<'_, Message> {
    let mut links = row![].spacing(10);
    for link in &state.portfolio.profile.social {
        links = links.push(
            button(text(link.platform.label()).size(13))
                .style(Button::Outline.style())
                .padding([8.0, 14.0])
                .on_press(Message::CopyLink(link.url.clone())),
        );
    }
    links.into()
}

fn form(state: &State) -> Element<'_, Message> {
    let contact = &state.contact;

    let name = text_input("Your name", &contact.name)
        .on_input(Message::ContactNameChanged)
        .padding(12.0)
        .size(15)
        .style(theme::input_style(contact.field_invalid(Field::Name)));

    let email = text_input("Your email", &contact.email)
        .on_input(Message::ContactEmailChanged)
        .padding(12.0)
        .size(15)
        .style(theme::input_style(contact.field_invalid(Field::Email)));

    let subject = text_input("Subject (optional)", &contact.subject)
        .on_input(Message::ContactSubjectChanged)
        .padding(12.0)
        .size(15)
        .style(theme::input_style(false));

    let body = text_input("Tell me about your project…", &contact.body)
        .on_input(Message::ContactBodyChanged)
        .padding(12.0)
        .size(15)
        .style(theme::input_style(contact.field_invalid(Field::Body)));

    let submit = button(text("Send Message").size(15))
        .style(Button::Primary.style())
        .padding([12.0, 26.0])
        .on_press(Message::ContactSubmitted);

    let feedback: Element<'_, Message> = match &contact.status {
        ContactStatus::Invalid(_) => {
            text("Please fill in the highlighted fields.")
                .size(13)
                .color(PortfolioTheme::ERROR)
                .into()
        }
        ContactStatus::Accepted => text("Looks good — see the note below.")
            .size(13)
            .color(PortfolioTheme::SUCCESS)
            .into(),
        ContactStatus::Idle => text("").size(13).into(),
    };

    container(
        column![
            row![name, email].spacing(14),
            subject,
            body,
            row![
                submit,
                container(feedback).align_y(alignment::Vertical::Center),
            ]
            .spacing(16),
        ]
        .spacing(14),
    )
    .padding(28.0)
    .style(Surface::Glass.style())
    .into()
}
