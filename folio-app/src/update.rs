//! Top-level update loop.

use std::time::Instant;

use iced::Task;
use iced::widget::scrollable::{self, AbsoluteOffset};

use crate::contact::Field;
use crate::message::Message;
use crate::state::{State, StatusNote};
use crate::view;

pub fn update(state: &mut State, message: Message) -> Task<Message> {
    log::trace!("update: {}", message.name());

    match message {
        Message::PageScrolled(viewport) => {
            state.now = Instant::now();
            let offset = viewport.absolute_offset();
            let bounds = viewport.bounds();
            state.observe_scroll(offset.y, bounds.height);
            Task::none()
        }
        Message::WindowResized(size) => {
            state.now = Instant::now();
            state.layout.set_window(size);
            // Section extents moved; re-evaluate what the viewport covers.
            state.observe_scroll(state.scroll_y, size.height);
            Task::none()
        }
        Message::NavigateTo(section) => {
            let target = state.layout.scroll_target(section);
            scrollable::scroll_to(
                view::page_scrollable_id(),
                AbsoluteOffset { x: 0.0, y: target },
            )
        }
        Message::AnimationTick(now) => {
            state.now = now;
            if state
                .status
                .as_ref()
                .is_some_and(|note| note.expired(now))
            {
                state.status = None;
            }
            Task::none()
        }
        Message::CarouselPrevious(id) => {
            state.carousels.previous(&id);
            Task::none()
        }
        Message::CarouselNext(id) => {
            state.carousels.next(&id);
            Task::none()
        }
        Message::CarouselSelect(id, index) => {
            state.carousels.select(&id, index);
            Task::none()
        }
        Message::ImageFetched(key, result) => {
            match result {
                Ok(decoded) => {
                    state.images.set_loaded(key, decoded.into_handle());
                }
                Err(err) => {
                    log::warn!("image fetch failed for {key}: {err}");
                    state.images.set_failed(key);
                }
            }
            Task::none()
        }
        Message::ContactNameChanged(value) => {
            state.contact.edit(Field::Name, value);
            Task::none()
        }
        Message::ContactEmailChanged(value) => {
            state.contact.edit(Field::Email, value);
            Task::none()
        }
        Message::ContactSubjectChanged(value) => {
            state.contact.edit(Field::Subject, value);
            Task::none()
        }
        Message::ContactBodyChanged(value) => {
            state.contact.edit(Field::Body, value);
            Task::none()
        }
        Message::ContactSubmitted => {
            state.now = Instant::now();
            if state.contact.submit() {
                let email = state.portfolio.contact.email.clone();
                state.status = Some(StatusNote::new(
                    format!(
                        "Thanks! This form isn't wired to a mail service — \
                         reach me directly at {email}."
                    ),
                    state.now,
                ));
            }
            Task::none()
        }
        Message::CopyLink(url) => {
            state.now = Instant::now();
            state.status = Some(StatusNote::new(
                format!("Copied {url} to the clipboard"),
                state.now,
            ));
            iced::clipboard::write(url)
        }
    }
}
