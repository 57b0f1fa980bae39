//! Top-level application messages.

use std::time::Instant;

use folio_model::ProjectId;
use iced::Size;
use iced::widget::scrollable;

use crate::image_cache::Decoded;
use crate::layout::Section;

#[derive(Debug, Clone)]
pub enum Message {
    /// The page scrollable reported a new viewport.
    PageScrolled(scrollable::Viewport),
    WindowResized(Size),
    /// Header navigation requested a section.
    NavigateTo(Section),
    /// Periodic redraw while reveal transitions or status notes are live.
    AnimationTick(Instant),

    CarouselPrevious(ProjectId),
    CarouselNext(ProjectId),
    CarouselSelect(ProjectId, usize),

    /// An image fetch finished, successfully or not.
    ImageFetched(String, Result<Decoded, String>),

    ContactNameChanged(String),
    ContactEmailChanged(String),
    ContactSubjectChanged(String),
    ContactBodyChanged(String),
    ContactSubmitted,

    /// Copy an outbound link to the clipboard.
    CopyLink(String),
}

impl Message {
    /// Stable name for log lines.
    pub fn name(&self) -> &'static str {
        match self {
            Message::PageScrolled(_) => "PageScrolled",
            Message::WindowResized(_) => "WindowResized",
            Message::NavigateTo(_) => "NavigateTo",
            Message::AnimationTick(_) => "AnimationTick",
            Message::CarouselPrevious(_) => "CarouselPrevious",
            Message::CarouselNext(_) => "CarouselNext",
            Message::CarouselSelect(_, _) => "CarouselSelect",
            Message::ImageFetched(_, _) => "ImageFetched",
            Message::ContactNameChanged(_) => "ContactNameChanged",
            Message::ContactEmailChanged(_) => "ContactEmailChanged",
            Message::ContactSubjectChanged(_) => "ContactSubjectChanged",
            Message::ContactBodyChanged(_) => "ContactBodyChanged",
            Message::ContactSubmitted => "ContactSubmitted",
            Message::CopyLink(_) => "CopyLink",
        }
    }
}
