//! Root-level subscription composition

use std::time::Duration;

use iced::Subscription;

use crate::message::Message;
use crate::state::State;

/// Tick rate while reveal transitions or status notes need redraws.
const ANIMATION_TICK: Duration = Duration::from_millis(16);

pub fn subscription(state: &State) -> Subscription<Message> {
    let mut subscriptions = vec![window_resizes()];

    // Only wake the runtime while something on screen is actually moving.
    if state.reveal.is_animating(state.now) || state.status.is_some() {
        subscriptions.push(
            iced::time::every(ANIMATION_TICK).map(Message::AnimationTick),
        );
    }

    Subscription::batch(subscriptions)
}

fn window_resizes() -> Subscription<Message> {
    iced::window::resize_events()
        .map(|(_id, size)| Message::WindowResized(size))
}
