use std::path::PathBuf;

use iced::Task;

use crate::config::Config;
use crate::content;
use crate::message::Message;
use crate::state::State;

/// Runtime configuration resolved before the iced runtime boots.
///
/// Environment variables override the persisted [`Config`] file.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub content_path: Option<PathBuf>,
    pub reduce_motion: bool,
}

impl AppConfig {
    pub fn from_environment() -> Self {
        let file = Config::load();

        let content_path = std::env::var("FOLIO_CONTENT")
            .ok()
            .map(PathBuf::from)
            .or(file.content_path);

        let reduce_motion = std::env::var("FOLIO_REDUCE_MOTION")
            .map(|value| {
                matches!(
                    value.trim().to_ascii_lowercase().as_str(),
                    "1" | "true" | "yes"
                )
            })
            .unwrap_or(file.reduce_motion);

        Self {
            content_path,
            reduce_motion,
        }
    }
}

/// Build the initial application state and kick off the image fetches.
pub fn boot(config: &AppConfig) -> (State, Task<Message>) {
    let portfolio = content::load(config.content_path.as_deref());
    log::info!(
        "booting with {} projects, reduce_motion={}",
        portfolio.projects.len(),
        config.reduce_motion
    );

    let state = State::new(portfolio, config.clone());
    let fetches = state.initial_image_fetches();
    (state, Task::batch(fetches))
}
