//! Application state and its construction.

use std::time::{Duration, Instant};

use folio_model::Portfolio;
use iced::Task;

use crate::app::bootstrap::AppConfig;
use crate::carousel::CarouselRegistry;
use crate::contact::ContactForm;
use crate::image_cache::{ImageCache, ImageSource, load};
use crate::layout::{Section, SectionLayout};
use crate::message::Message;
use crate::reveal::{DEFAULT_THRESHOLD, RevealController, Tracking};

/// How long a status note stays on screen.
pub const STATUS_NOTE_TTL: Duration = Duration::from_secs(4);

/// Transient note surfaced near the bottom of the page (link copies, form
/// feedback).
#[derive(Debug, Clone)]
pub struct StatusNote {
    pub text: String,
    pub shown_at: Instant,
}

impl StatusNote {
    pub fn new(text: impl Into<String>, shown_at: Instant) -> Self {
        StatusNote {
            text: text.into(),
            shown_at,
        }
    }

    pub fn expired(&self, now: Instant) -> bool {
        now.duration_since(self.shown_at) > STATUS_NOTE_TTL
    }
}

#[derive(Debug)]
pub struct State {
    pub portfolio: Portfolio,
    pub config: AppConfig,
    pub layout: SectionLayout,
    pub reveal: RevealController,
    pub carousels: CarouselRegistry,
    pub images: ImageCache,
    pub contact: ContactForm,
    pub status: Option<StatusNote>,
    /// Last y offset reported by the page scrollable.
    pub scroll_y: f32,
    /// Instant of the most recent input or tick, used when rendering
    /// transitions.
    pub now: Instant,
}

impl State {
    pub fn new(portfolio: Portfolio, config: AppConfig) -> Self {
        let now = Instant::now();
        let window = iced::Size::new(1280.0, 860.0);
        let layout = SectionLayout::new(window, portfolio.projects.len());

        let tracking = if config.reduce_motion {
            Tracking::Disabled
        } else {
            Tracking::Viewport
        };
        let mut reveal = RevealController::new(tracking);
        for section in Section::TRACKED {
            reveal.attach(section, DEFAULT_THRESHOLD, section.reveal_delay());
        }

        let carousels = CarouselRegistry::from_projects(&portfolio.projects);

        let mut state = State {
            portfolio,
            config,
            layout,
            reveal,
            carousels,
            images: ImageCache::new(),
            contact: ContactForm::default(),
            status: None,
            scroll_y: 0.0,
            now,
        };

        // The boot frame counts as the first observation: everything above
        // the fold reveals without waiting for a scroll event.
        state.observe_scroll(0.0, window.height);
        state
    }

    /// Feed the current scroll position to the reveal controller.
    pub fn observe_scroll(&mut self, scroll_y: f32, viewport_height: f32) {
        self.scroll_y = scroll_y;
        for section in Section::TRACKED {
            let fraction = self.layout.visible_fraction(
                section,
                scroll_y,
                viewport_height,
            );
            self.reveal.observe(section, fraction, self.now);
        }
    }

    /// Fetch tasks for every image the page will want: the portrait plus
    /// each media item's display still. Already cached keys are skipped.
    pub fn initial_image_fetches(&self) -> Vec<Task<Message>> {
        let mut uris = vec![self.portfolio.profile.photo_uri.clone()];
        for project in &self.portfolio.projects {
            for item in project.media.items() {
                uris.push(item.display_uri());
            }
        }

        uris.into_iter()
            .filter_map(|uri| self.fetch(ImageSource::for_uri(&uri)?))
            .collect()
    }

    fn fetch(&self, source: ImageSource) -> Option<Task<Message>> {
        let key = source.cache_key();
        if self.images.contains(&key) {
            return None;
        }
        self.images.set_loading(key);
        Some(Task::perform(load(source), |(key, result)| {
            Message::ImageFetched(key, result)
        }))
    }
}
