//! Section geometry for the single scrollable page.
//!
//! The page is one vertical scrollable; every section renders inside a
//! fixed-height frame so reveal tracking and header navigation can reason
//! about positions without measuring widgets.

use std::time::Duration;

use iced::Size;

/// Height of the navigation header overlay.
pub const HEADER_HEIGHT: f32 = 72.0;

/// The hero fills the window but never collapses below this.
pub const MIN_HERO_HEIGHT: f32 = 620.0;

pub const ABOUT_HEIGHT: f32 = 760.0;
pub const SKILLS_HEIGHT: f32 = 860.0;
pub const PROJECTS_HEADER_HEIGHT: f32 = 150.0;
pub const PROJECT_CARD_HEIGHT: f32 = 470.0;
pub const CONTACT_HEIGHT: f32 = 720.0;
pub const FOOTER_HEIGHT: f32 = 160.0;

/// Page sections in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Hero,
    About,
    Skills,
    Projects,
    Contact,
    Footer,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::Hero,
        Section::About,
        Section::Skills,
        Section::Projects,
        Section::Contact,
        Section::Footer,
    ];

    /// Sections that participate in reveal tracking. The footer is always
    /// settled.
    pub const TRACKED: [Section; 5] = [
        Section::Hero,
        Section::About,
        Section::Skills,
        Section::Projects,
        Section::Contact,
    ];

    /// Sections addressable from the navigation header.
    pub const NAV: [Section; 4] = [
        Section::About,
        Section::Skills,
        Section::Projects,
        Section::Contact,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Section::Hero => "Home",
            Section::About => "About",
            Section::Skills => "Skills",
            Section::Projects => "Projects",
            Section::Contact => "Contact",
            Section::Footer => "Footer",
        }
    }

    /// Presentation hint: how long the reveal transition waits after the
    /// latch before it starts. Does not affect when a section counts as
    /// having been visible.
    pub fn reveal_delay(&self) -> Duration {
        match self {
            Section::Hero => Duration::ZERO,
            _ => Duration::from_millis(100),
        }
    }
}

/// Vertical extents of every section, derived from the window size and the
/// number of project cards.
#[derive(Debug, Clone)]
pub struct SectionLayout {
    window: Size,
    project_count: usize,
}

impl SectionLayout {
    pub fn new(window: Size, project_count: usize) -> Self {
        SectionLayout {
            window,
            project_count,
        }
    }

    pub fn window(&self) -> Size {
        self.window
    }

    pub fn set_window(&mut self, window: Size) {
        self.window = window;
    }

    pub fn height_of(&self, section: Section) -> f32 {
        match section {
            Section::Hero => self.window.height.max(MIN_HERO_HEIGHT),
            Section::About => ABOUT_HEIGHT,
            Section::Skills => SKILLS_HEIGHT,
            Section::Projects => {
                PROJECTS_HEADER_HEIGHT
                    + self.project_count as f32 * PROJECT_CARD_HEIGHT
            }
            Section::Contact => CONTACT_HEIGHT,
            Section::Footer => FOOTER_HEIGHT,
        }
    }

    /// Distance from the top of the page to the top of `section`.
    pub fn offset_of(&self, section: Section) -> f32 {
        let mut offset = 0.0;
        for candidate in Section::ALL {
            if candidate == section {
                break;
            }
            offset += self.height_of(candidate);
        }
        offset
    }

    /// Scroll offset that brings `section` under the header.
    pub fn scroll_target(&self, section: Section) -> f32 {
        (self.offset_of(section) - HEADER_HEIGHT).max(0.0)
    }

    /// Fraction of `section` currently inside the viewport band, in
    /// `0.0..=1.0`.
    pub fn visible_fraction(
        &self,
        section: Section,
        scroll_y: f32,
        viewport_height: f32,
    ) -> f32 {
        let top = self.offset_of(section);
        let height = self.height_of(section).max(1.0);
        let view_bottom = scroll_y + viewport_height;

        let overlap =
            (view_bottom.min(top + height) - scroll_y.max(top)).max(0.0);
        (overlap / height).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> SectionLayout {
        SectionLayout::new(Size::new(1280.0, 800.0), 4)
    }

    #[test]
    fn offsets_accumulate_in_document_order() {
        let layout = layout();

        assert_eq!(layout.offset_of(Section::Hero), 0.0);
        assert_eq!(layout.offset_of(Section::About), 800.0);
        assert_eq!(
            layout.offset_of(Section::Skills),
            800.0 + ABOUT_HEIGHT
        );

        let mut previous = -1.0;
        for section in Section::ALL {
            let offset = layout.offset_of(section);
            assert!(offset > previous);
            previous = offset;
        }
    }

    #[test]
    fn hero_tracks_window_height_with_floor() {
        let mut layout = layout();
        assert_eq!(layout.height_of(Section::Hero), 800.0);

        layout.set_window(Size::new(1280.0, 480.0));
        assert_eq!(layout.height_of(Section::Hero), MIN_HERO_HEIGHT);
    }

    #[test]
    fn visible_fraction_is_zero_off_screen_and_one_when_contained() {
        let layout = layout();

        // Page top: the about section is entirely below the fold.
        assert_eq!(
            layout.visible_fraction(Section::About, 0.0, 800.0),
            0.0
        );

        // Scrolled so the about band is fully inside the viewport.
        let about_top = layout.offset_of(Section::About);
        assert_eq!(
            layout.visible_fraction(Section::About, about_top, 800.0),
            1.0
        );
    }

    #[test]
    fn visible_fraction_reports_partial_overlap() {
        let layout = layout();
        let about_top = layout.offset_of(Section::About);

        // A quarter of the section peeks above the fold.
        let scroll = about_top - 800.0 + ABOUT_HEIGHT * 0.25;
        let fraction =
            layout.visible_fraction(Section::About, scroll, 800.0);
        assert!((fraction - 0.25).abs() < 1e-4);
    }

    #[test]
    fn scroll_target_clamps_at_page_top() {
        let layout = layout();
        assert_eq!(layout.scroll_target(Section::Hero), 0.0);
        assert!(layout.scroll_target(Section::Projects) > 0.0);
    }
}
