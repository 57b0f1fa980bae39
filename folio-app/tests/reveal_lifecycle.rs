//! Reveal tracking driven through application state.

use folio_app::app::AppConfig;
use folio_app::content;
use folio_app::layout::Section;
use folio_app::state::State;

fn state_with(reduce_motion: bool) -> State {
    State::new(
        content::default_portfolio(),
        AppConfig {
            content_path: None,
            reduce_motion,
        },
    )
}

#[test]
fn boot_reveals_the_hero_but_not_below_the_fold() {
    let state = state_with(false);

    assert!(state.reveal.has_been_visible(Section::Hero));
    assert!(!state.reveal.has_been_visible(Section::Projects));
    assert!(!state.reveal.has_been_visible(Section::Contact));
}

#[test]
fn scrolling_to_a_section_latches_it_for_good() {
    let mut state = state_with(false);
    let viewport_height = state.layout.window().height;

    let contact_top = state.layout.offset_of(Section::Contact);
    state.observe_scroll(contact_top - viewport_height / 2.0, viewport_height);
    assert!(state.reveal.has_been_visible(Section::Contact));

    // Scrolling back to the top must not hide it again.
    state.observe_scroll(0.0, viewport_height);
    assert!(state.reveal.has_been_visible(Section::Contact));
}

#[test]
fn a_sliver_below_the_threshold_does_not_latch() {
    let mut state = state_with(false);
    let viewport_height = state.layout.window().height;

    let about_top = state.layout.offset_of(Section::About);
    let about_height = state.layout.height_of(Section::About);
    // Five percent of the about band peeks above the fold.
    state.observe_scroll(
        about_top - viewport_height + about_height * 0.05,
        viewport_height,
    );
    assert!(!state.reveal.has_been_visible(Section::About));
}

#[test]
fn reduce_motion_fails_open_everywhere() {
    let state = state_with(true);

    for section in Section::TRACKED {
        assert!(state.reveal.has_been_visible(section));
        assert_eq!(
            state.reveal.progress(
                section,
                state.now,
                std::time::Duration::ZERO
            ),
            1.0
        );
    }
    assert!(!state.reveal.is_animating(state.now));
}

#[test]
fn detaching_a_section_releases_tracking_and_renders_settled() {
    let mut state = state_with(false);

    state.reveal.detach(Section::Skills);
    assert!(!state.reveal.is_attached(Section::Skills));

    // Fail open: an untracked section never stays hidden.
    assert!(state.reveal.has_been_visible(Section::Skills));

    let viewport_height = state.layout.window().height;
    let skills_top = state.layout.offset_of(Section::Skills);
    state.observe_scroll(skills_top, viewport_height);
    assert!(!state.reveal.is_attached(Section::Skills));
}

#[test]
fn window_resize_keeps_geometry_consistent() {
    let mut state = state_with(false);

    state.layout.set_window(iced::Size::new(1600.0, 1000.0));
    let hero_height = state.layout.height_of(Section::Hero);
    assert_eq!(hero_height, 1000.0);
    assert_eq!(state.layout.offset_of(Section::About), hero_height);
}
