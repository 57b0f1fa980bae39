//! End-to-end carousel behavior through the update loop.

use folio_app::app::AppConfig;
use folio_app::content;
use folio_app::message::Message;
use folio_app::state::State;
use folio_app::update::update;

use folio_model::{
    ContactInfo, MediaKind, MediaList, Portfolio, Profile, Project,
    ProjectId, ProjectLinks, SkillCategory, SocialPlatform,
};

fn config() -> AppConfig {
    AppConfig {
        content_path: None,
        reduce_motion: true,
    }
}

fn sample_portfolio() -> Portfolio {
    Portfolio {
        profile: Profile {
            name: "Test Person".to_string(),
            headline: "Developer".to_string(),
            tagline: "Builds things".to_string(),
            bio: vec!["One paragraph.".to_string()],
            stats: vec![],
            cv_uri: "https://example.com/cv.pdf".to_string(),
            photo_uri: String::new(),
            social: vec![],
        },
        skills: vec![SkillCategory {
            title: "General".to_string(),
            glyph: "*".to_string(),
            skills: vec!["Everything".to_string()],
        }],
        projects: vec![
            Project {
                id: ProjectId::new("showreel"),
                title: "Showreel".to_string(),
                category: "Video".to_string(),
                summary: "Video-led project".to_string(),
                tech: vec![],
                links: ProjectLinks::default(),
                media: MediaList::assemble(
                    Some(
                        "https://www.youtube.com/embed/ToQgvpcB8O8?si=x"
                            .to_string(),
                    ),
                    vec!["one.png".to_string(), "two.png".to_string()],
                ),
            },
            Project {
                id: ProjectId::new("barren"),
                title: "Barren".to_string(),
                category: "Misc".to_string(),
                summary: "No media at all".to_string(),
                tech: vec![],
                links: ProjectLinks::default(),
                media: MediaList::assemble(None, vec![]),
            },
        ],
        contact: ContactInfo {
            location: "Nowhere".to_string(),
            email: "test@example.com".to_string(),
            phone: "+1 000".to_string(),
        },
    }
}

fn active_kind(state: &State, id: &ProjectId) -> Option<MediaKind> {
    let project = state.portfolio.project(id).unwrap();
    project
        .media
        .get(state.carousels.active_index(id))
        .map(|item| item.kind)
}

#[test]
fn video_leads_then_images_then_wrap() {
    let mut state = State::new(sample_portfolio(), config());
    let id = ProjectId::new("showreel");

    assert_eq!(state.portfolio.project(&id).unwrap().media.len(), 3);
    assert_eq!(active_kind(&state, &id), Some(MediaKind::Video));

    let _ = update(&mut state, Message::CarouselNext(id.clone()));
    assert_eq!(state.carousels.active_index(&id), 1);
    assert_eq!(active_kind(&state, &id), Some(MediaKind::Image));

    let _ = update(&mut state, Message::CarouselNext(id.clone()));
    assert_eq!(state.carousels.active_index(&id), 2);

    let _ = update(&mut state, Message::CarouselNext(id.clone()));
    assert_eq!(state.carousels.active_index(&id), 0);
    assert_eq!(active_kind(&state, &id), Some(MediaKind::Video));
}

#[test]
fn previous_wraps_backwards_without_underflow() {
    let mut state = State::new(sample_portfolio(), config());
    let id = ProjectId::new("showreel");

    let _ = update(&mut state, Message::CarouselPrevious(id.clone()));
    assert_eq!(state.carousels.active_index(&id), 2);

    let _ = update(&mut state, Message::CarouselNext(id.clone()));
    assert_eq!(state.carousels.active_index(&id), 0);
}

#[test]
fn select_applies_valid_and_ignores_invalid_indices() {
    let mut state = State::new(sample_portfolio(), config());
    let id = ProjectId::new("showreel");

    let _ = update(&mut state, Message::CarouselSelect(id.clone(), 2));
    assert_eq!(state.carousels.active_index(&id), 2);

    let _ = update(&mut state, Message::CarouselSelect(id.clone(), 3));
    assert_eq!(state.carousels.active_index(&id), 2);
}

#[test]
fn empty_media_project_stays_on_the_placeholder_slot() {
    let mut state = State::new(sample_portfolio(), config());
    let id = ProjectId::new("barren");

    assert_eq!(state.carousels.active_index(&id), 0);
    assert_eq!(active_kind(&state, &id), None);

    let _ = update(&mut state, Message::CarouselNext(id.clone()));
    let _ = update(&mut state, Message::CarouselPrevious(id.clone()));
    assert_eq!(state.carousels.active_index(&id), 0);
}

#[test]
fn built_in_content_boots_with_every_carousel_at_zero() {
    let state = State::new(content::default_portfolio(), config());
    for project in &state.portfolio.projects {
        assert_eq!(state.carousels.active_index(&project.id), 0);
    }
}

#[test]
fn social_platform_labels_are_stable() {
    // The contact view keys its buttons off these labels.
    assert_eq!(SocialPlatform::GitHub.label(), "GitHub");
    assert_eq!(SocialPlatform::Email.label(), "Email");
}
