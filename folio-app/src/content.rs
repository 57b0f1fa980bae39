//! Built-in portfolio content and optional JSON overrides.

use std::path::Path;

use folio_model::{
    ContactInfo, MediaList, Portfolio, Profile, Project, ProjectId,
    ProjectLinks, SkillCategory, SocialLink, SocialPlatform, Stat,
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to read content file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse content file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Load portfolio content, falling back to the built-in sample when no
/// override is configured or the override cannot be used.
pub fn load(path: Option<&Path>) -> Portfolio {
    match path {
        Some(path) => match load_file(path) {
            Ok(portfolio) => portfolio,
            Err(err) => {
                log::warn!(
                    "could not load content from {}: {err}; using built-in content",
                    path.display()
                );
                default_portfolio()
            }
        },
        None => default_portfolio(),
    }
}

/// Parse a portfolio content file and restore the media ordering invariant.
pub fn load_file(path: &Path) -> Result<Portfolio, ContentError> {
    let raw = std::fs::read_to_string(path)?;
    let portfolio: Portfolio = serde_json::from_str(&raw)?;
    Ok(portfolio.normalized())
}

fn link(platform: SocialPlatform, url: &str) -> SocialLink {
    SocialLink::new(platform, url).expect("built-in link is valid")
}

fn stat(value: &str, label: &str) -> Stat {
    Stat {
        value: value.to_string(),
        label: label.to_string(),
    }
}

/// The sample content shipped with the application.
pub fn default_portfolio() -> Portfolio {
    Portfolio {
        profile: Profile {
            name: "Alex Moreau".to_string(),
            headline: "Software Developer & Maker".to_string(),
            tagline: "I turn real-world problems into small, sharp tools — \
                      from web platforms to embedded gadgets."
                .to_string(),
            bio: vec![
                "I'm a computer science student who started out repairing \
                 hardware and ended up building the software around it: \
                 websites, native apps, and the odd machine-learning \
                 experiment."
                    .to_string(),
                "Along the way I co-founded a small consultancy, \
                 volunteered for a local non-profit, and took a few \
                 projects to national competitions. I'm still learning \
                 every day, and that's the point."
                    .to_string(),
            ],
            stats: vec![
                stat("3+", "Years Experience"),
                stat("18+", "Projects Done"),
                stat("16+", "Happy Clients"),
            ],
            cv_uri: "https://example.com/alex-moreau-cv.pdf".to_string(),
            photo_uri: "assets/portrait.jpg".to_string(),
            social: vec![
                link(SocialPlatform::GitHub, "https://github.com/alexmoreau"),
                link(
                    SocialPlatform::YouTube,
                    "https://youtube.com/@alexmoreau",
                ),
                link(
                    SocialPlatform::LinkedIn,
                    "https://www.linkedin.com/in/alexmoreau",
                ),
                link(SocialPlatform::Email, "mailto:hello@alexmoreau.dev"),
            ],
        },
        skills: vec![
            SkillCategory {
                title: "Web Development".to_string(),
                glyph: "</>".to_string(),
                skills: vec![
                    "Platforms: WordPress, Shopify".to_string(),
                    "HTML, CSS, JavaScript".to_string(),
                    "Speed & SEO optimization".to_string(),
                    "Hosting, domains, cloud setup".to_string(),
                ],
            },
            SkillCategory {
                title: "UI & Graphic Design".to_string(),
                glyph: "UI".to_string(),
                skills: vec![
                    "Figma, Adobe XD, Photoshop".to_string(),
                    "Wireframing & prototyping".to_string(),
                    "Logo and social branding".to_string(),
                ],
            },
            SkillCategory {
                title: "Programming & Data".to_string(),
                glyph: "{ }".to_string(),
                skills: vec![
                    "Python, C/C++".to_string(),
                    "Git & GitHub".to_string(),
                    "MySQL".to_string(),
                    "TensorFlow, scikit-learn".to_string(),
                    "Pandas, NumPy, Matplotlib".to_string(),
                ],
            },
            SkillCategory {
                title: "Marketing & SEO".to_string(),
                glyph: "SEO".to_string(),
                skills: vec![
                    "Search optimization".to_string(),
                    "Google & Meta ads".to_string(),
                    "Campaign management".to_string(),
                ],
            },
        ],
        projects: vec![
            Project {
                id: ProjectId::new("air-quality"),
                title: "Air 13X".to_string(),
                category: "AI & Data Science".to_string(),
                summary: "Air quality analyzer and health advisory app: \
                          real-time AQI insight and personalized \
                          recommendations from the user's location. Placed \
                          17th of 893 entries in a national showcase."
                    .to_string(),
                tech: vec![
                    "Python".to_string(),
                    "Streamlit".to_string(),
                    "ML".to_string(),
                    "Data Visualization".to_string(),
                ],
                links: ProjectLinks {
                    demo: Some("https://air13x.example.app".to_string()),
                    source: None,
                },
                media: MediaList::assemble(
                    Some(
                        "https://www.youtube.com/embed/dQw4w9WgXcQ?controls=0"
                            .to_string(),
                    ),
                    vec![
                        "assets/projects/air13x-app.png".to_string(),
                        "assets/projects/air13x-analysis.png".to_string(),
                    ],
                ),
            },
            Project {
                id: ProjectId::new("edu-consultancy"),
                title: "Avo Edu".to_string(),
                category: "Consultancy".to_string(),
                summary: "Co-founded an educational consultancy and led a \
                          three-person team delivering WordPress sites for \
                          institutions, from concept to live deployment."
                    .to_string(),
                tech: vec![
                    "WordPress".to_string(),
                    "SEO".to_string(),
                    "Project Management".to_string(),
                ],
                links: ProjectLinks::default(),
                media: MediaList::assemble(
                    None,
                    vec![
                        "assets/projects/avoedu-cover.png".to_string(),
                        "assets/projects/avoedu-site.png".to_string(),
                    ],
                ),
            },
            Project {
                id: ProjectId::new("delivery-robot"),
                title: "Food Delivery Robot".to_string(),
                category: "IoT & Robotics".to_string(),
                summary: "Led a team building an autonomous food delivery \
                          robot; third place nationally among 48 projects \
                          and first at the regional level among 285."
                    .to_string(),
                tech: vec![
                    "Arduino".to_string(),
                    "C++".to_string(),
                    "Hardware".to_string(),
                    "Android".to_string(),
                ],
                links: ProjectLinks::default(),
                media: MediaList::assemble(
                    None,
                    vec![
                        "assets/projects/robot-stage.png".to_string(),
                        "assets/projects/robot-build.png".to_string(),
                    ],
                ),
            },
            Project {
                id: ProjectId::new("foundation-site"),
                title: "Purnota Foundation".to_string(),
                category: "Non-Profit".to_string(),
                summary: "Managed website content and promotional video for \
                          a charity: fifteen wells built, food distributed \
                          to 250 families."
                    .to_string(),
                tech: vec![
                    "WordPress".to_string(),
                    "Video Editing".to_string(),
                ],
                links: ProjectLinks::default(),
                media: MediaList::assemble(
                    None,
                    vec!["assets/projects/foundation.png".to_string()],
                ),
            },
        ],
        contact: ContactInfo {
            location: "Lyon, France".to_string(),
            email: "hello@alexmoreau.dev".to_string(),
            phone: "+33 6 00 00 00 00".to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_model::MediaKind;

    #[test]
    fn built_in_content_is_coherent() {
        let portfolio = default_portfolio();

        assert!(!portfolio.projects.is_empty());
        for project in &portfolio.projects {
            // The carousel assumes videos lead.
            let kinds: Vec<MediaKind> = project
                .media
                .items()
                .iter()
                .map(|item| item.kind)
                .collect();
            let first_image =
                kinds.iter().position(|kind| *kind == MediaKind::Image);
            let last_video = kinds
                .iter()
                .rposition(|kind| *kind == MediaKind::Video);
            if let (Some(image), Some(video)) = (first_image, last_video) {
                assert!(video < image);
            }
        }
    }

    #[test]
    fn content_file_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("portfolio.json");

        let portfolio = default_portfolio();
        let raw = serde_json::to_string_pretty(&portfolio).unwrap();
        std::fs::write(&path, raw).unwrap();

        let loaded = load_file(&path).unwrap();
        assert_eq!(loaded, portfolio);
    }

    #[test]
    fn malformed_content_falls_back_to_built_in() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("portfolio.json");
        std::fs::write(&path, "[1, 2").unwrap();

        let portfolio = load(Some(&path));
        assert_eq!(portfolio, default_portfolio());
    }
}
