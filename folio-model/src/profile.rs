use crate::error::{ModelError, Result};

/// Identity and hero/about copy for the person behind the portfolio.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Profile {
    pub name: String,
    pub headline: String,
    pub tagline: String,
    /// About-section paragraphs, in order.
    pub bio: Vec<String>,
    pub stats: Vec<Stat>,
    /// Reference to the downloadable CV.
    pub cv_uri: String,
    /// Reference to the portrait shown in the about section.
    pub photo_uri: String,
    pub social: Vec<SocialLink>,
}

/// One headline figure ("18+", "Projects Done").
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stat {
    pub value: String,
    pub label: String,
}

/// Platforms a social link can point at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SocialPlatform {
    GitHub,
    YouTube,
    LinkedIn,
    Twitter,
    Facebook,
    Email,
}

impl SocialPlatform {
    pub fn label(&self) -> &'static str {
        match self {
            SocialPlatform::GitHub => "GitHub",
            SocialPlatform::YouTube => "YouTube",
            SocialPlatform::LinkedIn => "LinkedIn",
            SocialPlatform::Twitter => "Twitter",
            SocialPlatform::Facebook => "Facebook",
            SocialPlatform::Email => "Email",
        }
    }
}

/// An outbound profile link, validated at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SocialLink {
    pub platform: SocialPlatform,
    pub url: String,
}

impl SocialLink {
    /// Validate and wrap a link. `mailto:` URLs are accepted for
    /// [`SocialPlatform::Email`].
    pub fn new(platform: SocialPlatform, url: impl Into<String>) -> Result<Self> {
        let url = url.into();
        let parsed = url::Url::parse(&url)
            .map_err(|err| ModelError::InvalidLink(format!("{url}: {err}")))?;

        match parsed.scheme() {
            "http" | "https" => {}
            "mailto" if platform == SocialPlatform::Email => {}
            scheme => {
                return Err(ModelError::InvalidLink(format!(
                    "{url}: unsupported scheme {scheme}"
                )));
            }
        }

        Ok(SocialLink { platform, url })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_https_links() {
        let link =
            SocialLink::new(SocialPlatform::GitHub, "https://github.com/vale")
                .unwrap();
        assert_eq!(link.platform, SocialPlatform::GitHub);
    }

    #[test]
    fn accepts_mailto_for_email_only() {
        assert!(
            SocialLink::new(SocialPlatform::Email, "mailto:hi@example.com")
                .is_ok()
        );
        assert!(
            SocialLink::new(SocialPlatform::GitHub, "mailto:hi@example.com")
                .is_err()
        );
    }

    #[test]
    fn rejects_unparseable_links() {
        assert!(SocialLink::new(SocialPlatform::Twitter, "not a url").is_err());
    }
}
