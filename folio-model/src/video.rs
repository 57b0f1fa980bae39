//! Thumbnail derivation for embedded videos.
//!
//! Portfolio videos are referenced by their platform embed URI. The still
//! shown in carousels and selector strips is composed from the 11-character
//! video identifier and a known thumbnail-service URL template.

use once_cell::sync::Lazy;
use regex::Regex;

// Matches the id in both embed URIs (".../embed/<id>?...") and watch URIs
// ("...?v=<id>").
static VIDEO_ID: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:embed/|v=)([A-Za-z0-9_-]{11})")
        .expect("video id pattern is valid")
});

/// Extract the 11-character video identifier from an embed or watch URI.
pub fn video_id(uri: &str) -> Option<&str> {
    VIDEO_ID
        .captures(uri)
        .and_then(|captures| captures.get(1))
        .map(|id| id.as_str())
}

/// Compose the thumbnail URL for a video embed URI.
///
/// Returns an empty reference when no identifier can be extracted; callers
/// treat that as "render a placeholder", never as an error.
pub fn thumbnail_url(uri: &str) -> String {
    match video_id(uri) {
        Some(id) => format!("https://img.youtube.com/vi/{id}/hqdefault.jpg"),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_id_from_embed_uri() {
        let uri =
            "https://www.youtube.com/embed/ToQgvpcB8O8?si=Yqn9FjPxofoYk1kJ&controls=0";
        assert_eq!(video_id(uri), Some("ToQgvpcB8O8"));
    }

    #[test]
    fn extracts_id_from_watch_uri() {
        let uri = "https://www.youtube.com/watch?v=ToQgvpcB8O8";
        assert_eq!(video_id(uri), Some("ToQgvpcB8O8"));
    }

    #[test]
    fn composes_thumbnail_service_url() {
        let uri = "https://www.youtube.com/embed/ToQgvpcB8O8?si=Yqn9FjPxofoYk1kJ";
        assert_eq!(
            thumbnail_url(uri),
            "https://img.youtube.com/vi/ToQgvpcB8O8/hqdefault.jpg"
        );
    }

    #[test]
    fn malformed_uri_yields_empty_reference() {
        assert_eq!(video_id("https://example.com/clip.mp4"), None);
        assert_eq!(thumbnail_url("https://example.com/clip.mp4"), "");
        // Too short to be an id.
        assert_eq!(video_id("https://www.youtube.com/embed/short"), None);
    }
}
