use crate::video;

/// Kind of a media item shown in a project carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MediaKind {
    Video,
    Image,
}

/// A single carousel entry: an embedded video or an image.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MediaItem {
    pub kind: MediaKind,
    pub uri: String,
}

impl MediaItem {
    pub fn video(uri: impl Into<String>) -> Self {
        MediaItem {
            kind: MediaKind::Video,
            uri: uri.into(),
        }
    }

    pub fn image(uri: impl Into<String>) -> Self {
        MediaItem {
            kind: MediaKind::Image,
            uri: uri.into(),
        }
    }

    /// URI used wherever the item is shown as a still picture.
    ///
    /// Identity for images. For videos, the thumbnail-service URL derived
    /// from the embed URI; empty when no video id can be extracted, in which
    /// case callers render a placeholder.
    pub fn display_uri(&self) -> String {
        match self.kind {
            MediaKind::Image => self.uri.clone(),
            MediaKind::Video => video::thumbnail_url(&self.uri),
        }
    }
}

/// Ordered media for one project.
///
/// Invariant: a video, when present, occupies index 0; images follow in
/// declaration order. `assemble` produces lists in that shape;
/// `normalized` restores it for content deserialized from external files.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct MediaList {
    items: Vec<MediaItem>,
}

impl MediaList {
    /// Build a media list from an optional video embed URI and image URIs.
    pub fn assemble(video: Option<String>, images: Vec<String>) -> Self {
        let mut items = Vec::with_capacity(images.len() + 1);
        if let Some(uri) = video {
            items.push(MediaItem::video(uri));
        }
        items.extend(images.into_iter().map(MediaItem::image));
        MediaList { items }
    }

    /// Reorder so videos precede images, both keeping declaration order.
    pub fn normalized(mut self) -> Self {
        self.items.sort_by_key(|item| item.kind == MediaKind::Image);
        self
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&MediaItem> {
        self.items.get(index)
    }

    pub fn items(&self) -> &[MediaItem] {
        &self.items
    }

    pub fn leads_with_video(&self) -> bool {
        matches!(self.items.first(), Some(item) if item.kind == MediaKind::Video)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assemble_puts_video_first() {
        let list = MediaList::assemble(
            Some("https://www.youtube.com/embed/ToQgvpcB8O8".to_string()),
            vec!["a.png".to_string(), "b.png".to_string()],
        );

        assert_eq!(list.len(), 3);
        assert!(list.leads_with_video());
        assert_eq!(list.get(1).unwrap().uri, "a.png");
        assert_eq!(list.get(2).unwrap().uri, "b.png");
    }

    #[test]
    fn assemble_without_video_keeps_image_order() {
        let list = MediaList::assemble(
            None,
            vec!["a.png".to_string(), "b.png".to_string()],
        );

        assert_eq!(list.len(), 2);
        assert!(!list.leads_with_video());
        assert_eq!(list.get(0).unwrap().kind, MediaKind::Image);
    }

    #[test]
    fn empty_assembly_is_representable() {
        let list = MediaList::assemble(None, Vec::new());

        assert!(list.is_empty());
        assert_eq!(list.get(0), None);
    }

    #[test]
    fn normalized_moves_video_to_front() {
        let list = MediaList {
            items: vec![
                MediaItem::image("a.png"),
                MediaItem::video("https://www.youtube.com/embed/ToQgvpcB8O8"),
                MediaItem::image("b.png"),
            ],
        };

        let normalized = list.normalized();
        assert!(normalized.leads_with_video());
        assert_eq!(normalized.get(1).unwrap().uri, "a.png");
        assert_eq!(normalized.get(2).unwrap().uri, "b.png");
    }

    #[test]
    fn image_display_uri_is_identity() {
        let item = MediaItem::image("cover.png");
        assert_eq!(item.display_uri(), "cover.png");
    }
}
