use crate::ids::ProjectId;
use crate::media::MediaList;

/// External references attached to a project card.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProjectLinks {
    pub demo: Option<String>,
    pub source: Option<String>,
}

/// One showcase entry with its media carousel content.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Project {
    pub id: ProjectId,
    pub title: String,
    pub category: String,
    pub summary: String,
    pub tech: Vec<String>,
    pub links: ProjectLinks,
    pub media: MediaList,
}
