/// Strongly typed identifier for projects.
///
/// Project ids are authored slugs (`"air-quality"`), unique within one
/// portfolio. They key per-project UI state such as carousel positions.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProjectId(String);

impl ProjectId {
    pub fn new(slug: impl Into<String>) -> Self {
        ProjectId(slug.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ProjectId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ProjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
