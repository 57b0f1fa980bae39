use crate::ids::ProjectId;
use crate::profile::Profile;
use crate::project::Project;
use crate::skills::SkillCategory;

/// Where to find the person outside the page.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContactInfo {
    pub location: String,
    pub email: String,
    pub phone: String,
}

/// Root of the portfolio content tree.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Portfolio {
    pub profile: Profile,
    pub skills: Vec<SkillCategory>,
    pub projects: Vec<Project>,
    pub contact: ContactInfo,
}

impl Portfolio {
    /// Restore the media ordering invariant on every project.
    ///
    /// Content deserialized from external files may list media in any order;
    /// carousels assume videos lead.
    pub fn normalized(mut self) -> Self {
        for project in &mut self.projects {
            project.media = std::mem::take(&mut project.media).normalized();
        }
        self
    }

    pub fn project(&self, id: &ProjectId) -> Option<&Project> {
        self.projects.iter().find(|project| &project.id == id)
    }
}
