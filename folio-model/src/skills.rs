/// One card in the skills grid.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkillCategory {
    pub title: String,
    /// Short marker rendered in the card badge ("</>", "UI").
    pub glyph: String,
    pub skills: Vec<String>,
}
