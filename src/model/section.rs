//! Section identifiers in document order.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A distinct content region of the page with a stable identifier.
///
/// Variants are declared in document order; `index()` is the position used by
/// navigation controls and the section registry. The footer is deliberately
/// not a section: scrolling into it never changes the active section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SectionId {
    /// Self introduction (hero).
    About,
    /// Work experience cards.
    Experience,
    /// Featured projects.
    Projects,
    /// Education cards.
    Education,
    /// Skill groups.
    Skills,
}

/// Error returned when a section name cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown section '{0}' (expected one of: about, experience, projects, education, skills)")]
pub struct UnknownSection(pub String);

impl SectionId {
    /// All sections in document order.
    pub const ALL: [SectionId; 5] = [
        SectionId::About,
        SectionId::Experience,
        SectionId::Projects,
        SectionId::Education,
        SectionId::Skills,
    ];

    /// Position in document order.
    pub fn index(self) -> usize {
        match self {
            SectionId::About => 0,
            SectionId::Experience => 1,
            SectionId::Projects => 2,
            SectionId::Education => 3,
            SectionId::Skills => 4,
        }
    }

    /// Section at a document-order position, if any.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Navigation label.
    pub fn label(self) -> &'static str {
        match self {
            SectionId::About => "About",
            SectionId::Experience => "Experience",
            SectionId::Projects => "Projects",
            SectionId::Education => "Education",
            SectionId::Skills => "Skills",
        }
    }

    /// First four characters of the label, used when the nav bar is cramped.
    pub fn short_label(self) -> &'static str {
        let label = self.label();
        &label[..label.len().min(4)]
    }

    /// Icon shown in the side indicator.
    pub fn icon(self) -> &'static str {
        match self {
            SectionId::About => "👤",
            SectionId::Experience => "💼",
            SectionId::Projects => "🚀",
            SectionId::Education => "🎓",
            SectionId::Skills => "🔧",
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SectionId {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|id| id.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownSection(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_round_trips_through_from_index() {
        for id in SectionId::ALL {
            assert_eq!(SectionId::from_index(id.index()), Some(id));
        }
    }

    #[test]
    fn from_index_out_of_range_is_none() {
        assert_eq!(SectionId::from_index(5), None);
    }

    #[test]
    fn short_labels_are_four_chars() {
        assert_eq!(SectionId::About.short_label(), "Abou");
        assert_eq!(SectionId::Experience.short_label(), "Expe");
        assert_eq!(SectionId::Skills.short_label(), "Skil");
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("projects".parse(), Ok(SectionId::Projects));
        assert_eq!("SKILLS".parse(), Ok(SectionId::Skills));
    }

    #[test]
    fn parse_rejects_footer() {
        let err = "footer".parse::<SectionId>().unwrap_err();
        assert_eq!(err, UnknownSection("footer".to_string()));
    }
}
