//! Enums used throughout the portfolio TUI
//!
//! This module contains the various enum types used for state management
//! and UI rendering.

/// Named page sections. Doubles as the theme key: the theme switcher owns
/// one of these and the palette is looked up from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SectionId {
    #[default]
    Top,
    Highlights,
    Experience,
    Projects,
    Skills,
    Education,
    Contact,
}

impl SectionId {
    /// Candidate sections observed by the theme switcher, in document
    /// order. Top is the default theme, not a candidate.
    pub const CANDIDATES: [SectionId; 6] = [
        SectionId::Highlights,
        SectionId::Experience,
        SectionId::Projects,
        SectionId::Skills,
        SectionId::Education,
        SectionId::Contact,
    ];

    /// Stable element id used in the page layout.
    pub fn anchor(&self) -> &'static str {
        match self {
            SectionId::Top => "top",
            SectionId::Highlights => "highlights",
            SectionId::Experience => "experience",
            SectionId::Projects => "projects",
            SectionId::Skills => "skills",
            SectionId::Education => "education",
            SectionId::Contact => "contact",
        }
    }

    pub fn from_anchor(anchor: &str) -> Option<Self> {
        match anchor {
            "top" => Some(SectionId::Top),
            "highlights" => Some(SectionId::Highlights),
            "experience" => Some(SectionId::Experience),
            "projects" => Some(SectionId::Projects),
            "skills" => Some(SectionId::Skills),
            "education" => Some(SectionId::Education),
            "contact" => Some(SectionId::Contact),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SectionId::Top => "Top",
            SectionId::Highlights => "Highlights",
            SectionId::Experience => "Experience",
            SectionId::Projects => "Projects",
            SectionId::Skills => "Skills",
            SectionId::Education => "Education",
            SectionId::Contact => "Contact",
        }
    }
}

/// Mode for modal input system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Browse, // Default mode - scroll the page
    Compose, // Contact form - keys edit the focused field
}

/// Focused field in the contact composer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ComposeField {
    #[default]
    Name,
    Email,
    Message,
}

impl ComposeField {
    pub fn next(&self) -> Self {
        match self {
            ComposeField::Name => ComposeField::Email,
            ComposeField::Email => ComposeField::Message,
            ComposeField::Message => ComposeField::Name,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ComposeField::Name => "Name",
            ComposeField::Email => "Email",
            ComposeField::Message => "Message",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_anchor_roundtrip() {
        for section in [SectionId::Top, SectionId::Contact, SectionId::Skills] {
            assert_eq!(SectionId::from_anchor(section.anchor()), Some(section));
        }
        assert_eq!(SectionId::from_anchor("nope"), None);
    }

    #[test]
    fn test_candidates_exclude_top() {
        assert!(!SectionId::CANDIDATES.contains(&SectionId::Top));
        assert_eq!(SectionId::CANDIDATES.len(), 6);
    }

    #[test]
    fn test_compose_field_cycle() {
        assert_eq!(ComposeField::Name.next(), ComposeField::Email);
        assert_eq!(ComposeField::Email.next(), ComposeField::Message);
        assert_eq!(ComposeField::Message.next(), ComposeField::Name);
    }

    #[test]
    fn test_mode_default() {
        assert_eq!(Mode::default(), Mode::Browse);
    }
}
