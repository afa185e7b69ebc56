use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Named page regions, in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    #[default]
    Home,
    About,
    Projects,
    Experience,
    Skills,
    Education,
    Contact,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown section id '{0}'")]
pub struct UnknownSection(pub String);

impl SectionId {
    /// Returns the element id used in the page markup.
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::About => "about",
            SectionId::Projects => "projects",
            SectionId::Experience => "experience",
            SectionId::Skills => "skills",
            SectionId::Education => "education",
            SectionId::Contact => "contact",
        }
    }

    /// Navigation label: the id with its first letter upper-cased.
    pub fn label(&self) -> String {
        let id = self.as_str();
        let mut chars = id.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    /// Returns all sections in document order.
    pub fn all() -> [SectionId; 7] {
        [
            SectionId::Home,
            SectionId::About,
            SectionId::Projects,
            SectionId::Experience,
            SectionId::Skills,
            SectionId::Education,
            SectionId::Contact,
        ]
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SectionId {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SectionId::all()
            .into_iter()
            .find(|section| section.as_str() == s)
            .ok_or_else(|| UnknownSection(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_capitalize_first_letter() {
        assert_eq!(SectionId::Home.label(), "Home");
        assert_eq!(SectionId::Experience.label(), "Experience");
    }

    #[test]
    fn test_parse_round_trips_every_section() {
        for section in SectionId::all() {
            assert_eq!(section.as_str().parse::<SectionId>(), Ok(section));
        }
    }

    #[test]
    fn test_parse_rejects_unknown_id() {
        assert_eq!(
            "blog".parse::<SectionId>(),
            Err(UnknownSection("blog".to_string()))
        );
        assert!("Home".parse::<SectionId>().is_err());
    }
}
