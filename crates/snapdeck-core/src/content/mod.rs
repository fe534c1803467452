mod loader;
mod models;

pub use loader::{parse_site, BUILTIN_SITE};
pub use models::{Event, Link, Member, Section, SectionKind};

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Ordered sections making up the site
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteContent {
    /// Organization name shown in the status bar
    pub title: String,
    #[serde(default)]
    pub sections: Vec<Section>,
}

impl SiteContent {
    /// The built-in chapter site
    pub fn builtin() -> Result<Self> {
        Self::from_toml(BUILTIN_SITE)
    }

    pub fn from_toml(text: &str) -> Result<Self> {
        let site: Self = toml::from_str(text)?;
        site.validate()?;
        Ok(site)
    }

    pub fn from_json(text: &str) -> Result<Self> {
        let site: Self = serde_json::from_str(text)?;
        site.validate()?;
        Ok(site)
    }

    /// At least one section, with unique non-empty ids and non-empty names
    pub fn validate(&self) -> Result<()> {
        if self.sections.is_empty() {
            return Err(Error::Content("site has no sections".to_string()));
        }

        let mut seen = HashSet::new();
        for (i, section) in self.sections.iter().enumerate() {
            if section.id.trim().is_empty() {
                return Err(Error::Content(format!("section #{} has an empty id", i + 1)));
            }
            if section.name.trim().is_empty() {
                return Err(Error::Content(format!(
                    "section '{}' has an empty name",
                    section.id
                )));
            }
            if !seen.insert(section.id.as_str()) {
                return Err(Error::Content(format!(
                    "duplicate section id '{}'",
                    section.id
                )));
            }
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Section> {
        self.sections.get(index)
    }

    /// Index of the section with the given id
    pub fn position(&self, id: &str) -> Result<usize> {
        self.sections
            .iter()
            .position(|s| s.id == id)
            .ok_or_else(|| Error::SectionNotFound(id.to_string()))
    }

    /// Navigation labels, in display order
    pub fn names(&self) -> Vec<&str> {
        self.sections.iter().map(|s| s.name.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_site_is_valid() {
        let site = SiteContent::builtin().unwrap();
        assert!(site.len() >= 5);
        assert_eq!(site.sections[0].kind, SectionKind::Hero);
        assert!(site.position("hackathon").is_ok());
    }

    #[test]
    fn test_empty_site_rejected() {
        let err = SiteContent::from_toml("title = \"x\"").unwrap_err();
        assert!(matches!(err, Error::Content(_)));
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let text = r#"
            title = "x"
            [[sections]]
            id = "a"
            name = "A"
            title = "A"
            [[sections]]
            id = "a"
            name = "B"
            title = "B"
        "#;
        let err = SiteContent::from_toml(text).unwrap_err();
        assert!(err.to_string().contains("duplicate section id"));
    }

    #[test]
    fn test_json_content() {
        let text = r#"{
            "title": "Chapter",
            "sections": [
                {"id": "home", "name": "Home", "title": "Welcome", "kind": "hero"},
                {"id": "about", "name": "About", "title": "About us", "body": ["Hi."]}
            ]
        }"#;
        let site = SiteContent::from_json(text).unwrap();
        assert_eq!(site.names(), vec!["Home", "About"]);
        assert_eq!(site.sections[1].kind, SectionKind::Text);
    }

    #[test]
    fn test_unknown_section() {
        let site = SiteContent::builtin().unwrap();
        assert!(matches!(
            site.position("blog"),
            Err(Error::SectionNotFound(_))
        ));
    }
}
