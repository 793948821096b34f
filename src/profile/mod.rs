//! Immutable résumé data.
//!
//! A [`Profile`] is built once at startup, either from the built-in literal
//! ([`Profile::builtin`]) or from a profile file ([`load`]), and is never
//! mutated afterwards.

mod builtin;
mod icon;
mod loader;

pub use icon::Icon;
pub use loader::{load, ProfileError};

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Root résumé record.
///
/// Missing text fields deserialise as empty strings and render as empty text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub name: String,
    pub title: String,
    /// Photo location: `http(s)://` URL, `file://` URL or a bare path.
    pub photo_url: String,
    pub about: String,
    pub education: EducationRecord,
    pub contact: ContactInfo,
    pub experience: Vec<ExperienceEntry>,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EducationRecord {
    pub course: String,
    pub institution: String,
    /// Free text, e.g. "2025 - Presente".
    pub duration: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    /// Unique within [`Profile::experience`].
    pub id: u32,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub description: String,
    pub icon: Icon,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactInfo {
    pub email: String,
    pub linkedin: ProfileLink,
    pub github: ProfileLink,
}

/// Display label plus the URL opened on activation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileLink {
    pub label: String,
    pub url: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ContactKind {
    Email,
    LinkedIn,
    GitHub,
}

impl ContactKind {
    pub fn icon(self) -> Icon {
        match self {
            ContactKind::Email => Icon::Mail,
            ContactKind::LinkedIn => Icon::Linkedin,
            ContactKind::GitHub => Icon::Github,
        }
    }
}

/// A resolved contact: what to show and what to open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactTarget {
    pub kind: ContactKind,
    pub label: String,
    pub url: String,
}

impl ContactInfo {
    /// Email, LinkedIn and GitHub targets, in display order.
    pub fn targets(&self) -> [ContactTarget; 3] {
        [
            ContactTarget {
                kind: ContactKind::Email,
                label: self.email.clone(),
                url: format!("mailto:{}", self.email),
            },
            ContactTarget {
                kind: ContactKind::LinkedIn,
                label: self.linkedin.label.clone(),
                url: self.linkedin.url.clone(),
            },
            ContactTarget {
                kind: ContactKind::GitHub,
                label: self.github.label.clone(),
                url: self.github.url.clone(),
            },
        ]
    }
}

impl Profile {
    /// Checks that experience ids are unique; they key the rendered cards.
    ///
    /// Empty text is valid everywhere and renders as empty text.
    pub fn validate(&self) -> Result<(), ProfileError> {
        let mut seen = HashSet::new();
        for entry in &self.experience {
            if !seen.insert(entry.id) {
                return Err(ProfileError::ValidationError {
                    message: format!("Duplicate experience id {}", entry.id),
                });
            }
        }

        Ok(())
    }

    /// Up to two initials taken from the first and last words of the name.
    pub fn initials(&self) -> String {
        let words: Vec<&str> = self.name.split_whitespace().collect();
        let first = words.first().and_then(|w| w.chars().next());
        let last = if words.len() > 1 {
            words.last().and_then(|w| w.chars().next())
        } else {
            None
        };
        first
            .into_iter()
            .chain(last)
            .flat_map(char::to_uppercase)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_target_uses_mailto_scheme() {
        let profile = Profile::builtin();
        let [email, linkedin, github] = profile.contact.targets();
        assert_eq!(email.kind, ContactKind::Email);
        assert_eq!(email.url, format!("mailto:{}", profile.contact.email));
        assert_eq!(email.label, profile.contact.email);
        assert_eq!(linkedin.url, profile.contact.linkedin.url);
        assert_eq!(github.url, profile.contact.github.url);
    }

    #[test]
    fn initials_use_first_and_last_word() {
        let mut profile = Profile::builtin();
        profile.name = "ana maria souza".to_string();
        assert_eq!(profile.initials(), "AS");
        profile.name = "Ana".to_string();
        assert_eq!(profile.initials(), "A");
        profile.name = "   ".to_string();
        assert_eq!(profile.initials(), "");
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let mut profile = Profile::builtin();
        let copy = profile.experience[0].clone();
        profile.experience.push(copy);
        let err = profile.validate().unwrap_err();
        assert!(err.to_string().contains("Duplicate experience id"));
    }

    #[test]
    fn blank_text_is_valid() {
        let mut profile = Profile::builtin();
        profile.name = " ".to_string();
        profile.title.clear();
        profile.contact.email.clear();
        assert!(profile.validate().is_ok());
        assert!(Profile::default().validate().is_ok());
    }
}
