//! Resume content: work experience, education and skills
//!
//! The three sequences are the single source of truth for the CV pages.
//! Order is display order (experience and education are newest first) and
//! is preserved through every serialization the crate does.
//!
//! ```rust
//! let latest = &folio::cv::experiences()[0];
//! assert_eq!(latest.company, "Personal Project");
//! assert_eq!(folio::cv::education().len(), 2);
//! ```

mod data;

use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

static BUILTIN: LazyLock<Cv> = LazyLock::new(|| Cv {
    experiences: data::experiences(),
    education: data::education(),
    skills: data::skills(),
});

/// One line of work history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub company: String,
    /// Free-form date range, e.g. "2016 – 2018"
    pub time: String,
    pub title: String,
    pub location: String,
    pub description: String,
}

impl ExperienceEntry {
    pub fn new(
        company: impl Into<String>,
        time: impl Into<String>,
        title: impl Into<String>,
        location: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            company: company.into(),
            time: time.into(),
            title: title.into(),
            location: location.into(),
            description: description.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub school: String,
    pub time: String,
    pub degree: String,
    pub location: String,
    pub description: String,
}

impl EducationEntry {
    pub fn new(
        school: impl Into<String>,
        time: impl Into<String>,
        degree: impl Into<String>,
        location: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            school: school.into(),
            time: time.into(),
            degree: degree.into(),
            location: location.into(),
            description: description.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillGroup {
    pub title: String,
    pub description: String,
}

impl SkillGroup {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

/// The three CV sequences together
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cv {
    pub experiences: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    pub skills: Vec<SkillGroup>,
}

impl Cv {
    /// The built-in CV, created on first access
    pub fn builtin() -> &'static Cv {
        &BUILTIN
    }

    pub fn is_empty(&self) -> bool {
        self.experiences.is_empty() && self.education.is_empty() && self.skills.is_empty()
    }
}

impl Default for Cv {
    fn default() -> Self {
        Cv::builtin().clone()
    }
}

/// Work history, newest first
pub fn experiences() -> &'static [ExperienceEntry] {
    &BUILTIN.experiences
}

/// Education, newest first
pub fn education() -> &'static [EducationEntry] {
    &BUILTIN.education
}

/// Skill groups in display order
pub fn skills() -> &'static [SkillGroup] {
    &BUILTIN.skills
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_counts() {
        assert_eq!(experiences().len(), 5);
        assert_eq!(education().len(), 2);
        assert_eq!(skills().len(), 8);
        assert!(!Cv::builtin().is_empty());
    }

    #[test]
    fn test_experiences_in_display_order() {
        let companies: Vec<&str> = experiences().iter().map(|e| e.company.as_str()).collect();
        assert_eq!(
            companies,
            [
                "Personal Project",
                "Conservation Volunteers",
                "University Project (COMPSCI 705) · GitHub",
                "Capstone Project (Chung-Ang University)",
                "Hezhong Film",
            ]
        );
    }

    #[test]
    fn test_accessors_share_one_instance() {
        assert!(std::ptr::eq(experiences(), Cv::builtin().experiences.as_slice()));
    }

    #[test]
    fn test_serialized_keys() {
        let value = serde_json::to_value(&education()[0]).unwrap();
        let mut keys: Vec<&str> = value
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        keys.sort_unstable();
        assert_eq!(keys, ["degree", "description", "location", "school", "time"]);
    }

    #[test]
    fn test_json_round_trip_is_order_sensitive() {
        let json = serde_json::to_string(experiences()).unwrap();
        let back: Vec<ExperienceEntry> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, experiences());

        let mut reversed = back.clone();
        reversed.reverse();
        assert_ne!(reversed, experiences());
    }
}
