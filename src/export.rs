//! The complete data surface handed to the presentation layer

use serde::{Deserialize, Serialize};

use crate::cv::Cv;
use crate::site::SiteSettings;

/// Site settings and CV under their export names:
/// `profile`, `social`, `template`, `seo`, `experiences`, `education`, `skills`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteData {
    #[serde(flatten)]
    pub settings: SiteSettings,
    #[serde(flatten)]
    pub cv: Cv,
}

impl SiteData {
    pub fn new(settings: SiteSettings, cv: Cv) -> Self {
        Self { settings, cv }
    }

    /// Built-in settings and CV, without any overrides
    pub fn builtin() -> Self {
        Self::new(SiteSettings::builtin().clone(), Cv::builtin().clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_names() {
        let value = serde_json::to_value(SiteData::builtin()).unwrap();
        let mut keys: Vec<&str> = value
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        keys.sort_unstable();

        assert_eq!(
            keys,
            ["education", "experiences", "profile", "seo", "skills", "social", "template"]
        );
    }

    #[test]
    fn test_round_trip() {
        let data = SiteData::builtin();
        let json = serde_json::to_string(&data).unwrap();
        let back: SiteData = serde_json::from_str(&json).unwrap();
        assert_eq!(back, data);
    }
}
