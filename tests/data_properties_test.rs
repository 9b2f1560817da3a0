//! Properties every build of the built-in data must hold

mod common;

use folio::{Cv, SiteData, SiteSettings, SocialPlatform, cv, site};
use std::collections::HashSet;

#[test]
fn test_experiences_fully_populated() {
    let experiences = cv::experiences();
    assert_eq!(experiences.len(), 5);

    for entry in experiences {
        for (name, value) in [
            ("company", &entry.company),
            ("time", &entry.time),
            ("title", &entry.title),
            ("location", &entry.location),
            ("description", &entry.description),
        ] {
            assert!(!value.is_empty(), "{name} empty for {}", entry.company);
        }
    }
}

#[test]
fn test_experiences_newest_first() {
    let companies: Vec<&str> = cv::experiences().iter().map(|e| e.company.as_str()).collect();
    assert_eq!(companies.first(), Some(&"Personal Project"));
    assert_eq!(companies.last(), Some(&"Hezhong Film"));
    assert_eq!(cv::experiences()[4].time, "2016 – 2018");
}

#[test]
fn test_education_and_skills_populated() {
    assert_eq!(cv::education().len(), 2);
    for entry in cv::education() {
        assert!(!entry.school.is_empty());
        assert!(!entry.degree.is_empty());
        assert!(!entry.time.is_empty());
    }

    assert_eq!(cv::skills().len(), 8);
    for group in cv::skills() {
        assert!(!group.title.is_empty());
        assert!(!group.description.is_empty());
    }
}

#[test]
fn test_social_sentinel_values() {
    let social = site::social();

    let visible: Vec<SocialPlatform> = social.visible().into_iter().map(|(p, _)| p).collect();
    assert_eq!(
        visible,
        vec![
            SocialPlatform::Email,
            SocialPlatform::Linkedin,
            SocialPlatform::Github
        ]
    );

    for platform in [
        SocialPlatform::X,
        SocialPlatform::Bluesky,
        SocialPlatform::Gitlab,
        SocialPlatform::Scholar,
        SocialPlatform::Inspire,
        SocialPlatform::Arxiv,
        SocialPlatform::Orcid,
    ] {
        assert!(social.is_hidden(platform), "{platform} should be hidden");
        assert_eq!(social.href(platform), None);
    }

    assert_eq!(
        social.href(SocialPlatform::Email).as_deref(),
        Some("mailto:contact@robinhuang.nz")
    );
}

#[test]
fn test_template_values() {
    let template = site::template();
    assert!(template.has_absolute_url());
    assert!(
        template.website_url.starts_with("http://") || template.website_url.starts_with("https://")
    );
    assert_eq!(template.excerpt_length, 200);
    assert_eq!(template.post_per_page, 5);
    assert!(template.post_per_page >= 1);
    assert!(template.base.is_empty());
    assert_eq!(template.link("/cv"), "/cv");
}

#[test]
fn test_research_areas() {
    let profile = site::profile();
    assert_eq!(profile.research_areas.len(), 5);

    let allowed: HashSet<&str> = ["backend", "data", "cloud", "interactive", "hci"].into();
    let fields: Vec<&str> = profile.research_fields().collect();
    assert_eq!(fields, vec!["backend", "data", "cloud", "interactive", "hci"]);
    for field in &fields {
        assert!(allowed.contains(field));
    }

    for area in &profile.research_areas {
        assert!(!area.title.is_empty());
        assert!(!area.description.is_empty());
    }
    assert_eq!(profile.areas_in("cloud").count(), 1);
}

#[test]
fn test_serialized_key_names() {
    let value = serde_json::to_value(SiteSettings::builtin()).unwrap();

    assert!(value["profile"]["fullName"].is_string());
    assert!(value["profile"]["research_areas"].is_array());
    assert_eq!(value["template"]["excerptLength"], 200);
    assert_eq!(value["template"]["postPerPage"], 5);
    assert!(value["template"]["lightTheme"].is_string());
    assert!(value["template"]["darkTheme"].is_string());
    assert!(value["template"].get("excerpt_length").is_none());
}

#[test]
fn test_round_trip_preserves_order() {
    let cv_json = serde_json::to_string(Cv::builtin()).unwrap();
    let cv: Cv = serde_json::from_str(&cv_json).unwrap();
    assert_eq!(&cv, Cv::builtin());
    assert_eq!(cv.experiences.as_slice(), cv::experiences());

    let settings_json = serde_json::to_string(SiteSettings::builtin()).unwrap();
    let settings: SiteSettings = serde_json::from_str(&settings_json).unwrap();
    assert_eq!(&settings, SiteSettings::builtin());

    let export = serde_json::to_value(SiteData::builtin()).unwrap();
    let mut keys: Vec<&String> = export.as_object().unwrap().keys().collect();
    keys.sort();
    assert_eq!(
        keys,
        ["education", "experiences", "profile", "seo", "skills", "social", "template"]
    );
}

#[test]
fn test_builtin_data_passes_validation() {
    let fixture = common::TestFixture::strict();
    assert!(fixture.manager.validate_settings().unwrap().is_empty());
    assert_eq!(&fixture.manager.settings().unwrap(), SiteSettings::builtin());
}
