#![cfg(feature = "yaml")]

use folio::{Cv, SiteData, SiteManager, StorageBackend, YamlStorage, cv};
use serde_json::json;
use tempfile::TempDir;

#[test]
fn test_yaml_overrides_round_trip() {
    let temp_dir = TempDir::new().unwrap();
    let manager = SiteManager::builder("test-site")
        .data_dir(temp_dir.path())
        .with_storage(YamlStorage::new())
        .build()
        .unwrap();

    manager
        .save_setting("social", "orcid", &json!("https://orcid.org/0000-0000-0000-0000"))
        .unwrap();

    let content = std::fs::read_to_string(temp_dir.path().join("site.yaml")).unwrap();
    assert!(content.contains("orcid:"));

    manager.invalidate_cache();
    let settings = manager.settings().unwrap();
    assert!(!settings.social.orcid.is_empty());
    assert_eq!(settings.social.visible().len(), 4);
}

#[test]
fn test_yaml_hand_written_overrides() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(
        temp_dir.path().join("site.yaml"),
        "template:\n  base: /portfolio\n  transitions: false\n",
    )
    .unwrap();

    let manager = SiteManager::builder("test-site")
        .data_dir(temp_dir.path())
        .with_storage(YamlStorage::new())
        .build()
        .unwrap();

    let settings = manager.settings().unwrap();
    assert_eq!(settings.template.link("cv"), "/portfolio/cv");
    assert!(!settings.template.transitions);
}

#[test]
fn test_yaml_round_trip_keeps_order() {
    let storage = YamlStorage::new();

    let text = storage.serialize(Cv::builtin()).unwrap();
    let back: Cv = storage.deserialize(&text).unwrap();
    assert_eq!(back.experiences.as_slice(), cv::experiences());
    assert_eq!(back.education.as_slice(), cv::education());
    assert_eq!(back.skills.as_slice(), cv::skills());

    let data = SiteData::builtin();
    let text = storage.serialize(&data).unwrap();
    let back: SiteData = storage.deserialize(&text).unwrap();
    assert_eq!(back, data);
    assert_eq!(back.cv.experiences.as_slice(), cv::experiences());

    let fields: Vec<&str> = back.settings.profile.research_fields().collect();
    assert_eq!(fields, vec!["backend", "data", "cloud", "interactive", "hci"]);
}
