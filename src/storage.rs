//! Storage backend trait and implementations
//!
//! JSON is always available; TOML and YAML sit behind the `toml` and
//! `yaml` features.

use crate::error::{Error, Result};
use log::debug;
use serde::{Serialize, de::DeserializeOwned};
use std::path::Path;

/// A serialization format plus file I/O
pub trait StorageBackend: Clone + Send + Sync {
    /// File extension for this format (e.g. "json")
    fn extension(&self) -> &str;

    fn serialize<T: Serialize>(&self, data: &T) -> Result<String>;

    fn deserialize<T: DeserializeOwned>(&self, content: &str) -> Result<T>;

    /// Read and deserialize a file
    fn read<T: DeserializeOwned>(&self, path: &Path) -> Result<T> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        self.deserialize(&content)
    }

    /// Serialize and write a file
    ///
    /// Writes a `.tmp` sibling first and renames it over the target.
    fn write<T: Serialize>(&self, path: &Path, data: &T) -> Result<()> {
        let content = self.serialize(data)?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| Error::DirectoryCreate {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let file_name = path.file_name().ok_or_else(|| {
            Error::Config(format!(
                "Invalid path '{}': must have a filename",
                path.display()
            ))
        })?;
        let mut temp_filename = file_name.to_os_string();
        temp_filename.push(".tmp");
        let temp_path = path.with_file_name(temp_filename);

        std::fs::write(&temp_path, &content).map_err(|e| Error::FileWrite {
            path: temp_path.clone(),
            source: e,
        })?;

        std::fs::rename(&temp_path, path).map_err(|e| Error::FileWrite {
            path: path.to_path_buf(),
            source: e,
        })?;

        debug!("Wrote {} bytes to {}", content.len(), path.display());
        Ok(())
    }
}

// =============================================================================
// JSON
// =============================================================================

/// JSON storage (default)
#[derive(Debug, Clone, Default)]
pub struct JsonStorage {
    pretty: bool,
}

impl JsonStorage {
    /// Pretty-printed JSON
    pub fn new() -> Self {
        Self { pretty: true }
    }

    /// Single-line JSON
    pub fn compact() -> Self {
        Self { pretty: false }
    }
}

impl StorageBackend for JsonStorage {
    fn extension(&self) -> &str {
        "json"
    }

    fn serialize<T: Serialize>(&self, data: &T) -> Result<String> {
        if self.pretty {
            serde_json::to_string_pretty(data).map_err(Error::from)
        } else {
            serde_json::to_string(data).map_err(Error::from)
        }
    }

    fn deserialize<T: DeserializeOwned>(&self, content: &str) -> Result<T> {
        serde_json::from_str(content).map_err(Error::from)
    }
}

// =============================================================================
// TOML
// =============================================================================

/// TOML storage
#[cfg(feature = "toml")]
#[derive(Debug, Clone, Default)]
pub struct TomlStorage;

#[cfg(feature = "toml")]
impl TomlStorage {
    pub fn new() -> Self {
        Self
    }
}

#[cfg(feature = "toml")]
impl StorageBackend for TomlStorage {
    fn extension(&self) -> &str {
        "toml"
    }

    fn serialize<T: Serialize>(&self, data: &T) -> Result<String> {
        toml::to_string_pretty(data).map_err(|e| Error::Parse(format!("TOML serialize: {e}")))
    }

    fn deserialize<T: DeserializeOwned>(&self, content: &str) -> Result<T> {
        toml::from_str(content).map_err(|e| Error::Parse(format!("TOML: {e}")))
    }
}

// =============================================================================
// YAML
// =============================================================================

/// YAML storage
#[cfg(feature = "yaml")]
#[derive(Debug, Clone, Default)]
pub struct YamlStorage;

#[cfg(feature = "yaml")]
impl YamlStorage {
    pub fn new() -> Self {
        Self
    }
}

#[cfg(feature = "yaml")]
impl StorageBackend for YamlStorage {
    fn extension(&self) -> &str {
        "yaml"
    }

    fn serialize<T: Serialize>(&self, data: &T) -> Result<String> {
        serde_yaml::to_string(data).map_err(|e| Error::Parse(format!("YAML serialize: {e}")))
    }

    fn deserialize<T: DeserializeOwned>(&self, content: &str) -> Result<T> {
        serde_yaml::from_str(content).map_err(|e| Error::Parse(format!("YAML: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cv::{self, SkillGroup};
    use tempfile::tempdir;

    #[test]
    fn test_json_serialize_pretty() {
        let storage = JsonStorage::new();
        let json = storage.serialize(&cv::skills()[0]).unwrap();

        assert!(json.contains('\n'));
        assert!(json.contains("\"title\": \"Programming Languages\""));
    }

    #[test]
    fn test_json_serialize_compact() {
        let storage = JsonStorage::compact();
        let json = storage.serialize(&cv::skills()[0]).unwrap();

        assert!(!json.contains('\n'));
    }

    #[test]
    fn test_write_then_read_creates_parents() {
        let storage = JsonStorage::new();
        let dir = tempdir().unwrap();
        let path = dir.path().join("content/skills.json");

        storage.write(&path, &cv::skills()).unwrap();
        let loaded: Vec<SkillGroup> = storage.read(&path).unwrap();

        assert_eq!(loaded, cv::skills());
        assert!(!dir.path().join("content/skills.json.tmp").exists());
    }

    #[test]
    fn test_read_nonexistent_file() {
        let storage = JsonStorage::new();
        let result: Result<Vec<SkillGroup>> = storage.read(Path::new("/nonexistent/skills.json"));

        assert!(matches!(result.unwrap_err(), Error::FileRead { .. }));
    }

    #[test]
    fn test_missing_field_is_rejected() {
        let storage = JsonStorage::new();
        let result: Result<SkillGroup> = storage.deserialize(r#"{"title": "Awards"}"#);

        assert!(matches!(result.unwrap_err(), Error::Json(_)));
    }

    #[cfg(feature = "toml")]
    #[test]
    fn test_toml_extension() {
        assert_eq!(TomlStorage::new().extension(), "toml");
    }

    #[cfg(feature = "yaml")]
    #[test]
    fn test_yaml_extension() {
        assert_eq!(YamlStorage::new().extension(), "yaml");
    }
}
