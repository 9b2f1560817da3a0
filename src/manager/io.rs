use crate::cv::Cv;
use crate::error::{Error, Result};
use crate::export::SiteData;
use crate::manager::core::SiteManager;
use crate::manager::operations::split_key;
use crate::site::{SiteSettings, site_schema};
use crate::storage::StorageBackend;

use log::{debug, info};
use serde_json::{Value, json};
use std::path::Path;

impl<S: StorageBackend> SiteManager<S> {
    /// Save one override.
    ///
    /// The value is validated first. A value equal to the built-in default
    /// removes the key from the file, and empty categories are dropped, so
    /// the file only ever lists real customisations.
    ///
    /// # Errors
    ///
    /// - `SettingNotFound` for keys outside the schema
    /// - `InvalidSettingValue` when validation fails
    /// - I/O errors from writing the file
    pub fn save_setting(&self, category: &str, key: &str, value: &Value) -> Result<()> {
        let full_key = format!("{category}.{key}");
        let setting = site_schema()
            .get(&full_key)
            .ok_or_else(|| Error::SettingNotFound(full_key.clone()))?;

        setting
            .validate(value)
            .map_err(|reason| Error::InvalidSettingValue {
                key: full_key.clone(),
                reason,
            })?;

        let mut probe = serde_json::to_value(SiteSettings::builtin())?;
        if let Some(section) = probe.get_mut(category).and_then(Value::as_object_mut) {
            section.insert(key.to_string(), value.clone());
        }
        serde_json::from_value::<SiteSettings>(probe).map_err(|e| Error::InvalidSettingValue {
            key: full_key.clone(),
            reason: e.to_string(),
        })?;

        let mut stored = self.stored_value()?;
        let stored_obj = stored
            .as_object_mut()
            .ok_or_else(|| Error::Parse("Settings root is not an object".into()))?;

        let category_obj = stored_obj
            .entry(category.to_string())
            .or_insert_with(|| json!({}))
            .as_object_mut()
            .ok_or_else(|| Error::Parse(format!("Category {category} is not an object")))?;

        if *value == setting.default {
            category_obj.remove(key);
            debug!("Setting {full_key} equals the default, removed from store");
        } else {
            category_obj.insert(key.to_string(), value.clone());
        }

        if category_obj.is_empty() {
            stored_obj.remove(category);
        }

        self.config
            .storage
            .write(&self.config.settings_path(), &stored)?;
        self.cache_write().store(stored);

        info!("Setting {full_key} saved");
        Ok(())
    }

    /// Reset one setting to its built-in default; returns the default.
    ///
    /// # Errors
    ///
    /// `SettingNotFound` for unknown keys, or I/O errors.
    pub fn reset_setting(&self, category: &str, key: &str) -> Result<Value> {
        let full_key = format!("{category}.{key}");
        let default = site_schema()
            .get(&full_key)
            .map(|m| m.default.clone())
            .ok_or_else(|| Error::SettingNotFound(full_key.clone()))?;

        self.save_setting(category, key, &default)?;

        info!("Setting {full_key} reset to default");
        Ok(default)
    }

    /// Drop every stored override
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn reset_all(&self) -> Result<()> {
        let empty = json!({});
        self.config
            .storage
            .write(&self.config.settings_path(), &empty)?;
        self.cache_write().store(empty);

        info!("All settings reset to defaults");
        Ok(())
    }

    /// The CV: the replacement file when present, otherwise the built-in one.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or is missing
    /// a field.
    pub fn cv(&self) -> Result<Cv> {
        let path = self.config.cv_path();
        if !path.exists() {
            return Ok(Cv::builtin().clone());
        }

        let cv: Cv = self.config.storage.read(&path)?;
        info!(
            "Loaded CV from {} ({} experiences, {} education, {} skills)",
            path.display(),
            cv.experiences.len(),
            cv.education.len(),
            cv.skills.len()
        );
        Ok(cv)
    }

    /// Effective settings and CV together
    ///
    /// # Errors
    ///
    /// Same as [`Self::settings`] and [`Self::cv`].
    pub fn export(&self) -> Result<SiteData> {
        Ok(SiteData::new(self.settings()?, self.cv()?))
    }

    /// Write [`Self::export`] to `path` in the configured format
    ///
    /// # Errors
    ///
    /// Resolution errors, or I/O errors while writing.
    pub fn export_to(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let data = self.export()?;
        self.config.storage.write(path, &data)?;
        info!("Exported site data to {}", path.display());
        Ok(())
    }

    /// Stored override document, from cache or disk
    pub(crate) fn stored_value(&self) -> Result<Value> {
        if let Some(value) = self.cache_read().stored.as_ref() {
            return Ok(value.clone());
        }

        let loaded = self.load_from_disk()?;
        self.cache_write().store(loaded.clone());
        Ok(loaded)
    }

    fn load_from_disk(&self) -> Result<Value> {
        let path = self.config.settings_path();
        if !path.exists() {
            debug!("No override file at {}, using built-in settings", path.display());
            return Ok(json!({}));
        }

        let value: Value = self.config.storage.read(&path)?;
        if !value.is_object() {
            return Err(Error::Parse(format!(
                "Settings root in '{}' is not an object",
                path.display()
            )));
        }

        let count: usize = value
            .as_object()
            .map(|o| o.values().filter_map(Value::as_object).map(|c| c.len()).sum())
            .unwrap_or_default();
        info!("Loaded {count} override(s) from {}", path.display());
        Ok(value)
    }

    /// Stored override for a key, if any
    pub fn stored_override(&self, key: &str) -> Result<Option<Value>> {
        let (category, name) = split_key(key)?;
        let stored = self.stored_value()?;
        Ok(stored.get(category).and_then(|c| c.get(name)).cloned())
    }
}
