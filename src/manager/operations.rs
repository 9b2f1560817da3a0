use crate::config::{SettingMetadata, meta};
use crate::error::{Error, Result};
use crate::manager::core::SiteManager;
use crate::site::{Profile, SeoConfig, SiteSettings, SocialLinks, TemplateConfig, site_schema};
use crate::storage::StorageBackend;

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::fmt;

/// One constraint violation found by [`SiteManager::validate_settings`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationIssue {
    /// Setting key ("template.website_url")
    pub key: String,
    pub value: Value,
    pub reason: String,
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} (value: {})", self.key, self.reason, self.value)
    }
}

/// Split "category.name" into its two parts
pub(crate) fn split_key(key: &str) -> Result<(&str, &str)> {
    key.split_once('.')
        .filter(|(category, name)| !category.is_empty() && !name.is_empty())
        .ok_or_else(|| Error::SettingNotFound(key.to_string()))
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn category_mut<'a>(doc: &'a mut Value, category: &str) -> Result<&'a mut Map<String, Value>> {
    doc.get_mut(category)
        .and_then(Value::as_object_mut)
        .ok_or_else(|| Error::Parse(format!("Category {category} is not an object")))
}

/// Check one category section against its typed record
fn check_record(category: &str, section: &Value) -> std::result::Result<(), serde_json::Error> {
    match category {
        "profile" => Profile::deserialize(section).map(drop),
        "social" => SocialLinks::deserialize(section).map(drop),
        "template" => TemplateConfig::deserialize(section).map(drop),
        "seo" => SeoConfig::deserialize(section).map(drop),
        _ => Ok(()),
    }
}

/// Resolved settings document plus the keys that came from env vars
#[derive(Debug, Clone)]
pub(crate) struct Resolved {
    pub doc: Value,
    pub env_keys: Vec<String>,
}

impl<S: StorageBackend> SiteManager<S> {
    /// Effective settings: env var > stored override > built-in default.
    ///
    /// # Errors
    ///
    /// Returns an error if the override file cannot be read or parsed, or in
    /// strict mode if an override is unknown or fails validation.
    pub fn settings(&self) -> Result<SiteSettings> {
        let resolved = self.resolved()?;
        Ok(serde_json::from_value(resolved.doc)?)
    }

    /// Schema with `value` set to the effective value of every setting
    ///
    /// Settings taken from an env var carry `env_override: true`.
    ///
    /// # Errors
    ///
    /// Same as [`Self::settings`].
    pub fn metadata(&self) -> Result<HashMap<String, SettingMetadata>> {
        let resolved = self.resolved()?;
        let mut metadata = site_schema().clone();

        for (key, setting) in &mut metadata {
            let (category, name) = split_key(key)?;
            setting.value = resolved
                .doc
                .get(category)
                .and_then(|c| c.get(name))
                .cloned();
            if resolved.env_keys.contains(key) {
                setting
                    .metadata
                    .insert(meta::ENV_OVERRIDE.to_string(), Value::Bool(true));
            }
        }

        Ok(metadata)
    }

    /// Effective value of one setting
    ///
    /// ```rust,no_run
    /// # let manager = folio::SiteManager::builder("robinhuang.nz").build()?;
    /// let page_size: usize = manager.get("template.postPerPage")?;
    /// # Ok::<(), folio::Error>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Returns `SettingNotFound` for unknown keys, or a JSON error if the
    /// value does not deserialize into `T`.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<T> {
        let (category, name) = split_key(key)?;
        if !site_schema().contains_key(key) {
            return Err(Error::SettingNotFound(key.to_string()));
        }

        let resolved = self.resolved()?;
        let value = resolved
            .doc
            .get(category)
            .and_then(|c| c.get(name))
            .cloned()
            .ok_or_else(|| Error::SettingNotFound(key.to_string()))?;

        Ok(serde_json::from_value(value)?)
    }

    /// Check every effective value against its constraints
    ///
    /// Issues are reported, never raised, in strict mode too; the site
    /// keeps working with whatever was authored. Sorted by key.
    ///
    /// # Errors
    ///
    /// Only if the override file cannot be read or parsed.
    pub fn validate_settings(&self) -> Result<Vec<ValidationIssue>> {
        let resolved = if self.config.strict {
            self.resolve_with(&self.stored_value()?, false)?
        } else {
            self.resolved()?
        };
        let metadata = site_schema();

        let mut keys: Vec<&String> = metadata.keys().collect();
        keys.sort();

        let mut issues = Vec::new();
        for key in keys {
            let (category, name) = split_key(key)?;
            let value = resolved
                .doc
                .get(category)
                .and_then(|c| c.get(name))
                .cloned()
                .unwrap_or(Value::Null);

            if let Err(reason) = metadata[key].validate(&value) {
                issues.push(ValidationIssue {
                    key: key.clone(),
                    value,
                    reason,
                });
            }
        }

        let settings: SiteSettings = serde_json::from_value(resolved.doc)?;
        for (idx, area) in settings.profile.research_areas.iter().enumerate() {
            if area.field.trim().is_empty() {
                issues.push(ValidationIssue {
                    key: "profile.research_areas".to_string(),
                    value: Value::from(area.title.clone()),
                    reason: format!("Research area {idx} has an empty field tag"),
                });
            }
        }

        debug!("Validation found {} issue(s)", issues.len());
        Ok(issues)
    }

    /// Settings resolved in the configured mode, from cache when possible
    pub(crate) fn resolved(&self) -> Result<Resolved> {
        if let Some(resolved) = self.cache_read().resolved.as_ref() {
            return Ok(resolved.clone());
        }

        let stored = self.stored_value()?;
        let resolved = self.resolve_with(&stored, self.config.strict)?;

        let mut cache = self.cache_write();
        // A save may have replaced the document meanwhile
        if cache.stored.as_ref() == Some(&stored) {
            cache.resolved = Some(resolved.clone());
        }
        Ok(resolved)
    }

    /// Merge overrides over the built-in settings
    pub(crate) fn resolve_with(&self, stored: &Value, strict: bool) -> Result<Resolved> {
        let metadata = site_schema();
        check_unknown_keys(stored, metadata, strict)?;

        let mut doc = serde_json::to_value(SiteSettings::builtin())?;
        let mut env_keys = Vec::new();

        let mut keys: Vec<&String> = metadata.keys().collect();
        keys.sort();

        for key in keys {
            let (category, name) = split_key(key)?;

            let setting = &metadata[key];
            let env_value = self.env_handler.get_override(key, &setting.setting_type);
            let (candidate, from_env) = match env_value {
                Some(value) => (value, true),
                None => match stored.get(category).and_then(|c| c.get(name)) {
                    Some(value) => (value.clone(), false),
                    None => continue,
                },
            };

            if apply_override(&mut doc, key, setting, candidate, strict)? && from_env {
                debug!("Setting {key} overridden by env var");
                env_keys.push(key.clone());
            }
        }

        Ok(Resolved { doc, env_keys })
    }
}

/// Put `value` into `doc` if it is usable; returns whether it was applied
fn apply_override(
    doc: &mut Value,
    key: &str,
    setting: &SettingMetadata,
    value: Value,
    strict: bool,
) -> Result<bool> {
    if let Err(reason) = setting.check_type(&value) {
        if strict {
            return Err(Error::TypeMismatch {
                key: key.to_string(),
                expected: setting.setting_type.type_name().to_string(),
                actual: json_type_name(&value).to_string(),
            });
        }
        warn!("Ignoring override for {key}: {reason}");
        return Ok(false);
    }

    if let Err(reason) = setting.validate(&value) {
        if strict {
            return Err(Error::InvalidSettingValue {
                key: key.to_string(),
                reason,
            });
        }
        warn!("Override for {key} kept although it fails validation: {reason}");
    }

    let (category, name) = split_key(key)?;
    let previous = category_mut(doc, category)?.insert(name.to_string(), value);

    // The value must still fit the typed record
    if let Err(e) = check_record(category, &doc[category]) {
        let slot = category_mut(doc, category)?;
        match previous {
            Some(prev) => slot.insert(name.to_string(), prev),
            None => slot.remove(name),
        };
        if strict {
            return Err(Error::InvalidSettingValue {
                key: key.to_string(),
                reason: e.to_string(),
            });
        }
        warn!("Ignoring override for {key}: {e}");
        return Ok(false);
    }

    Ok(true)
}

fn check_unknown_keys(
    stored: &Value,
    metadata: &HashMap<String, SettingMetadata>,
    strict: bool,
) -> Result<()> {
    let Some(categories) = stored.as_object() else {
        return Ok(());
    };

    for (category, fields) in categories {
        let names: Vec<&String> = match fields.as_object() {
            Some(fields) => fields.keys().collect(),
            None => {
                if strict {
                    return Err(Error::Parse(format!("Category {category} is not an object")));
                }
                warn!("Ignoring stored category {category}: not an object");
                continue;
            }
        };

        for name in names {
            let key = format!("{category}.{name}");
            if metadata.contains_key(&key) {
                continue;
            }
            if strict {
                return Err(Error::SettingNotFound(key));
            }
            warn!("Ignoring unknown stored setting {key}");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_key() {
        assert_eq!(split_key("template.base").unwrap(), ("template", "base"));
        assert!(split_key("template").is_err());
        assert!(split_key(".base").is_err());
        assert!(split_key("template.").is_err());
    }

    #[test]
    fn test_issue_display() {
        let issue = ValidationIssue {
            key: "template.website_url".into(),
            value: Value::from("example.org"),
            reason: "Value does not match pattern: ^https?://".into(),
        };
        assert_eq!(
            issue.to_string(),
            "template.website_url: Value does not match pattern: ^https?:// (value: \"example.org\")"
        );
    }
}
