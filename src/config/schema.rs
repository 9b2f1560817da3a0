//! Settings schema trait and metadata types
//!
//! Every site setting is described by a [`SettingMetadata`]: its type, its
//! built-in default, optional constraints and free-form metadata such as a
//! label or the category it belongs to.
//!
//! ```rust
//! use folio::SettingMetadata;
//!
//! let page_size = SettingMetadata::number(5)
//!     .integer()
//!     .min(1.0)
//!     .meta_str("label", "Posts per page")
//!     .meta_str("category", "template");
//!
//! assert!(page_size.validate_schema().is_ok());
//! assert!(page_size.validate(&serde_json::json!(0)).is_err());
//! ```
//!
//! Constraints are descriptive: nothing in the built-in data is checked
//! against them unless the caller asks (see `SiteManager::validate_settings`
//! and strict mode in `SiteConfig`).

use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::collections::HashMap;
use std::sync::{LazyLock, PoisonError, RwLock};

/// Compiled text patterns, keyed by source
static PATTERNS: LazyLock<RwLock<HashMap<String, Regex>>> = LazyLock::new(Default::default);

fn compiled(pattern: &str) -> Result<Regex, String> {
    if let Some(re) = PATTERNS
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .get(pattern)
    {
        return Ok(re.clone());
    }

    let re = Regex::new(pattern).map_err(|e| format!("Invalid regex pattern: {e}"))?;
    PATTERNS
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .insert(pattern.to_string(), re.clone());
    Ok(re)
}

// =============================================================================
// Well-known Metadata Keys
// =============================================================================

/// Metadata keys the library reads or writes itself.
///
/// Anything else (`label`, `description`, `order`, ...) is plain custom
/// metadata set with `.meta_str()` and friends.
pub mod meta {
    /// Section the setting belongs to (`profile`, `social`, ...)
    pub const CATEGORY: &str = "category";
    /// An empty value means "do not render this item"
    pub const HIDE_WHEN_EMPTY: &str = "hide_when_empty";
    /// Populated at runtime when an env var overrides the value
    pub const ENV_OVERRIDE: &str = "env_override";
}

// =============================================================================
// Setting Types
// =============================================================================

/// Kind of value a setting holds
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SettingType {
    /// Boolean flag
    Toggle,
    /// Free text
    #[default]
    Text,
    /// Numeric value
    Number,
    /// One of a fixed set of options
    Select,
    /// Sequence of values (strings or records)
    List,
}

impl SettingType {
    /// JSON type a value of this setting must have
    pub fn type_name(&self) -> &'static str {
        match self {
            SettingType::Toggle => "boolean",
            SettingType::Text | SettingType::Select => "string",
            SettingType::Number => "number",
            SettingType::List => "array",
        }
    }
}

// =============================================================================
// Type-Specific Constraints
// =============================================================================

/// Constraints for Number settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct NumberConstraints {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub step: Option<f64>,
    /// Only whole numbers are accepted
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub integer: bool,
}

/// Constraints for Text settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct TextConstraints {
    /// Regex the value must match
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
}

/// Type-specific constraints
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct SettingConstraints {
    /// Options for Select (required for Select)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<SettingOption>>,

    #[serde(flatten)]
    pub number: NumberConstraints,

    #[serde(flatten)]
    pub text: TextConstraints,
}

// =============================================================================
// Setting Metadata
// =============================================================================

/// Metadata for a single setting
///
/// ```
/// use folio::{SettingMetadata, opt};
///
/// let website = SettingMetadata::text("https://www.robinhuang.nz")
///     .pattern("^https?://")
///     .meta_str("label", "Website URL");
///
/// let theme = SettingMetadata::select("light", vec![
///     opt("light", "Light"),
///     opt("dark", "Dark"),
/// ]);
///
/// assert!(website.validate_schema().is_ok());
/// assert!(theme.validate(&serde_json::json!("sepia")).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettingMetadata {
    #[serde(rename = "type")]
    pub setting_type: SettingType,

    /// Built-in value
    pub default: Value,

    /// Effective value (populated by the manager)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,

    #[serde(flatten)]
    pub constraints: SettingConstraints,

    /// Free-form metadata
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub metadata: HashMap<String, Value>,
}

impl Default for SettingMetadata {
    fn default() -> Self {
        Self {
            setting_type: SettingType::Text,
            default: Value::Null,
            value: None,
            constraints: SettingConstraints::default(),
            metadata: HashMap::new(),
        }
    }
}

impl SettingMetadata {
    // =========================================================================
    // Constructors
    // =========================================================================

    /// Create a text setting
    pub fn text(default: impl Into<String>) -> Self {
        Self {
            setting_type: SettingType::Text,
            default: Value::String(default.into()),
            ..Default::default()
        }
    }

    /// Create a number setting
    pub fn number(default: impl Into<Value>) -> Self {
        Self {
            setting_type: SettingType::Number,
            default: default.into(),
            ..Default::default()
        }
    }

    /// Create a boolean setting
    pub fn toggle(default: bool) -> Self {
        Self {
            setting_type: SettingType::Toggle,
            default: Value::Bool(default),
            ..Default::default()
        }
    }

    /// Create a select setting; options are required up front.
    pub fn select(default: impl Into<String>, options: Vec<SettingOption>) -> Self {
        Self {
            setting_type: SettingType::Select,
            default: Value::String(default.into()),
            constraints: SettingConstraints {
                options: Some(options),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    /// Create a list setting from any serializable items
    pub fn list<T: Serialize>(default: &[T]) -> Self {
        Self {
            setting_type: SettingType::List,
            default: json!(default),
            ..Default::default()
        }
    }

    // =========================================================================
    // Custom metadata
    // =========================================================================

    #[must_use]
    pub fn meta_str(mut self, key: &str, value: impl Into<String>) -> Self {
        self.metadata
            .insert(key.to_string(), Value::String(value.into()));
        self
    }

    #[must_use]
    pub fn meta_bool(mut self, key: &str, value: bool) -> Self {
        self.metadata.insert(key.to_string(), Value::Bool(value));
        self
    }

    #[must_use]
    pub fn meta_num(mut self, key: &str, value: impl Into<f64>) -> Self {
        self.metadata.insert(key.to_string(), json!(value.into()));
        self
    }

    #[must_use]
    pub fn meta(mut self, key: &str, value: Value) -> Self {
        self.metadata.insert(key.to_string(), value);
        self
    }

    pub fn get_meta(&self, key: &str) -> Option<&Value> {
        self.metadata.get(key)
    }

    pub fn get_meta_str(&self, key: &str) -> Option<&str> {
        self.metadata.get(key).and_then(|v| v.as_str())
    }

    pub fn get_meta_bool(&self, key: &str) -> Option<bool> {
        self.metadata.get(key).and_then(|v| v.as_bool())
    }

    pub fn get_meta_num(&self, key: &str) -> Option<f64> {
        self.metadata.get(key).and_then(|v| v.as_f64())
    }

    // =========================================================================
    // Constraint setters
    // =========================================================================

    #[must_use]
    pub fn min(mut self, val: f64) -> Self {
        self.constraints.number.min = Some(val);
        self
    }

    #[must_use]
    pub fn max(mut self, val: f64) -> Self {
        self.constraints.number.max = Some(val);
        self
    }

    #[must_use]
    pub fn step(mut self, val: f64) -> Self {
        self.constraints.number.step = Some(val);
        self
    }

    /// Accept whole numbers only
    #[must_use]
    pub fn integer(mut self) -> Self {
        self.constraints.number.integer = true;
        self
    }

    /// Regex the text value must match
    #[must_use]
    pub fn pattern(mut self, pattern: impl Into<String>) -> Self {
        self.constraints.text.pattern = Some(pattern.into());
        self
    }

    /// Mark the setting as "empty means hidden"
    #[must_use]
    pub fn hide_when_empty(self) -> Self {
        self.meta_bool(meta::HIDE_WHEN_EMPTY, true)
    }

    pub fn is_hidden_when_empty(&self) -> bool {
        self.get_meta_bool(meta::HIDE_WHEN_EMPTY).unwrap_or(false)
    }

    /// Category from metadata, if any
    pub fn category(&self) -> Option<&str> {
        self.get_meta_str(meta::CATEGORY)
    }

    // =========================================================================
    // Validation
    // =========================================================================

    /// Check only that the JSON type of `value` fits this setting
    pub fn check_type(&self, value: &Value) -> Result<(), String> {
        let ok = match self.setting_type {
            SettingType::Toggle => value.is_boolean(),
            SettingType::Number => value.is_number(),
            SettingType::Text | SettingType::Select => value.is_string(),
            SettingType::List => value.is_array(),
        };
        if ok {
            Ok(())
        } else {
            Err(format!("Value must be a {}", self.setting_type.type_name()))
        }
    }

    /// Validate a value against type and constraints
    pub fn validate(&self, value: &Value) -> Result<(), String> {
        self.check_type(value)?;

        match self.setting_type {
            SettingType::Number => {
                let num = value.as_f64().unwrap_or_default();

                if self.constraints.number.integer && !(value.is_i64() || value.is_u64()) {
                    return Err("Value must be a whole number".to_string());
                }
                if let Some(min) = self.constraints.number.min {
                    if num < min {
                        return Err(format!("Value must be at least {min}"));
                    }
                }
                if let Some(max) = self.constraints.number.max {
                    if num > max {
                        return Err(format!("Value must be at most {max}"));
                    }
                }
            }
            SettingType::Text => {
                if let Some(ref pattern) = self.constraints.text.pattern {
                    let text = value.as_str().unwrap_or_default();
                    let re = compiled(pattern)?;

                    if !re.is_match(text) {
                        return Err(format!("Value does not match pattern: {pattern}"));
                    }
                }
            }
            SettingType::Select => {
                if let Some(ref options) = self.constraints.options {
                    if !options.iter().any(|opt| opt.value == *value) {
                        return Err("Value must be one of the available options".to_string());
                    }
                }
            }
            SettingType::Toggle | SettingType::List => {}
        }
        Ok(())
    }

    /// Validate the metadata definition itself
    ///
    /// Select has options, `min <= max`, step is positive, the pattern
    /// compiles and is non-empty, and the default passes [`Self::validate`].
    pub fn validate_schema(&self) -> Result<(), String> {
        if self.setting_type == SettingType::Select && self.constraints.options.is_none() {
            return Err("Select type must have options defined".to_string());
        }

        if let (Some(min), Some(max)) = (self.constraints.number.min, self.constraints.number.max) {
            if min > max {
                return Err(format!("min ({min}) cannot be greater than max ({max})"));
            }
        }

        if let Some(step) = self.constraints.number.step {
            if step <= 0.0 {
                return Err(format!("step must be positive, got {step}"));
            }
        }

        if let Some(ref pattern) = self.constraints.text.pattern {
            if pattern.is_empty() {
                return Err("Pattern cannot be empty string".to_string());
            }
            compiled(pattern)?;
        }

        self.validate(&self.default)
            .map_err(|e| format!("Default value is invalid: {e}"))
    }
}

// =============================================================================
// Setting Option
// =============================================================================

/// Option for Select settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SettingOption {
    pub value: Value,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl SettingOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: Value::String(value.into()),
            label: label.into(),
            description: None,
        }
    }

    pub fn with_description(
        value: impl Into<String>,
        label: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            value: Value::String(value.into()),
            label: label.into(),
            description: Some(description.into()),
        }
    }
}

// =============================================================================
// Settings Schema Trait
// =============================================================================

/// Types that describe their fields with [`SettingMetadata`]
///
/// Keys use `"category.field"`, where both parts are the serialized names.
pub trait SettingsSchema: Default + Serialize + for<'de> Deserialize<'de> {
    fn get_metadata() -> HashMap<String, SettingMetadata>;

    /// Categories in sorted order
    #[must_use]
    fn get_categories() -> Vec<String> {
        let metadata = Self::get_metadata();
        let mut categories: Vec<String> = metadata
            .values()
            .filter_map(|m| m.category().map(String::from))
            .collect();
        categories.sort();
        categories.dedup();
        categories
    }
}

// =============================================================================
// Helpers
// =============================================================================

/// Shorthand for [`SettingOption::new`]
pub fn opt(value: impl Into<String>, label: impl Into<String>) -> SettingOption {
    SettingOption::new(value, label)
}

/// Build a metadata `HashMap` from `key => metadata` pairs
///
/// ```rust
/// use folio::{settings, SettingMetadata};
///
/// let map = settings! {
///     "seo.default_title" => SettingMetadata::text("Portfolio"),
///     "template.menu_left" => SettingMetadata::toggle(false),
/// };
/// assert_eq!(map.len(), 2);
/// ```
#[macro_export]
macro_rules! settings {
    ($($key:expr => $value:expr),* $(,)?) => {{
        let mut map = std::collections::HashMap::new();
        $(
            map.insert($key.to_string(), $value);
        )*
        map
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metadata_builder() {
        let setting = SettingMetadata::toggle(true)
            .meta_str("label", "Page transitions")
            .meta_str(meta::CATEGORY, "template")
            .meta_num("order", 2.0);

        assert_eq!(setting.setting_type, SettingType::Toggle);
        assert_eq!(setting.default, Value::Bool(true));
        assert_eq!(setting.get_meta_str("label"), Some("Page transitions"));
        assert_eq!(setting.category(), Some("template"));
        assert_eq!(setting.get_meta_num("order"), Some(2.0));
    }

    #[test]
    fn test_integer_number_validation() {
        let setting = SettingMetadata::number(200).integer().min(1.0);

        assert!(setting.validate(&json!(200)).is_ok());
        assert!(setting.validate(&json!(1)).is_ok());
        assert!(setting.validate(&json!(0)).is_err());
        assert!(setting.validate(&json!(12.5)).is_err());
        assert!(setting.validate(&json!("200")).is_err());
    }

    #[test]
    fn test_url_pattern_validation() {
        let setting = SettingMetadata::text("https://example.com").pattern("^https?://");

        assert!(setting.validate(&json!("http://example.com")).is_ok());
        assert!(setting.validate(&json!("https://example.com/a")).is_ok());

        let err = setting.validate(&json!("www.example.com")).unwrap_err();
        assert_eq!(err, "Value does not match pattern: ^https?://");
    }

    #[test]
    fn test_check_type_ignores_constraints() {
        let setting = SettingMetadata::text("https://example.com").pattern("^https?://");

        assert!(setting.check_type(&json!("relative/path")).is_ok());
        assert_eq!(
            setting.check_type(&json!(42)).unwrap_err(),
            "Value must be a string"
        );
    }

    #[test]
    fn test_select_validation() {
        let setting = SettingMetadata::select("light", vec![opt("light", "Light"), opt("dark", "Dark")]);

        assert!(setting.validate(&json!("dark")).is_ok());
        assert!(setting.validate(&json!("sepia")).is_err());
    }

    #[test]
    fn test_list_of_records() {
        let setting = SettingMetadata::list(&[json!({"title": "Backend", "field": "backend"})]);

        assert_eq!(setting.setting_type, SettingType::List);
        assert!(setting.validate(&json!([])).is_ok());
        assert!(setting.validate(&json!({"title": "x"})).is_err());
    }

    #[test]
    fn test_hide_when_empty_flag() {
        let setting = SettingMetadata::text("").hide_when_empty();
        assert!(setting.is_hidden_when_empty());
        assert!(!SettingMetadata::text("").is_hidden_when_empty());
    }

    #[test]
    fn test_schema_validation() {
        assert!(SettingMetadata::number(5).min(1.0).max(50.0).validate_schema().is_ok());
        assert!(SettingMetadata::number(5).min(10.0).max(1.0).validate_schema().is_err());
        assert!(SettingMetadata::number(5).step(0.0).validate_schema().is_err());
        assert!(SettingMetadata::text("x").pattern("").validate_schema().is_err());
        assert!(SettingMetadata::text("x").pattern("(").validate_schema().is_err());

        // Default must satisfy its own constraints
        let bad_default = SettingMetadata::text("www.example.com").pattern("^https?://");
        assert!(bad_default.validate_schema().is_err());

        let mut select_without_options = SettingMetadata::text("x");
        select_without_options.setting_type = SettingType::Select;
        assert!(select_without_options.validate_schema().is_err());
    }

    #[test]
    fn test_serialization_keeps_constraints() {
        let setting = SettingMetadata::number(5)
            .integer()
            .min(1.0)
            .meta_str("label", "Posts per page");

        let json = serde_json::to_value(&setting).unwrap();
        assert_eq!(json["type"], "number");
        assert_eq!(json["integer"], true);
        assert_eq!(json["min"], 1.0);

        let back: SettingMetadata = serde_json::from_value(json).unwrap();
        assert_eq!(back, setting);
    }

    #[test]
    fn test_compiled_patterns_are_reused() {
        let email = SettingMetadata::text("").pattern(r"^([^@\s]+@[^@\s]+\.[^@\s]+)?$");
        for _ in 0..3 {
            assert!(email.validate(&json!("contact@robinhuang.nz")).is_ok());
            assert!(email.validate(&json!("contact")).is_err());
        }
        assert!(compiled("(").is_err());
        assert!(compiled("^https?://").unwrap().is_match("https://www.robinhuang.nz"));
    }
}
