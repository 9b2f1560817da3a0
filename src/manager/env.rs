//! Environment variable overrides

use crate::config::{EnvSource, SettingType};
use serde_json::Value;
use std::sync::Arc;

/// Maps setting keys to env var names and parses their values
pub struct EnvironmentHandler {
    prefix: Option<String>,
    source: Arc<dyn EnvSource>,
}

impl EnvironmentHandler {
    pub fn new(prefix: Option<String>, source: Arc<dyn EnvSource>) -> Self {
        Self { prefix, source }
    }

    /// `{PREFIX}_{CATEGORY}_{KEY}`, upper-cased; `None` when disabled
    pub fn var_name(&self, key: &str) -> Option<String> {
        self.prefix.as_ref().map(|prefix| {
            format!(
                "{}_{}",
                prefix.to_uppercase(),
                key.replace('.', "_").to_uppercase()
            )
        })
    }

    /// Parsed override for `key`, if the variable is set
    ///
    /// Text and select settings keep the raw string when it does not parse
    /// to a JSON string, so `2025` or `true` stay text.
    pub fn get_override(&self, key: &str, setting_type: &SettingType) -> Option<Value> {
        let name = self.var_name(key)?;
        let raw = self.source.var(&name).ok()?;
        let value = parse_env_value(&raw);

        match setting_type {
            SettingType::Text | SettingType::Select if !value.is_string() => Some(Value::String(raw)),
            _ => Some(value),
        }
    }
}

/// JSON first, then booleans, integers, floats; anything else is a string
fn parse_env_value(raw: &str) -> Value {
    if let Ok(value) = serde_json::from_str::<Value>(raw) {
        return value;
    }
    if raw.eq_ignore_ascii_case("true") {
        Value::Bool(true)
    } else if raw.eq_ignore_ascii_case("false") {
        Value::Bool(false)
    } else if let Ok(n) = raw.parse::<i64>() {
        Value::from(n)
    } else if let Some(n) = raw.parse::<f64>().ok().and_then(serde_json::Number::from_f64) {
        Value::Number(n)
    } else {
        Value::String(raw.to_string())
    }
}
