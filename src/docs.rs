//! Markdown reference for a settings schema

use crate::config::{SettingMetadata, SettingType, SettingsSchema};
use std::collections::HashMap;
use std::fmt::Write;

/// Options for [`generate_docs`]
#[derive(Debug, Clone, Default)]
pub struct DocsConfig {
    pub title: Option<String>,
    pub description: Option<String>,
    /// One `##` section per category
    pub group_by_category: bool,
}

impl DocsConfig {
    #[must_use]
    pub fn new() -> Self {
        Self {
            group_by_category: true,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_description(mut self, desc: impl Into<String>) -> Self {
        self.description = Some(desc.into());
        self
    }

    #[must_use]
    pub fn flat(mut self) -> Self {
        self.group_by_category = false;
        self
    }
}

/// Markdown reference for every setting of `T`
#[must_use]
pub fn generate_docs<T: SettingsSchema>(config: DocsConfig) -> String {
    generate_docs_from_metadata(&T::get_metadata(), config)
}

/// Same as [`generate_docs`] from a metadata map
#[must_use]
pub fn generate_docs_from_metadata<H: std::hash::BuildHasher>(
    metadata: &HashMap<String, SettingMetadata, H>,
    config: DocsConfig,
) -> String {
    let mut out = String::new();

    let title = config
        .title
        .unwrap_or_else(|| "Site Settings Reference".to_string());
    let _ = writeln!(out, "# {title}\n");

    if let Some(desc) = config.description {
        let _ = writeln!(out, "{desc}\n");
    }

    let mut entries: Vec<_> = metadata.iter().collect();
    // category, then order, then key
    entries.sort_by_key(|(key, setting)| {
        (
            setting.category().unwrap_or("general").to_string(),
            setting.get_meta_num("order").map_or(u32::MAX, |n| n as u32),
            (*key).clone(),
        )
    });

    if config.group_by_category {
        let mut current: Option<&str> = None;
        for (key, setting) in &entries {
            let category = setting.category().unwrap_or("general");
            if current != Some(category) {
                let _ = writeln!(out, "\n## {}\n", capitalize(category));
                current = Some(category);
            }
            format_setting(&mut out, key, setting);
        }
    } else {
        out.push_str("## Settings\n\n");
        for (key, setting) in &entries {
            format_setting(&mut out, key, setting);
        }
    }

    out
}

fn format_setting(out: &mut String, key: &str, setting: &SettingMetadata) {
    let _ = writeln!(out, "### `{key}`\n");

    if let Some(label) = setting.get_meta_str("label") {
        let _ = writeln!(out, "**{label}**\n");
    }
    if setting.is_hidden_when_empty() {
        out.push_str("Hidden when empty\n\n");
    }
    if let Some(desc) = setting.get_meta_str("description") {
        let _ = writeln!(out, "{desc}\n");
    }

    out.push_str("| Property | Value |\n");
    out.push_str("|----------|-------|\n");
    let _ = writeln!(out, "| **Type** | {} |", format_type(setting));
    let _ = writeln!(out, "| **Default** | `{}` |", format_value(&setting.default));

    let number = &setting.constraints.number;
    match (number.min, number.max) {
        (Some(min), Some(max)) => {
            let _ = writeln!(out, "| **Range** | {min} - {max} |");
        }
        (Some(min), None) => {
            let _ = writeln!(out, "| **Minimum** | {min} |");
        }
        (None, Some(max)) => {
            let _ = writeln!(out, "| **Maximum** | {max} |");
        }
        (None, None) => {}
    }
    if let Some(ref pattern) = setting.constraints.text.pattern {
        let _ = writeln!(out, "| **Pattern** | `{pattern}` |");
    }
    out.push('\n');

    if let Some(ref options) = setting.constraints.options {
        out.push_str("**Options:**\n\n");
        for opt in options {
            match opt.description {
                Some(ref desc) => {
                    let _ = writeln!(out, "- `{}` - {} ({desc})", format_value(&opt.value), opt.label);
                }
                None => {
                    let _ = writeln!(out, "- `{}` - {}", format_value(&opt.value), opt.label);
                }
            }
        }
        out.push('\n');
    }

    out.push_str("---\n\n");
}

fn format_type(setting: &SettingMetadata) -> &'static str {
    match setting.setting_type {
        SettingType::Toggle => "Boolean",
        SettingType::Text => "String",
        SettingType::Number if setting.constraints.number.integer => "Integer",
        SettingType::Number => "Number",
        SettingType::Select => "Select",
        SettingType::List => "List",
    }
}

fn format_value(v: &serde_json::Value) -> String {
    match v {
        serde_json::Value::String(s) => format!("\"{s}\""),
        serde_json::Value::Array(items) => format!("[{} item(s)]", items.len()),
        _ => v.to_string(),
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().chain(chars).collect(),
    }
}
