//! Schema and configuration types
//!
//! - `SettingsSchema` / `SettingMetadata` - per-field metadata and constraints
//! - `SiteConfig` - where overrides live and how they are read

mod schema;
mod types;

pub use schema::{
    NumberConstraints, SettingConstraints, SettingMetadata, SettingOption, SettingType,
    SettingsSchema, TextConstraints, meta, opt,
};

pub use types::{DefaultEnvSource, EnvSource, SiteConfig, SiteConfigBuilder};
