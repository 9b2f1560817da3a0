//! # folio - portfolio CV data and site settings
//!
//! The content of a personal portfolio / CV site as typed, immutable Rust
//! data, plus the settings surface around it.
//!
//! ## Features
//!
//! - **CV data**: `experiences`, `education` and `skills` as ordered records
//! - **Site settings**: `profile`, `social`, `template` and `seo` records
//! - **Schema**: per-field metadata and constraints (absolute website URL,
//!   positive page sizes, "empty means hidden" social links)
//! - **Overrides**: optional override file and env vars on top of the
//!   built-in data, resolved by [`SiteManager`]
//! - **Export**: the whole data surface as JSON, TOML or YAML
//! - **Docs**: markdown reference of every setting
//!
//! ## Built-in data
//!
//! ```rust
//! use folio::{cv, site};
//!
//! for job in cv::experiences() {
//!     println!("{} - {} ({})", job.time, job.title, job.company);
//! }
//!
//! let template = site::template();
//! assert_eq!(template.post_per_page, 5);
//! assert_eq!(template.canonical_url("/cv"), "https://www.robinhuang.nz/cv");
//!
//! // Empty social links are not rendered
//! let shown: Vec<_> = site::social().visible();
//! assert_eq!(shown.len(), 3);
//! ```
//!
//! ## Overrides
//!
//! ```rust,no_run
//! use folio::SiteManager;
//! use serde_json::json;
//!
//! # fn example() -> folio::Result<()> {
//! let manager = SiteManager::builder("robinhuang.nz")
//!     .data_dir("./content")
//!     .with_env_prefix("FOLIO")   // FOLIO_TEMPLATE_BASE=/portfolio
//!     .build()?;
//!
//! manager.save_setting("template", "postPerPage", &json!(10))?;
//!
//! let settings = manager.settings()?;
//! assert_eq!(settings.template.post_per_page, 10);
//!
//! for issue in manager.validate_settings()? {
//!     eprintln!("{issue}");
//! }
//! # Ok(())
//! # }
//! ```
//!
//! A setting saved with its built-in value is removed from the override
//! file, so the file only lists real customisations.
//!
//! ## Validation
//!
//! The built-in data is never rejected. Overrides that fail their
//! constraints are logged and kept; overrides with the wrong type are
//! logged and ignored. With `strict(true)` both become errors.

mod docs;
mod error;
mod export;
mod manager;

pub mod config;
pub mod cv;
pub mod site;
pub mod storage;

pub use docs::{DocsConfig, generate_docs, generate_docs_from_metadata};
pub use error::{Error, Result};
pub use export::SiteData;
pub use manager::{SiteManager, SiteManagerBuilder, ValidationIssue};

pub use config::{
    DefaultEnvSource, EnvSource, SettingMetadata, SettingOption, SettingType, SettingsSchema,
    SiteConfig, SiteConfigBuilder, meta, opt,
};

pub use cv::{Cv, EducationEntry, ExperienceEntry, SkillGroup};
pub use site::{
    Profile, ResearchArea, SeoConfig, SiteSettings, SocialLinks, SocialPlatform, TemplateConfig,
};

pub use storage::{JsonStorage, StorageBackend};
#[cfg(feature = "toml")]
pub use storage::TomlStorage;
#[cfg(feature = "yaml")]
pub use storage::YamlStorage;
