//! Configuration for the override layer

use std::path::PathBuf;
use std::sync::Arc;

use crate::storage::{JsonStorage, StorageBackend};

/// Source of environment variables
///
/// Swappable so tests can inject variables without touching the process env.
pub trait EnvSource: Send + Sync {
    fn var(&self, key: &str) -> Result<String, std::env::VarError>;
}

/// Reads from the process environment
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultEnvSource;

impl EnvSource for DefaultEnvSource {
    fn var(&self, key: &str) -> Result<String, std::env::VarError> {
        std::env::var(key)
    }
}

/// Configuration for a [`SiteManager`](crate::SiteManager)
pub struct SiteConfig<S: StorageBackend = JsonStorage> {
    /// Directory holding the override files
    pub data_dir: PathBuf,

    /// Stem of the settings override file (extension comes from the storage)
    pub settings_file: String,

    /// Stem of the CV replacement file
    pub cv_file: String,

    /// Site name, used for the default data directory
    pub site_name: String,

    pub storage: S,

    /// Prefix for env var overrides (e.g. "FOLIO" -> FOLIO_TEMPLATE_BASE).
    /// `None` disables env overrides.
    pub env_prefix: Option<String>,

    pub env_source: Arc<dyn EnvSource>,

    /// Reject overrides that fail validation instead of warning
    pub strict: bool,
}

impl<S: StorageBackend> SiteConfig<S> {
    /// Full path of the settings override file
    pub fn settings_path(&self) -> PathBuf {
        self.data_dir
            .join(format!("{}.{}", self.settings_file, self.storage.extension()))
    }

    /// Full path of the CV replacement file
    pub fn cv_path(&self) -> PathBuf {
        self.data_dir
            .join(format!("{}.{}", self.cv_file, self.storage.extension()))
    }
}

impl SiteConfig<JsonStorage> {
    /// Create a builder for `SiteConfig`
    ///
    /// ```rust
    /// use folio::SiteConfig;
    ///
    /// let config = SiteConfig::builder("robinhuang.nz")
    ///     .data_dir("/srv/site/content")
    ///     .with_env_prefix("FOLIO")
    ///     .build();
    ///
    /// assert!(config.settings_path().ends_with("site.json"));
    /// ```
    pub fn builder(site_name: impl Into<String>) -> SiteConfigBuilder {
        SiteConfigBuilder::new(site_name)
    }
}

impl Default for SiteConfig<JsonStorage> {
    fn default() -> Self {
        SiteConfigBuilder::new("folio").data_dir(".").build()
    }
}

impl<S: StorageBackend> std::fmt::Debug for SiteConfig<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SiteConfig")
            .field("data_dir", &self.data_dir)
            .field("settings_file", &self.settings_file)
            .field("cv_file", &self.cv_file)
            .field("site_name", &self.site_name)
            .field("extension", &self.storage.extension())
            .field("env_prefix", &self.env_prefix)
            .field("strict", &self.strict)
            .finish_non_exhaustive()
    }
}

/// Fluent builder for [`SiteConfig`]
#[derive(Clone)]
pub struct SiteConfigBuilder<S: StorageBackend = JsonStorage> {
    data_dir: Option<PathBuf>,
    settings_file: String,
    cv_file: String,
    site_name: String,
    storage: S,
    env_prefix: Option<String>,
    env_source: Arc<dyn EnvSource>,
    strict: bool,
}

impl SiteConfigBuilder<JsonStorage> {
    pub fn new(site_name: impl Into<String>) -> Self {
        Self {
            data_dir: None,
            settings_file: "site".into(),
            cv_file: "cv".into(),
            site_name: site_name.into(),
            storage: JsonStorage::new(),
            env_prefix: None,
            env_source: Arc::new(DefaultEnvSource),
            strict: false,
        }
    }

    /// Write compact JSON instead of pretty-printed
    pub fn compact_json(mut self) -> Self {
        self.storage = JsonStorage::compact();
        self
    }
}

impl<S: StorageBackend> SiteConfigBuilder<S> {
    /// Set the data directory; `~` expands to the home directory.
    pub fn data_dir(mut self, path: impl Into<PathBuf>) -> Self {
        let path: PathBuf = path.into();
        let expanded = match (path.strip_prefix("~"), dirs::home_dir()) {
            (Ok(rest), Some(home)) => home.join(rest),
            _ => path.clone(),
        };
        self.data_dir = Some(expanded);
        self
    }

    /// Stem of the settings file (default: "site")
    pub fn settings_file(mut self, stem: impl Into<String>) -> Self {
        self.settings_file = stem.into();
        self
    }

    /// Stem of the CV file (default: "cv")
    pub fn cv_file(mut self, stem: impl Into<String>) -> Self {
        self.cv_file = stem.into();
        self
    }

    /// Use another storage format
    pub fn with_storage<T: StorageBackend>(self, storage: T) -> SiteConfigBuilder<T> {
        SiteConfigBuilder {
            data_dir: self.data_dir,
            settings_file: self.settings_file,
            cv_file: self.cv_file,
            site_name: self.site_name,
            storage,
            env_prefix: self.env_prefix,
            env_source: self.env_source,
            strict: self.strict,
        }
    }

    /// Enable env var overrides: `{PREFIX}_{CATEGORY}_{KEY}`, upper-cased.
    ///
    /// ```rust
    /// use folio::SiteConfig;
    ///
    /// // FOLIO_TEMPLATE_BASE=/blog now overrides "template.base"
    /// let config = SiteConfig::builder("robinhuang.nz")
    ///     .with_env_prefix("FOLIO")
    ///     .build();
    /// # assert_eq!(config.env_prefix.as_deref(), Some("FOLIO"));
    /// ```
    pub fn with_env_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.env_prefix = Some(prefix.into());
        self
    }

    pub fn with_env_source(mut self, source: impl EnvSource + 'static) -> Self {
        self.env_source = Arc::new(source);
        self
    }

    /// Fail on invalid overrides instead of logging a warning
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Build the config
    ///
    /// Without an explicit `data_dir`, uses `<system config dir>/<site_name>`,
    /// falling back to the current directory.
    pub fn build(self) -> SiteConfig<S> {
        let data_dir = self.data_dir.unwrap_or_else(|| {
            dirs::config_dir()
                .map(|d| d.join(&self.site_name))
                .unwrap_or_else(|| PathBuf::from("."))
        });

        SiteConfig {
            data_dir,
            settings_file: self.settings_file,
            cv_file: self.cv_file,
            site_name: self.site_name,
            storage: self.storage,
            env_prefix: self.env_prefix,
            env_source: self.env_source,
            strict: self.strict,
        }
    }
}
