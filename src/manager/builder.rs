//! Fluent builder for [`SiteManager`](super::SiteManager)

use crate::config::{EnvSource, SiteConfigBuilder};
use crate::error::Result;
use crate::storage::StorageBackend;
use std::path::PathBuf;

use super::SiteManager;

/// Builds a [`SiteManager`] in one chain of calls
///
/// ```rust,no_run
/// use folio::SiteManager;
///
/// let manager = SiteManager::builder("robinhuang.nz")
///     .data_dir("~/.config/robinhuang.nz")
///     .with_env_prefix("FOLIO")
///     .strict(true)
///     .build()?;
/// # Ok::<(), folio::Error>(())
/// ```
pub struct SiteManagerBuilder<S: StorageBackend = crate::storage::JsonStorage> {
    config_builder: SiteConfigBuilder<S>,
}

impl SiteManagerBuilder {
    pub fn new(site_name: impl Into<String>) -> Self {
        Self {
            config_builder: SiteConfigBuilder::new(site_name),
        }
    }

    pub fn compact_json(mut self) -> Self {
        self.config_builder = self.config_builder.compact_json();
        self
    }
}

impl<S: StorageBackend> SiteManagerBuilder<S> {
    /// Data directory; supports `~`
    pub fn data_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_builder = self.config_builder.data_dir(path);
        self
    }

    pub fn settings_file(mut self, stem: impl Into<String>) -> Self {
        self.config_builder = self.config_builder.settings_file(stem);
        self
    }

    pub fn cv_file(mut self, stem: impl Into<String>) -> Self {
        self.config_builder = self.config_builder.cv_file(stem);
        self
    }

    pub fn with_storage<T: StorageBackend>(self, storage: T) -> SiteManagerBuilder<T> {
        SiteManagerBuilder {
            config_builder: self.config_builder.with_storage(storage),
        }
    }

    /// Env overrides as `{PREFIX}_{CATEGORY}_{KEY}`
    pub fn with_env_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.config_builder = self.config_builder.with_env_prefix(prefix);
        self
    }

    pub fn with_env_source(mut self, source: impl EnvSource + 'static) -> Self {
        self.config_builder = self.config_builder.with_env_source(source);
        self
    }

    pub fn strict(mut self, strict: bool) -> Self {
        self.config_builder = self.config_builder.strict(strict);
        self
    }

    /// # Errors
    ///
    /// See [`SiteManager::new`].
    pub fn build(self) -> Result<SiteManager<S>> {
        SiteManager::new(self.config_builder.build())
    }
}
