use crate::config::SiteConfig;
use crate::error::Result;
use crate::manager::env::EnvironmentHandler;
use crate::manager::operations::Resolved;
use crate::storage::{JsonStorage, StorageBackend};

use log::info;
use serde_json::Value;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Resolves the effective site settings and CV from the built-in data plus
/// optional override files and env vars.
///
/// Priority for each setting: env var > stored override > built-in default.
/// The stored file only ever holds values that differ from the built-in
/// default. Nothing here mutates the built-in data.
///
/// ```rust,no_run
/// use folio::SiteManager;
///
/// let manager = SiteManager::builder("robinhuang.nz")
///     .data_dir("./content")
///     .with_env_prefix("FOLIO")
///     .build()?;
///
/// let settings = manager.settings()?;
/// println!("{}", settings.template.canonical_url("/cv"));
/// # Ok::<(), folio::Error>(())
/// ```
pub struct SiteManager<S: StorageBackend = JsonStorage> {
    pub(crate) config: SiteConfig<S>,

    pub(crate) env_handler: EnvironmentHandler,

    pub(crate) cache: RwLock<Cache>,
}

/// Stored override document and the settings resolved from it
#[derive(Default)]
pub(crate) struct Cache {
    /// Loaded on first use
    pub stored: Option<Value>,
    /// Resolved in the configured mode; cleared whenever `stored` changes
    pub resolved: Option<Resolved>,
}

impl Cache {
    pub fn store(&mut self, stored: Value) {
        self.stored = Some(stored);
        self.resolved = None;
    }
}

impl<S: StorageBackend> SiteManager<S> {
    /// Create a manager. No file is touched until settings are read.
    ///
    /// # Errors
    ///
    /// Returns an error if the data directory path exists but is not a directory.
    pub fn new(config: SiteConfig<S>) -> Result<Self> {
        if config.data_dir.exists() && !config.data_dir.is_dir() {
            return Err(crate::Error::Config(format!(
                "Data path '{}' is not a directory",
                config.data_dir.display()
            )));
        }

        let env_handler =
            EnvironmentHandler::new(config.env_prefix.clone(), config.env_source.clone());

        info!(
            "Site manager for '{}' using {}",
            config.site_name,
            config.data_dir.display()
        );

        Ok(Self {
            config,
            env_handler,
            cache: RwLock::new(Cache::default()),
        })
    }

    pub fn config(&self) -> &SiteConfig<S> {
        &self.config
    }

    pub(crate) fn cache_read(&self) -> RwLockReadGuard<'_, Cache> {
        self.cache.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub(crate) fn cache_write(&self) -> RwLockWriteGuard<'_, Cache> {
        self.cache.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Forget the cached override document and resolved settings
    ///
    /// Call this if the override file was edited outside the manager, or
    /// after env vars changed.
    pub fn invalidate_cache(&self) {
        *self.cache_write() = Cache::default();
        log::debug!("Override cache invalidated");
    }
}
