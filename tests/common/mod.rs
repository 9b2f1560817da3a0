//! Shared fixtures for folio integration tests

#![allow(dead_code)]

use folio::{EnvSource, JsonStorage, SiteManager};
use std::collections::HashMap;
use std::path::PathBuf;
use tempfile::TempDir;

// =============================================================================
// Env source
// =============================================================================

/// In-memory env vars so tests never touch the process environment
#[derive(Debug, Clone, Default)]
pub struct MapEnv(pub HashMap<String, String>);

impl MapEnv {
    pub fn with(vars: &[(&str, &str)]) -> Self {
        Self(
            vars.iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }
}

impl EnvSource for MapEnv {
    fn var(&self, key: &str) -> Result<String, std::env::VarError> {
        self.0.get(key).cloned().ok_or(std::env::VarError::NotPresent)
    }
}

// =============================================================================
// Fixture
// =============================================================================

/// Temporary data directory plus a manager pointed at it
pub struct TestFixture {
    pub temp_dir: TempDir,
    pub manager: SiteManager<JsonStorage>,
}

impl TestFixture {
    pub fn new() -> Self {
        Self::build_with(false, &[])
    }

    pub fn strict() -> Self {
        Self::build_with(true, &[])
    }

    /// Fixture with `FOLIO_*` env vars
    pub fn with_env(vars: &[(&str, &str)]) -> Self {
        Self::build_with(false, vars)
    }

    pub fn build_with(strict: bool, vars: &[(&str, &str)]) -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let manager = SiteManager::builder("test-site")
            .data_dir(temp_dir.path())
            .with_env_prefix("FOLIO")
            .with_env_source(MapEnv::with(vars))
            .strict(strict)
            .build()
            .expect("Failed to create manager");

        Self { temp_dir, manager }
    }

    /// Second manager over the same directory, as a fresh process would see it
    pub fn reopen(&self) -> SiteManager<JsonStorage> {
        SiteManager::builder("test-site")
            .data_dir(self.temp_dir.path())
            .build()
            .expect("Failed to reopen manager")
    }

    pub fn settings_path(&self) -> PathBuf {
        self.temp_dir.path().join("site.json")
    }

    pub fn cv_path(&self) -> PathBuf {
        self.temp_dir.path().join("cv.json")
    }

    /// Write raw JSON to the override file
    pub fn write_settings(&self, value: &serde_json::Value) {
        std::fs::write(self.settings_path(), value.to_string()).expect("write site.json");
        self.manager.invalidate_cache();
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Parsed override file, if it exists
pub fn read_settings_file(fixture: &TestFixture) -> Option<serde_json::Value> {
    let content = std::fs::read_to_string(fixture.settings_path()).ok()?;
    serde_json::from_str(&content).ok()
}
