//! Configuration service implementation.
//!
//! Loads the root configuration from `config.toml` and caches it.

use std::fs;
use std::path::PathBuf;
use std::sync::{Arc, RwLock};

use deckmix_core::DeckmixError;
use deckmix_core::config::RootConfig;
use deckmix_core::error::Result;

use crate::paths::DeckmixPaths;

/// Configuration service that loads and caches the root configuration.
#[derive(Debug, Clone)]
pub struct ConfigService {
    path: Option<PathBuf>,
    /// Cached configuration loaded from file.
    config: Arc<RwLock<Option<RootConfig>>>,
}

impl ConfigService {
    /// Creates a service reading the platform default `config.toml`.
    pub fn new() -> Self {
        Self {
            path: None,
            config: Arc::new(RwLock::new(None)),
        }
    }

    /// Creates a service reading a specific file.
    pub fn with_path(path: PathBuf) -> Self {
        Self {
            path: Some(path),
            config: Arc::new(RwLock::new(None)),
        }
    }

    /// Gets the root configuration, loading it on first access.
    ///
    /// A missing or blank file yields the defaults; a malformed file or one
    /// with out-of-range values is an error.
    pub fn get_config(&self) -> Result<RootConfig> {
        {
            let read_lock = self
                .config
                .read()
                .map_err(|e| DeckmixError::internal(format!("config lock poisoned: {e}")))?;
            if let Some(ref cached) = *read_lock {
                return Ok(cached.clone());
            }
        }

        let loaded = self.load_config()?;

        {
            let mut write_lock = self
                .config
                .write()
                .map_err(|e| DeckmixError::internal(format!("config lock poisoned: {e}")))?;
            *write_lock = Some(loaded.clone());
        }

        Ok(loaded)
    }

    /// Invalidates the cache, forcing a reload on next access.
    pub fn invalidate_cache(&self) {
        if let Ok(mut write_lock) = self.config.write() {
            *write_lock = None;
        }
    }

    fn load_config(&self) -> Result<RootConfig> {
        let path = self.config_path()?;
        if !path.exists() {
            tracing::debug!("No config file at {:?}, using defaults", path);
            return Ok(RootConfig::default());
        }

        let content = fs::read_to_string(&path).map_err(|e| {
            DeckmixError::io(format!("Failed to read config file at {:?}: {}", path, e))
        })?;
        if content.trim().is_empty() {
            return Ok(RootConfig::default());
        }

        let config: RootConfig = toml::from_str(&content).map_err(|e| {
            DeckmixError::config(format!("Failed to parse config file at {:?}: {}", path, e))
        })?;
        config.validate()?;
        tracing::debug!("Loaded config from {:?}", path);
        Ok(config)
    }

    fn config_path(&self) -> Result<PathBuf> {
        match &self.path {
            Some(path) => Ok(path.clone()),
            None => DeckmixPaths::config_file().map_err(|e| DeckmixError::config(e.to_string())),
        }
    }
}

impl Default for ConfigService {
    fn default() -> Self {
        Self::new()
    }
}
