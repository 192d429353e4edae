pub mod history;
pub mod layout;
pub mod mix;

use anyhow::{Context as _, Result};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use deckmix_application::MixingService;
use deckmix_core::config::RootConfig;
use deckmix_infrastructure::{ConfigService, JsonDocumentStore};

/// Services shared by all subcommands.
pub struct Context {
    pub service: MixingService,
}

impl Context {
    /// Loads configuration, installs logging and opens the study document.
    ///
    /// With `startup_cleanup` set, expired history entries are removed here,
    /// once per run.
    pub fn load(
        config_path: Option<PathBuf>,
        document_path: Option<PathBuf>,
        startup_cleanup: bool,
    ) -> Result<Self> {
        let config_service = match config_path {
            Some(path) => ConfigService::with_path(path),
            None => ConfigService::new(),
        };
        let config = config_service
            .get_config()
            .context("Failed to load configuration")?;

        init_logging(&config);

        let store = match document_path.or_else(|| config.storage.document_path.clone()) {
            Some(path) => JsonDocumentStore::with_path(path),
            None => JsonDocumentStore::new().context("Failed to resolve the study document path")?,
        };
        tracing::debug!("Using study document {:?}", store.path());

        let service = MixingService::new(Arc::new(store), config.history);
        if startup_cleanup {
            if let Err(e) = service.startup() {
                tracing::warn!("Mixing history cleanup failed: {}", e);
            }
        }

        Ok(Self { service })
    }
}

fn init_logging(config: &RootConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use deckmix_core::config::HistoryConfig;
    use deckmix_core::history::SessionHistoryStore;
    use tempfile::TempDir;

    fn library_with_expired_session(temp_dir: &TempDir) -> PathBuf {
        let path = temp_dir.path().join("library.json");
        let store = Arc::new(JsonDocumentStore::with_path(path.clone()));
        let history = SessionHistoryStore::new(store, HistoryConfig::default());
        history
            .record_at(&["d1".to_string()], 2, Utc::now() - Duration::days(60))
            .unwrap();
        path
    }

    #[test]
    fn test_startup_cleanup_removes_expired_sessions() {
        let temp_dir = TempDir::new().unwrap();
        let document = library_with_expired_session(&temp_dir);
        let config = temp_dir.path().join("config.toml");

        let context = Context::load(Some(config), Some(document), true).unwrap();
        assert!(context.service.history().all().unwrap().is_empty());
    }

    #[test]
    fn test_skipping_startup_cleanup_leaves_work_for_explicit_cleanup() {
        let temp_dir = TempDir::new().unwrap();
        let document = library_with_expired_session(&temp_dir);
        let config = temp_dir.path().join("config.toml");

        let context = Context::load(Some(config), Some(document), false).unwrap();
        assert_eq!(context.service.history().all().unwrap().len(), 1);
        assert_eq!(context.service.history().cleanup().unwrap(), 1);
    }

    #[test]
    fn test_invalid_config_fails_to_load() {
        let temp_dir = TempDir::new().unwrap();
        let config = temp_dir.path().join("config.toml");
        std::fs::write(&config, "[history]\nretention_days = 1000000000000\n").unwrap();
        let document = temp_dir.path().join("library.json");

        assert!(Context::load(Some(config), Some(document), true).is_err());
    }
}
