//! Application configuration model.
//!
//! Loaded from `config.toml`; every section and field falls back to its
//! default when absent.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{DeckmixError, Result};

/// Default number of mixing sessions kept in history.
pub const DEFAULT_MAX_SESSIONS: usize = 10;
/// Default age in days after which a mixing session is cleaned up.
pub const DEFAULT_RETENTION_DAYS: i64 = 30;
/// Default number of sessions returned by a "recent" query.
pub const DEFAULT_RECENT_LIMIT: usize = 5;
/// Longest accepted retention period (100 years).
pub const MAX_RETENTION_DAYS: i64 = 36_500;

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
pub struct RootConfig {
    #[serde(default)]
    pub history: HistoryConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Retention policy of the mixing-session history.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryConfig {
    #[serde(default = "default_max_sessions")]
    pub max_sessions: usize,
    #[serde(default = "default_retention_days")]
    pub retention_days: i64,
    #[serde(default = "default_recent_limit")]
    pub recent_limit: usize,
}

fn default_max_sessions() -> usize {
    DEFAULT_MAX_SESSIONS
}

fn default_retention_days() -> i64 {
    DEFAULT_RETENTION_DAYS
}

fn default_recent_limit() -> usize {
    DEFAULT_RECENT_LIMIT
}

impl HistoryConfig {
    /// Checks that at least one session is kept and that the retention
    /// period lies in `0..=MAX_RETENTION_DAYS`.
    pub fn validate(&self) -> Result<()> {
        if self.max_sessions == 0 {
            return Err(DeckmixError::config(
                "history.max_sessions must be at least 1",
            ));
        }
        if !(0..=MAX_RETENTION_DAYS).contains(&self.retention_days) {
            return Err(DeckmixError::config(format!(
                "history.retention_days must be between 0 and {} (got {})",
                MAX_RETENTION_DAYS, self.retention_days
            )));
        }
        Ok(())
    }
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            max_sessions: DEFAULT_MAX_SESSIONS,
            retention_days: DEFAULT_RETENTION_DAYS,
            recent_limit: DEFAULT_RECENT_LIMIT,
        }
    }
}

impl RootConfig {
    /// Rejects values the services cannot operate with.
    pub fn validate(&self) -> Result<()> {
        self.history.validate()
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct StorageConfig {
    /// Overrides the default study document location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_path: Option<PathBuf>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Default filter directive when `RUST_LOG` is unset (e.g. "info", "deckmix_core=debug").
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config: RootConfig = toml::from_str("").unwrap();
        assert_eq!(config, RootConfig::default());
        assert_eq!(config.history.max_sessions, 10);
        assert_eq!(config.history.retention_days, 30);
        assert_eq!(config.history.recent_limit, 5);
        assert_eq!(config.logging.level, "info");
        assert!(config.storage.document_path.is_none());
    }

    #[test]
    fn test_partial_history_section() {
        let config: RootConfig = toml::from_str("[history]\nmax_sessions = 3\n").unwrap();
        assert_eq!(config.history.max_sessions, 3);
        assert_eq!(config.history.retention_days, DEFAULT_RETENTION_DAYS);
    }

    #[test]
    fn test_defaults_are_valid() {
        assert!(RootConfig::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_zero_max_sessions() {
        let config: RootConfig = toml::from_str("[history]\nmax_sessions = 0\n").unwrap();
        assert!(matches!(config.validate(), Err(DeckmixError::Config(_))));
    }

    #[test]
    fn test_rejects_negative_retention() {
        let config: RootConfig = toml::from_str("[history]\nretention_days = -1\n").unwrap();
        assert!(matches!(config.validate(), Err(DeckmixError::Config(_))));
    }

    #[test]
    fn test_rejects_huge_retention() {
        let config: RootConfig =
            toml::from_str("[history]\nretention_days = 1000000000000\n").unwrap();
        assert!(matches!(config.validate(), Err(DeckmixError::Config(_))));

        let boundary = HistoryConfig {
            retention_days: MAX_RETENTION_DAYS,
            ..HistoryConfig::default()
        };
        assert!(boundary.validate().is_ok());
    }

    #[test]
    fn test_storage_override() {
        let config: RootConfig =
            toml::from_str("[storage]\ndocument_path = \"/tmp/library.json\"\n").unwrap();
        assert_eq!(
            config.storage.document_path,
            Some(PathBuf::from("/tmp/library.json"))
        );
    }
}
