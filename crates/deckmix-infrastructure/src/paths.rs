//! Path resolution for deckmix configuration and data files.
//!
//! ```text
//! ~/.config/deckmix/           # Config directory
//! └── config.toml              # Application configuration
//!
//! ~/.local/share/deckmix/      # Data directory
//! └── library.json             # Study document (decks, cards, mixing history)
//! ```

use std::path::PathBuf;

const APP_DIR_NAME: &str = "deckmix";

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Platform config/data directory could not be determined.
    HomeDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::HomeDirNotFound => write!(f, "Cannot find home directory"),
        }
    }
}

impl std::error::Error for PathError {}

/// Platform-specific locations of deckmix files.
pub struct DeckmixPaths;

impl DeckmixPaths {
    /// Returns the deckmix configuration directory (e.g. `~/.config/deckmix/`).
    pub fn config_dir() -> Result<PathBuf, PathError> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR_NAME))
            .ok_or(PathError::HomeDirNotFound)
    }

    /// Returns the deckmix data directory (e.g. `~/.local/share/deckmix/`).
    pub fn data_dir() -> Result<PathBuf, PathError> {
        dirs::data_dir()
            .map(|dir| dir.join(APP_DIR_NAME))
            .ok_or(PathError::HomeDirNotFound)
    }

    /// Returns the path to the main configuration file.
    pub fn config_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Returns the default path of the study document.
    pub fn document_file() -> Result<PathBuf, PathError> {
        Ok(Self::data_dir()?.join("library.json"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_file() {
        let config_file = DeckmixPaths::config_file().unwrap();
        assert!(config_file.ends_with("deckmix/config.toml"));
        assert!(config_file.starts_with(DeckmixPaths::config_dir().unwrap()));
    }

    #[test]
    fn test_document_file() {
        let document_file = DeckmixPaths::document_file().unwrap();
        assert!(document_file.ends_with("library.json"));
        assert!(document_file.starts_with(DeckmixPaths::data_dir().unwrap()));
    }
}
