//! Platform path resolution for AgriMitra files.
//!
//! ```text
//! ~/.config/agrimitra/         # Config directory
//! ├── config.toml              # Dashboard configuration
//! └── logs/                    # Application logs
//!     └── agrimitra-desktop.log.YYYY-MM-DD
//! ```

use std::path::PathBuf;

const APP_DIR: &str = "agrimitra";

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Platform config directory could not be determined.
    ConfigDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::ConfigDirNotFound => write!(f, "Cannot find config directory"),
        }
    }
}

impl std::error::Error for PathError {}

pub struct AgriPaths;

impl AgriPaths {
    /// Returns the AgriMitra configuration directory (e.g. `~/.config/agrimitra/`).
    pub fn config_dir() -> Result<PathBuf, PathError> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or(PathError::ConfigDirNotFound)
    }

    /// Returns the path to `config.toml`.
    pub fn config_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Returns the log directory.
    pub fn log_dir() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("logs"))
    }
}
