//! Configuration service implementation.
//!
//! Loads [`DashboardConfig`] from `config.toml` (see [`AgriPaths`]) or an
//! explicit path, and caches it.

use agrimitra_core::config::DashboardConfig;
use agrimitra_core::error::{AgriError, Result};
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use crate::paths::AgriPaths;

/// Configuration service that loads and caches the dashboard configuration.
///
/// A missing file is not an error: the defaults are used. A file that fails to
/// parse is reported by [`ConfigService::load`] and replaced by defaults in
/// [`ConfigService::get_config`].
#[derive(Debug, Clone)]
pub struct ConfigService {
    /// Explicit config path; `None` means the platform default.
    path: Option<PathBuf>,
    /// Cached configuration loaded from file.
    config: Arc<RwLock<Option<DashboardConfig>>>,
}

impl Default for ConfigService {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigService {
    /// Creates a service reading the platform default `config.toml`.
    pub fn new() -> Self {
        Self {
            path: None,
            config: Arc::new(RwLock::new(None)),
        }
    }

    /// Creates a service reading the given file.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
            config: Arc::new(RwLock::new(None)),
        }
    }

    /// Gets the configuration, loading from file if not cached.
    pub fn get_config(&self) -> DashboardConfig {
        {
            let read_lock = self.config.read().unwrap_or_else(|e| e.into_inner());
            if let Some(ref cached) = *read_lock {
                return cached.clone();
            }
        }

        let loaded = self.load().unwrap_or_else(|e| {
            tracing::warn!("[ConfigService] Falling back to defaults: {}", e);
            DashboardConfig::default()
        });

        {
            let mut write_lock = self.config.write().unwrap_or_else(|e| e.into_inner());
            *write_lock = Some(loaded.clone());
        }

        loaded
    }

    /// Invalidates the cache, forcing a reload on next access.
    pub fn invalidate_cache(&self) {
        let mut write_lock = self.config.write().unwrap_or_else(|e| e.into_inner());
        *write_lock = None;
    }

    /// Reads and parses the config file without touching the cache.
    ///
    /// # Errors
    ///
    /// - `Config` if the platform config directory cannot be resolved
    /// - `Io` if the file exists but cannot be read
    /// - `Serialization` if the file is not valid TOML for `DashboardConfig`
    pub fn load(&self) -> Result<DashboardConfig> {
        let path = self.config_path()?;
        Self::load_from(&path)
    }

    fn load_from(path: &Path) -> Result<DashboardConfig> {
        if !path.exists() {
            tracing::debug!(
                "[ConfigService] No config at {:?}, using defaults",
                path
            );
            return Ok(DashboardConfig::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: DashboardConfig = toml::from_str(&content)?;
        tracing::info!("[ConfigService] Loaded config from {:?}", path);
        Ok(config)
    }

    fn config_path(&self) -> Result<PathBuf> {
        match &self.path {
            Some(path) => Ok(path.clone()),
            None => AgriPaths::config_file().map_err(|e| AgriError::config(e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use agrimitra_core::language::Language;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let service = ConfigService::with_path(dir.path().join("config.toml"));
        assert_eq!(service.load().unwrap(), DashboardConfig::default());
    }

    #[test]
    fn test_loads_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[voice]\nlisten_delay_ms = 500\n\n[ui]\nlanguage = \"bengali\""
        )
        .unwrap();

        let config = ConfigService::with_path(file.path()).get_config();
        assert_eq!(config.voice.listen_delay_ms, 500);
        assert_eq!(config.ui.language, Language::Bengali);
    }

    #[test]
    fn test_malformed_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[voice\nlisten_delay_ms = ").unwrap();

        let service = ConfigService::with_path(file.path());
        assert!(service.load().unwrap_err().is_serialization());
        assert_eq!(service.get_config(), DashboardConfig::default());
    }

    #[test]
    fn test_cache_and_invalidate() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[voice]\nlisten_delay_ms = 1").unwrap();
        let service = ConfigService::with_path(file.path());
        assert_eq!(service.get_config().voice.listen_delay_ms, 1);

        std::fs::write(file.path(), "[voice]\nlisten_delay_ms = 2\n").unwrap();
        assert_eq!(service.get_config().voice.listen_delay_ms, 1);

        service.invalidate_cache();
        assert_eq!(service.get_config().voice.listen_delay_ms, 2);
    }
}
