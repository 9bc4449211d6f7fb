//! Application configuration

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::view::theme::Theme;

/// Environment variable overriding `soarca_uri`
pub const SOARCA_URI_ENV: &str = "SOARCA_URI";

/// Directory holding config, data and log files
pub fn config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("soarca-gui")
}

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppConfig {
    /// SOARCA backend base URI; health checks report an error while unset
    pub soarca_uri: Option<String>,
    pub health_interval_secs: u64,
    pub theme: Theme,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            soarca_uri: None,
            health_interval_secs: 30,
            theme: Theme::Dark,
        }
    }
}

impl AppConfig {
    /// Apply a `SOARCA_URI` value; blank values are ignored
    #[must_use]
    pub fn with_env_uri(mut self, uri: Option<String>) -> Self {
        if let Some(uri) = uri.map(|u| u.trim().to_string()).filter(|u| !u.is_empty()) {
            self.soarca_uri = Some(uri);
        }
        self
    }
}

/// Configuration service trait
pub trait ConfigService: Send + Sync {
    /// Load configuration
    fn load(&self) -> Result<AppConfig>;

    /// Save configuration
    fn save(&self, config: &AppConfig) -> Result<()>;
}

/// Configuration stored as `config.json` in the config directory
pub struct FileConfigService {
    path: PathBuf,
}

impl FileConfigService {
    pub fn new() -> Self {
        Self::with_path(config_dir().join("config.json"))
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read_file(path: &Path) -> Result<AppConfig> {
        if !path.exists() {
            return Ok(AppConfig::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        serde_json::from_str(&content).with_context(|| format!("parsing {}", path.display()))
    }
}

impl Default for FileConfigService {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigService for FileConfigService {
    /// Missing files are created with the defaults so there is something to edit
    fn load(&self) -> Result<AppConfig> {
        if !self.path.exists() {
            if let Err(e) = self.save(&AppConfig::default()) {
                log::warn!("Could not write default config: {e:#}");
            }
        }
        let config = Self::read_file(&self.path)?;
        Ok(config.with_env_uri(std::env::var(SOARCA_URI_ENV).ok()))
    }

    fn save(&self, config: &AppConfig) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("creating {}", dir.display()))?;
        }
        let content = serde_json::to_string_pretty(config)?;
        std::fs::write(&self.path, content)
            .with_context(|| format!("writing {}", self.path.display()))?;
        Ok(())
    }
}
