//! Runtime configuration.
//!
//! Read from a TOML file (every key optional), then overridden by
//! environment variables:
//!
//! - `STOREFRONT_API_URL`: `api.base_url`
//! - `STOREFRONT_SNAPSHOT_DIR`: `snapshot.dir`
//! - `STOREFRONT_LOG`: `logging.level` (an `EnvFilter` directive)
//!
//! ```toml
//! [api]
//! base_url = "http://127.0.0.1:3000"
//!
//! [snapshot]
//! dir = "./.storefront"
//!
//! [notifications]
//! auto_close_ms = 3000
//!
//! [logging]
//! level = "storefront=debug"
//! ```

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

pub const DEFAULT_API_URL: &str = "https://my-json-server.typicode.com/jaiswalaryan/data";

pub const ENV_API_URL: &str = "STOREFRONT_API_URL";
pub const ENV_SNAPSHOT_DIR: &str = "STOREFRONT_SNAPSHOT_DIR";
pub const ENV_LOG: &str = "STOREFRONT_LOG";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub snapshot: SnapshotConfig,
    pub notifications: NotificationConfig,
    pub logging: LoggingConfig,
}

/// Remote product service settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
}

/// Local snapshot store settings. Without a directory the snapshot lives in
/// memory for the life of the process.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnapshotConfig {
    pub dir: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationConfig {
    /// How long a toast stays visible, in milliseconds.
    pub auto_close_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
        }
    }
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            auto_close_ms: 3000,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl NotificationConfig {
    pub fn auto_close(&self) -> Duration {
        Duration::from_millis(self.auto_close_ms)
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io { path: PathBuf, message: String },
    Parse(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io { path, message } => {
                write!(f, "failed to read config {}: {}", path.display(), message)
            }
            ConfigError::Parse(msg) => write!(f, "invalid config: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::Parse(err.to_string())
    }
}

impl Config {
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::from_toml_str(&source)
    }

    /// Defaults, or `path` when given, with environment overrides applied.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        Ok(config.with_overrides(|key| std::env::var(key).ok()))
    }

    /// Apply overrides looked up through `var` (normally `std::env::var`).
    pub fn with_overrides<F>(mut self, var: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = var(ENV_API_URL).filter(|v| !v.is_empty()) {
            self.api.base_url = url;
        }
        if let Some(dir) = var(ENV_SNAPSHOT_DIR).filter(|v| !v.is_empty()) {
            self.snapshot.dir = Some(PathBuf::from(dir));
        }
        if let Some(level) = var(ENV_LOG).filter(|v| !v.is_empty()) {
            self.logging.level = level;
        }
        self
    }
}
