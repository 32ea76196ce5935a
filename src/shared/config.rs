//! Application Configuration
//!
//! Loaded from `clipthumb.toml`. Every field is optional; missing fields
//! take the built-in defaults, and a missing file means all defaults. A
//! broken file is reported to the caller, who falls back to defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Config file name searched for in the standard locations
pub const CONFIG_FILE_NAME: &str = "clipthumb.toml";

/// Top-level configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreviewConfig {
    /// Extension the document path must carry, leading dot included
    pub required_extension: String,
    pub window: WindowConfig,
    pub auto_fit: AutoFitConfig,
    pub logging: LoggingConfig,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            required_extension: ".clip".to_string(),
            window: WindowConfig::default(),
            auto_fit: AutoFitConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

/// Preview window configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Window class shared by the top-level and host windows
    pub class_name: String,
    /// Title used when the launcher passes an empty token
    pub default_title: String,
    pub host_title: String,
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            class_name: "ClipThumbPreviewWindow".to_string(),
            default_title: "ClipThumb".to_string(),
            host_title: "Clip Preview Host".to_string(),
            x: 100,
            y: 100,
            width: 800,
            height: 800,
        }
    }
}

/// Auto-fit configuration
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AutoFitConfig {
    pub enabled: bool,
    /// Wait before the first sample
    pub grace_ms: u64,
    pub poll_interval_ms: u64,
    /// Upper bound on sampling after the grace period; 0 samples once
    pub settle_timeout_ms: u64,
}

impl Default for AutoFitConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            grace_ms: 200,
            poll_interval_ms: 50,
            settle_timeout_ms: 1000,
        }
    }
}

/// Log file configuration
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub enabled: bool,
    /// Log file; defaults to `clipthumb.log` next to the executable
    pub path: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            path: None,
        }
    }
}

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

impl PreviewConfig {
    /// Standard locations, in search order: config dir, exe dir, cwd
    pub fn search_paths() -> Vec<PathBuf> {
        [
            dirs::config_dir().map(|p| p.join("clipthumb").join(CONFIG_FILE_NAME)),
            std::env::current_exe()
                .ok()
                .and_then(|p| p.parent().map(|d| d.join(CONFIG_FILE_NAME))),
            Some(PathBuf::from(CONFIG_FILE_NAME)),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    /// Find clipthumb.toml in standard locations
    pub fn find_config_path() -> Option<PathBuf> {
        Self::search_paths().into_iter().find(|c| c.exists())
    }

    /// Load configuration from the standard locations.
    ///
    /// No file at all gives the defaults; a file that cannot be read or
    /// parsed is an error.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_first(&Self::search_paths())
    }

    /// Load the first existing file among `candidates`
    pub fn load_first(candidates: &[PathBuf]) -> Result<Self, ConfigError> {
        match candidates.iter().find(|c| c.exists()) {
            Some(path) => Self::load_from_path(path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific path
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }
}
