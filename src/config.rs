//! Configuration file handling for asciify.
//!
//! Loads configuration from `<config dir>/asciify/config.toml` or a custom path.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::render::DEFAULT_RESOLUTION;

/// Configuration file structure for asciify.
#[derive(Debug, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub render: RenderConfig,
    #[serde(default)]
    pub palette: PaletteConfig,
}

#[derive(Debug, Deserialize)]
pub struct RenderConfig {
    #[serde(default = "default_resolution")]
    pub resolution: u32,
    /// One of `nearest`, `up`, `down`
    #[serde(default)]
    pub rounding: Option<String>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            resolution: default_resolution(),
            rounding: None,
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct PaletteConfig {
    /// One of `digits`, `standard`, `minimal`, `printable`
    #[serde(default)]
    pub charset: Option<String>,
    /// Extra characters added on top of the charset
    #[serde(default)]
    pub extra: Option<String>,
}

fn default_resolution() -> u32 {
    DEFAULT_RESOLUTION
}

impl Config {
    /// Load configuration.
    ///
    /// With an explicit path the file must exist. Without one, the default
    /// path is tried and a missing file yields the default configuration.
    /// A file that exists but cannot be parsed is always an error.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let (path, explicit) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => (default_path(), false),
        };

        if !explicit && !path.exists() {
            log::debug!("no config at {}, using defaults", path.display());
            return Ok(Config::default());
        }

        let content = std::fs::read_to_string(&path).map_err(|e| ConfigError::IoError {
            path: path.clone(),
            source: e,
        })?;
        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.clone(),
            source: e,
        })?;
        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug)]
pub enum ConfigError {
    IoError {
        path: PathBuf,
        source: std::io::Error,
    },
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError { path, source } => {
                write!(
                    f,
                    "Failed to read config file '{}': {}",
                    path.display(),
                    source
                )
            }
            ConfigError::ParseError { path, source } => {
                write!(
                    f,
                    "Failed to parse config file '{}': {}",
                    path.display(),
                    source
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::IoError { source, .. } => Some(source),
            ConfigError::ParseError { source, .. } => Some(source),
        }
    }
}

/// Get the default config file path.
pub fn default_path() -> PathBuf {
    dirs::config_dir()
        .map(|d| d.join("asciify").join("config.toml"))
        .unwrap_or_else(|| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config/asciify/config.toml")
        })
}
