//! Configuration system for fixturepath.
//!
//! This module provides the configuration structure with sensible defaults
//! and support for serialization/deserialization via serde. Configuration can
//! be loaded from a TOML file and merged with command-line arguments.
//!
//! # Example
//!
//! ```
//! use fixturepath::config::Config;
//!
//! let config = Config::default();
//! assert_eq!(config.artifact_cache_capacity, 2048);
//! assert!(!config.strict_mode);
//!
//! let custom = Config {
//!     strict_mode: true,
//!     ..Config::default()
//! };
//! assert!(custom.strict_mode);
//! ```

use serde::{Deserialize, Serialize};

use crate::cache::{DEFAULT_ARTIFACT_CAPACITY, DEFAULT_CONTEXT_CAPACITY};

/// Configuration for expression resolution and generation caching.
///
/// # Fields
///
/// * `artifact_cache_capacity` - Maximum cached artifacts (default: 2048)
/// * `context_cache_capacity` - Maximum cached root contexts (default: 1000)
/// * `strict_mode` - Fail when an override matches no node (default: false)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Maximum number of cached artifacts
    #[serde(default = "default_artifact_cache_capacity")]
    pub artifact_cache_capacity: usize,

    /// Maximum number of cached per-root generator contexts
    #[serde(default = "default_context_cache_capacity")]
    pub context_cache_capacity: usize,

    /// Treat an expression matching no node as an error
    #[serde(default)]
    pub strict_mode: bool,
}

fn default_artifact_cache_capacity() -> usize {
    DEFAULT_ARTIFACT_CAPACITY
}

fn default_context_cache_capacity() -> usize {
    DEFAULT_CONTEXT_CAPACITY
}

impl Default for Config {
    fn default() -> Self {
        Self {
            artifact_cache_capacity: default_artifact_cache_capacity(),
            context_cache_capacity: default_context_cache_capacity(),
            strict_mode: false,
        }
    }
}

impl Config {
    /// Returns the path to the config file.
    ///
    /// Uses `~/.config/fixturepath/config.toml` on all platforms.
    pub fn config_path() -> Option<std::path::PathBuf> {
        dirs::home_dir().map(|mut path| {
            path.push(".config");
            path.push("fixturepath");
            path.push("config.toml");
            path
        })
    }

    /// Loads configuration from the default config file.
    ///
    /// Returns the default configuration if the file doesn't exist or can't be read.
    pub fn load() -> Self {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    /// Loads configuration from `path`, falling back to defaults.
    pub fn load_from(path: &std::path::Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(contents) => toml::from_str(&contents).unwrap_or_else(|err| {
                tracing::warn!(path = %path.display(), %err, "invalid config, using defaults");
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }

    /// Saves configuration to the default config file.
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
        self.save_to(&config_path)
    }

    /// Saves configuration to `path`.
    pub fn save_to(&self, path: &std::path::Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let toml_string = toml::to_string_pretty(self)?;
        std::fs::write(path, toml_string)?;

        Ok(())
    }
}
