//! Configuration management for docsearch.
//!
//! This module handles loading configuration from TOML files and
//! environment variables, with sensible defaults for all settings.

use crate::core::error::{Result, SearchError};
use crate::core::search::{DEFAULT_MAX_RESULTS, DEFAULT_MINUS_MARKER};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Application name used for the XDG config directory
const APP_NAME: &str = "docsearch";

/// Config file looked up in the working directory
const LOCAL_CONFIG_FILE: &str = "docsearch.toml";

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub search: SearchConfig,
}

/// Search configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SearchConfig {
    /// Maximum results returned per query
    #[serde(default = "default_max_results")]
    pub max_results: usize,

    /// Leading character that turns a query word into an exclusion
    #[serde(default = "default_minus_marker")]
    pub minus_marker: char,
}

fn default_max_results() -> usize {
    DEFAULT_MAX_RESULTS
}

fn default_minus_marker() -> char {
    DEFAULT_MINUS_MARKER
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_results: default_max_results(),
            minus_marker: default_minus_marker(),
        }
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| SearchError::ConfigError(format!("Failed to read config file: {e}")))?;

        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Default location of the user config file
    /// (`$XDG_CONFIG_HOME/docsearch/config.toml`)
    pub fn user_config_file() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_NAME).join("config.toml"))
    }

    /// Load config with priority: env vars > TOML > defaults
    ///
    /// File lookup order:
    /// 1. DOCSEARCH_CONFIG env var
    /// 2. XDG config file (~/.config/docsearch/config.toml)
    /// 3. ./docsearch.toml
    /// 4. Defaults
    pub fn load() -> Result<Self> {
        let mut config = if let Ok(config_path) = env::var("DOCSEARCH_CONFIG") {
            Self::from_file(config_path)?
        } else {
            match Self::user_config_file().filter(|path| path.exists()) {
                Some(path) => Self::from_file(path)?,
                None if Path::new(LOCAL_CONFIG_FILE).exists() => {
                    Self::from_file(LOCAL_CONFIG_FILE)?
                }
                None => Self::default(),
            }
        };

        config.merge_env();
        config.validate()?;

        Ok(config)
    }

    /// Merge configuration with environment variables
    pub fn merge_env(&mut self) {
        if let Ok(max_results) = env::var("DOCSEARCH_MAX_RESULTS") {
            if let Ok(k) = max_results.parse() {
                self.search.max_results = k;
            }
        }

        if let Ok(marker) = env::var("DOCSEARCH_MINUS_MARKER") {
            let mut chars = marker.chars();
            if let (Some(c), None) = (chars.next(), chars.next()) {
                self.search.minus_marker = c;
            }
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.search.max_results == 0 {
            return Err(SearchError::ConfigError(
                "Max results must be non-zero".to_string(),
            ));
        }

        // A whitespace marker could never start a word.
        if self.search.minus_marker.is_whitespace() {
            return Err(SearchError::ConfigError(
                "Minus marker must not be whitespace".to_string(),
            ));
        }

        Ok(())
    }

    /// Log configuration
    pub fn log_config(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Max results: {}", self.search.max_results);
        tracing::info!("  Minus marker: {:?}", self.search.minus_marker);
    }
}
