//! Configuration parsing for arkora
//!
//! Handles the optional `arkora.toml` file that extends the built-in synonym
//! table and featured-board labels for a deployment. The loaded tables are
//! immutable for the process lifetime.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::slug::is_normalized;

/// Default configuration file name
pub const CONFIG_FILE_NAME: &str = "arkora.toml";

/// Root configuration structure
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Extra alternate-term -> canonical-board entries; they shadow the
    /// built-in table on key collision.
    #[serde(default)]
    pub synonyms: HashMap<String, String>,

    /// Display-label overrides, slug -> label; they shadow the featured list.
    #[serde(default)]
    pub boards: HashMap<String, String>,
}

/// Validation failure for a config entry.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("synonym alias {0:?} is not a normalized slug")]
    InvalidAlias(String),

    #[error("synonym target {0:?} for alias {1:?} is not a normalized slug")]
    InvalidTarget(String, String),

    #[error("board label key {0:?} is not a normalized slug")]
    InvalidBoardSlug(String),
}

impl Config {
    /// Load and validate configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        config
            .validate()
            .with_context(|| format!("Invalid config file: {}", path.display()))?;

        Ok(config)
    }

    /// Find configuration file by searching up from a start directory
    pub fn find_config(start_dir: &Path) -> Result<PathBuf> {
        let mut current = start_dir.to_path_buf();

        loop {
            let config_path = current.join(CONFIG_FILE_NAME);
            if config_path.exists() {
                return Ok(config_path);
            }

            // Move up to parent directory
            if !current.pop() {
                anyhow::bail!(
                    "Could not find {} in {} or any parent directory",
                    CONFIG_FILE_NAME,
                    start_dir.display()
                );
            }
        }
    }

    /// Check that every table entry is already a normalized slug.
    ///
    /// The resolver compares entries verbatim against normalized input, so a
    /// key like `"Stock Tips"` would silently never match; reject it up front.
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        for (alias, target) in &self.synonyms {
            if !is_normalized(alias) {
                return Err(ConfigError::InvalidAlias(alias.clone()));
            }
            if !is_normalized(target) {
                return Err(ConfigError::InvalidTarget(target.clone(), alias.clone()));
            }
        }
        for slug in self.boards.keys() {
            if !is_normalized(slug) {
                return Err(ConfigError::InvalidBoardSlug(slug.clone()));
            }
        }
        Ok(())
    }
}
