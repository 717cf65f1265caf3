//! Configuration management for the company directory.
//!
//! Handles loading configuration from JSONC files.
//! Names the company data source and the logging setup.

use anyhow::{Context, Result};
use dirs::config_dir;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Application configuration structure.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Company list location: an `http(s)://` URL or a file path
    pub data_source: String,
    /// Log file path (relative to config dir or absolute)
    pub log_file: String,
    /// Log filter directive, e.g. `info` or `company_tui=debug`
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_source: "companies.json".to_string(),
            log_file: "company-tui.log".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from file.
    ///
    /// # Arguments
    /// * `path` - Optional path to config file. If None, uses default location.
    ///
    /// # Returns
    /// * `Result<Config>` - Loaded configuration or error
    ///
    /// # Details
    /// Searches for config file in:
    /// 1. Provided path (if given)
    /// 2. `$XDG_CONFIG_HOME/company-tui/config.jsonc`
    /// 3. `~/.config/company-tui/config.jsonc`
    ///
    /// If no config file exists, returns default configuration.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = match path {
            Some(p) => p.to_path_buf(),
            None => Self::default_config_path()?,
        };

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;

        serde_json::from_str(&strip_comments(&content))
            .with_context(|| format!("Failed to deserialize config: {}", config_path.display()))
    }

    /// Get default configuration file path.
    ///
    /// # Returns
    /// * `Result<PathBuf>` - Path to config file or error
    pub fn default_config_path() -> Result<PathBuf> {
        Ok(Self::app_config_dir()?.join("config.jsonc"))
    }

    /// Get log file path.
    ///
    /// # Returns
    /// * `Result<PathBuf>` - Path to log file or error
    ///
    /// # Details
    /// If log_file is absolute, returns it as-is.
    /// Otherwise, returns path relative to config directory.
    pub fn log_file_path(&self) -> Result<PathBuf> {
        let log_path = Path::new(&self.log_file);
        if log_path.is_absolute() {
            Ok(log_path.to_path_buf())
        } else {
            Ok(Self::app_config_dir()?.join(log_path))
        }
    }

    fn app_config_dir() -> Result<PathBuf> {
        let config_dir =
            config_dir().ok_or_else(|| anyhow::anyhow!("Failed to determine config directory"))?;
        Ok(config_dir.join("company-tui"))
    }
}

/// Strip `//` line comments that are not inside a string.
///
/// Quote tracking is simplified and does not handle escaped quotes.
fn strip_comments(content: &str) -> String {
    content
        .lines()
        .map(|line| {
            line.match_indices("//")
                .map(|(pos, _)| pos)
                .find(|&pos| line[..pos].matches('"').count() % 2 == 0)
                .map_or(line, |pos| line[..pos].trim_end())
        })
        .collect::<Vec<_>>()
        .join("\n")
}
