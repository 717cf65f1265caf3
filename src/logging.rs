//! Log file setup.
//!
//! The terminal is owned by the TUI, so diagnostics go to a file instead.

use crate::config::Config;
use anyhow::{Context, Result};
use std::fs::{self, OpenOptions};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber.
///
/// # Arguments
/// * `config` - Application configuration (log file and level)
///
/// # Returns
/// * `Result<()>` - Success or error
///
/// # Details
/// Appends to the configured log file, creating its directory if needed.
/// `log_level` is parsed as an `EnvFilter` directive.
pub fn init(config: &Config) -> Result<()> {
    let log_path = config.log_file_path()?;
    if let Some(parent) = log_path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .with_context(|| format!("Failed to open log file: {}", log_path.display()))?;

    let filter = EnvFilter::try_new(&config.log_level)
        .with_context(|| format!("Invalid log level: {}", config.log_level))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install logger: {}", e))?;

    Ok(())
}
