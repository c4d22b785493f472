//! Where gridock keeps its grid config and log files
//!
//! - Unix/macOS: `$XDG_CONFIG_HOME/gridock/` or `~/.config/gridock/`
//! - Windows: `%APPDATA%\gridock\`

use std::{env, fs, path::PathBuf};

use anyhow::Context;

const APP_DIR: &str = "gridock";

/// Prefix of the daily-rotated log files in [`logs_dir`]
pub const LOG_FILE_PREFIX: &str = "gridock.log";

pub fn config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        env::var("APPDATA")
            .ok()
            .map(|appdata| PathBuf::from(appdata).join(APP_DIR))
    }

    #[cfg(not(target_os = "windows"))]
    {
        env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
            .map(|config| config.join(APP_DIR))
    }
}

/// The grid config read by [`crate::config::GridConfig::load`]
pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.yaml"))
}

pub fn logs_dir() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("logs"))
}

/// Create the logs directory if needed and return it
pub fn ensure_logs_dir() -> anyhow::Result<PathBuf> {
    let logs = logs_dir().context("No config directory available")?;
    fs::create_dir_all(&logs)
        .with_context(|| format!("Failed to create directory {}", logs.display()))?;
    Ok(logs)
}
