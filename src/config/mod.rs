//! Configuration module
//!
//! Handles loading and saving of studylog.toml configuration files.
//! Defines Config, Limits, and Goal types.

mod types;

pub use types::{Config, MAX_DATES_RANGE};

use crate::error::{Result, StudyLogError};
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

/// Config file looked up in the working directory when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "studylog.toml";

/// Load configuration from a TOML file
pub fn load(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path).map_err(|e| {
        StudyLogError::Config(format!(
            "Cannot read config from '{}': {}. Run 'studylog config init' to create one.",
            path.display(),
            e
        ))
    })?;

    let config: Config = toml::from_str(&content)?;
    config.validate().map_err(|e| {
        StudyLogError::Config(format!("Invalid config '{}': {}", path.display(), e))
    })?;
    Ok(config)
}

/// Resolve the configuration for a run.
///
/// An explicit path must exist. Without one, `studylog.toml` in the working
/// directory is used when present and the built-in defaults otherwise.
pub fn resolve(path: Option<PathBuf>) -> Result<Config> {
    match path {
        Some(path) => load(&path),
        None => {
            let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
            if default_path.exists() {
                load(&default_path)
            } else {
                debug!("no {} found, using defaults", DEFAULT_CONFIG_FILE);
                Ok(Config::default())
            }
        }
    }
}

/// Save configuration to a TOML file
pub fn save(config: &Config, path: &Path) -> Result<()> {
    let toml = toml::to_string_pretty(config)
        .map_err(|e| StudyLogError::Config(format!("Failed to serialize config: {}", e)))?;

    // Create parent directories if needed
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, toml)?;
    Ok(())
}
