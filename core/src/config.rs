//! Analyzer settings loading
//!
//! Settings are read from a TOML file, either an explicit path or
//! `<config_dir>/clash/settings.toml`. A missing default file is not an
//! error: the in-game rule constants apply.

use std::fs;
use std::path::{Path, PathBuf};

use clash_types::AnalyzerSettings;
use thiserror::Error;

/// Errors that can occur during settings loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error reading {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Parse error in {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("Invalid setting `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Default settings file location
pub fn default_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("clash").join("settings.toml"))
}

/// Load settings from `path`, or from the default location when `None`
pub fn load_settings(path: Option<&Path>) -> Result<AnalyzerSettings, ConfigError> {
    match path {
        Some(path) => load_file(path),
        None => match default_settings_path() {
            Some(path) if path.exists() => load_file(&path),
            _ => {
                tracing::debug!("no settings file, using defaults");
                Ok(AnalyzerSettings::default())
            }
        },
    }
}

/// Load and validate a single settings file
pub fn load_file(path: &Path) -> Result<AnalyzerSettings, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|e| ConfigError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    let settings = toml::from_str(&contents).map_err(|e| ConfigError::Parse {
        path: path.to_path_buf(),
        source: e,
    })?;
    validate(&settings)?;

    tracing::info!(path = ?path, "loaded analyzer settings");
    Ok(settings)
}

/// Reject values that would make the detectors meaningless
pub fn validate(settings: &AnalyzerSettings) -> Result<(), ConfigError> {
    if !settings.streak_window_secs.is_finite() || settings.streak_window_secs <= 0.0 {
        return Err(ConfigError::Invalid {
            field: "streak_window_secs",
            reason: format!("must be a positive number, got {}", settings.streak_window_secs),
        });
    }
    if settings.window_buckets_per_sec == 0 {
        return Err(ConfigError::Invalid {
            field: "window_buckets_per_sec",
            reason: "must be at least 1".to_string(),
        });
    }
    if settings.wipe_roster_size == 0 {
        return Err(ConfigError::Invalid {
            field: "wipe_roster_size",
            reason: "must be at least 1".to_string(),
        });
    }
    Ok(())
}
