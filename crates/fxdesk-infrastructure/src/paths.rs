//! Unified path management for fxdesk configuration files.
//!
//! # Directory Structure
//!
//! ```text
//! ~/.config/fxdesk/            # Config directory (platform default)
//! ├── config.toml              # Application configuration
//! └── logs/                    # Application logs
//!     └── fxdesk.log.YYYY-MM-DD
//! ```

use std::path::PathBuf;

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Home directory could not be determined.
    HomeDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::HomeDirNotFound => write!(f, "Cannot find home directory"),
        }
    }
}

impl std::error::Error for PathError {}

impl From<PathError> for fxdesk_core::FxError {
    fn from(err: PathError) -> Self {
        fxdesk_core::FxError::config(err.to_string())
    }
}

const APP_NAME: &str = "fxdesk";

/// Path resolution for fxdesk (XDG on Linux, the platform default elsewhere).
pub struct FxPaths;

impl FxPaths {
    /// Returns the fxdesk configuration directory (e.g. `~/.config/fxdesk/`).
    pub fn config_dir() -> Result<PathBuf, PathError> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_NAME))
            .ok_or(PathError::HomeDirNotFound)
    }

    /// Returns the path to config.toml.
    pub fn config_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Returns the directory that holds rolling log files.
    pub fn log_dir() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("logs"))
    }
}
