//! Configuration service implementation.
//!
//! Loads the root configuration from `~/.config/fxdesk/config.toml` and
//! layers environment overrides on top.

use crate::paths::FxPaths;
use fxdesk_core::config::RootConfig;
use fxdesk_core::{FxError, Result};
use std::path::PathBuf;

pub const ENV_BACKEND_URL: &str = "FXDESK_BACKEND_URL";
pub const ENV_ACCESS_TOKEN: &str = "FXDESK_ACCESS_TOKEN";
pub const ENV_DEBOUNCE_MS: &str = "FXDESK_DEBOUNCE_MS";

/// Loads `RootConfig` from a TOML file.
///
/// A missing file is not an error: defaults are used instead.
#[derive(Debug, Clone)]
pub struct ConfigService {
    path: PathBuf,
}

impl ConfigService {
    /// Creates a ConfigService reading the default config.toml.
    pub fn new() -> Result<Self> {
        Ok(Self {
            path: FxPaths::config_file()?,
        })
    }

    /// Creates a ConfigService with a custom path.
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Reads the config file, falling back to defaults when it does not exist.
    pub fn load(&self) -> Result<RootConfig> {
        if !self.path.exists() {
            tracing::debug!(
                "[ConfigService] No config at {:?}, using defaults",
                self.path
            );
            return Ok(RootConfig::default());
        }

        let content = std::fs::read_to_string(&self.path)?;
        let config: RootConfig = toml::from_str(&content)?;
        tracing::info!("[ConfigService] Loaded config from {:?}", self.path);
        Ok(config)
    }

    /// Reads the config file, then applies process environment overrides.
    pub fn load_with_env(&self) -> Result<RootConfig> {
        let mut config = self.load()?;
        apply_env_overrides(&mut config, |key| std::env::var(key).ok())?;
        Ok(config)
    }
}

/// Applies `FXDESK_*` overrides looked up through `lookup`.
pub fn apply_env_overrides<F>(config: &mut RootConfig, lookup: F) -> Result<()>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(url) = lookup(ENV_BACKEND_URL) {
        config.backend_url = url;
    }
    if let Some(token) = lookup(ENV_ACCESS_TOKEN) {
        config.access_token = Some(token);
    }
    if let Some(raw) = lookup(ENV_DEBOUNCE_MS) {
        config.debounce_ms = raw
            .trim()
            .parse()
            .map_err(|_| FxError::config(format!("{ENV_DEBOUNCE_MS} must be an integer, got '{raw}'")))?;
    }
    Ok(())
}
