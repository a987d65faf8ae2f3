use anyhow::{Result, anyhow};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::clients::catalog::ClientFilter;
use crate::model::platform::{Maturity, Platform};

const APP_NAME: &str = "matrixto-clients";

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    pub general: GeneralConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize)]
pub struct GeneralConfig {
    pub show_experimental: bool,
    pub min_maturity: Maturity,
    #[serde(default)]
    pub platforms: Vec<Platform>,
}

#[derive(Debug, Deserialize)]
pub struct LoggingConfig {
    pub filter: String,
    #[serde(default)]
    pub directory: Option<String>,
}

impl AppConfig {
    /// Load configuration with layering: defaults → user config.
    pub fn load() -> Result<Self> {
        let user_path = directories::ProjectDirs::from("", "", APP_NAME)
            .map(|proj_dirs| proj_dirs.config_dir().join("config.toml"));
        Self::load_layered(user_path.as_deref())
    }

    /// Defaults, fully replaced by `user_path` when that file exists.
    pub fn load_layered(user_path: Option<&Path>) -> Result<Self> {
        let mut config = Self::defaults()?;

        if let Some(config_path) = user_path.filter(|path| path.exists()) {
            config = Self::read(config_path)?;
            tracing::debug!("loaded user config from {}", config_path.display());
        }

        config.expand_paths()?;
        Ok(config)
    }

    /// Load an explicit config file instead of the user's default location.
    pub fn load_from(path: &Path) -> Result<Self> {
        let mut config = Self::read(path)?;
        config.expand_paths()?;
        Ok(config)
    }

    pub fn defaults() -> Result<Self> {
        let defaults = include_str!("../../config/default.toml");
        Ok(toml::from_str(defaults)?)
    }

    fn read(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .map_err(|err| anyhow!("{}: {err}", path.display()))?;
        toml::from_str(&raw).map_err(|err| anyhow!("{}: {err}", path.display()))
    }

    fn expand_paths(&mut self) -> Result<()> {
        if let Some(dir) = self.logging.directory.as_mut() {
            *dir = expand_tilde(dir)?;
        }
        Ok(())
    }

    /// Where the rolling log file lives.
    pub fn log_dir(&self) -> PathBuf {
        if let Some(dir) = self.logging.directory.as_ref() {
            return PathBuf::from(dir);
        }

        directories::ProjectDirs::from("", "", APP_NAME)
            .map(|d| d.data_dir().to_path_buf())
            .unwrap_or_else(|| std::env::temp_dir().join(APP_NAME))
    }

    pub fn client_filter(&self) -> ClientFilter {
        ClientFilter {
            show_experimental: self.general.show_experimental,
            min_maturity: self.general.min_maturity,
            platforms: self.general.platforms.clone(),
        }
    }
}

fn dirs_home() -> Option<PathBuf> {
    directories::BaseDirs::new().map(|d| d.home_dir().to_path_buf())
}

/// Expands a leading `~` or `~/`. Other `~user` forms are left alone.
fn expand_tilde(path: &str) -> Result<String> {
    if path != "~" && !path.starts_with("~/") {
        return Ok(path.to_string());
    }

    let home = dirs_home().ok_or_else(|| anyhow!("cannot determine home directory"))?;
    Ok(path.replacen('~', &home.to_string_lossy(), 1))
}
