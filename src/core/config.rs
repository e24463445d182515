use super::state::{BCV_URI, CacheState};
use anyhow::{Context, Result};
use chrono::NaiveTime;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};
use tracing::debug;
use url::Url;

const DATA_FILE_NAME: &str = "dobsdata.json";

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct SourceConfig {
    pub url: Url,
    pub refresh_time_utc: NaiveTime,
}

impl Default for SourceConfig {
    fn default() -> Self {
        let state = CacheState::default();
        SourceConfig {
            url: state.source_uri,
            refresh_time_utc: state.refresh_time_utc,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct AppConfig {
    /// Where the cached rates are stored
    #[serde(default)]
    pub data_path: Option<String>,
    /// Decimals the rates are rounded to before converting
    #[serde(default)]
    pub rate_precision: Option<u32>,
    #[serde(default)]
    pub source: SourceConfig,
}

impl AppConfig {
    /// Loads the config from the default location, falling back to defaults if
    /// there is no file there.
    pub fn load() -> Result<Self> {
        debug!("Loading default config");
        let config_path = Self::default_config_path()?;
        if !config_path.exists() {
            debug!("No config at {}, using defaults", config_path.display());
            return Ok(Self::default());
        }
        Self::load_from_path(&config_path)
    }

    pub fn default_config_path() -> Result<PathBuf> {
        let proj_dirs =
            ProjectDirs::from("", "", "dobs").context("Could not determine project directories")?;
        Ok(proj_dirs.config_dir().join("config.yaml"))
    }

    pub fn data_path(&self) -> Result<PathBuf> {
        if let Some(custom_path) = &self.data_path {
            return Ok(PathBuf::from(custom_path));
        }
        let proj_dirs =
            ProjectDirs::from("", "", "dobs").context("Could not determine project directories")?;
        Ok(proj_dirs.data_dir().join(DATA_FILE_NAME))
    }

    /// State used when nothing usable is cached yet.
    pub fn default_state(&self) -> CacheState {
        CacheState::new(self.source.refresh_time_utc, self.source.url.clone())
    }

    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let config_str = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Self = serde_yaml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;
        debug!("Successfully loaded config");
        Ok(config)
    }
}
