use crate::theme::ThemeChoice;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::warn;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config: {0}")]
    Io(#[from] io::Error),
    #[error("could not parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub theme: ThemeChoice,
    pub default_tab: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            theme: ThemeChoice::Light,
            default_tab: "overview".to_string(),
        }
    }
}

pub fn default_config_path() -> PathBuf {
    PathBuf::from("learnboard.json")
}

/// Missing file means first run; any other failure degrades to defaults with
/// a warning rather than refusing to start.
pub fn load_or_default(path: &Path) -> DashboardConfig {
    match try_load(path) {
        Ok(config) => config,
        Err(ConfigError::Io(e)) if e.kind() == io::ErrorKind::NotFound => {
            DashboardConfig::default()
        }
        Err(e) => {
            warn!(path = %path.display(), "falling back to default config: {e}");
            DashboardConfig::default()
        }
    }
}

pub fn try_load(path: &Path) -> Result<DashboardConfig, ConfigError> {
    let contents = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}

pub fn save(config: &DashboardConfig, path: &Path) -> Result<(), ConfigError> {
    let json = serde_json::to_string_pretty(config)?;
    fs::write(path, json)?;
    Ok(())
}
