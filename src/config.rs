// Configuration loading module
// Runtime description of a tab bar: colors, press feedback and routes

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use thiserror::Error;

use crate::constants::DEFAULT_CONFIG_PATH;
use crate::core::{BasicRoute, NavigationState};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    pub tab_bar: TabBarConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TabBarConfig {
    #[serde(default)]
    pub active_color: Option<String>,
    #[serde(default)]
    pub inactive_color: Option<String>,
    #[serde(default)]
    pub press_color: Option<String>,
    #[serde(default)]
    pub press_opacity: Option<f32>,
    #[serde(default)]
    pub initial_index: usize,
    pub routes: Vec<TabConfig>,
}

/// One route plus how its item is laid out
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TabConfig {
    #[serde(flatten)]
    pub route: BasicRoute,
    /// Fixed width in cells; the item flex-fills when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f32>,
}

impl TabBarConfig {
    /// Navigation state holding every configured route, focused on `initial_index`
    pub fn navigation_state(&self) -> NavigationState<BasicRoute> {
        NavigationState::new(
            self.routes.iter().map(|tab| tab.route.clone()).collect(),
            self.initial_index,
        )
    }

    /// Width configured for the route with `key`
    pub fn width_of(&self, key: &str) -> Option<f32> {
        self.routes
            .iter()
            .find(|tab| tab.route.key == key)
            .and_then(|tab| tab.width)
    }
}

pub fn default_config_path() -> PathBuf {
    let mut default_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    default_path.push(DEFAULT_CONFIG_PATH);
    default_path
}

pub fn load_config(config_path: Option<PathBuf>) -> Result<AppConfig, ConfigError> {
    let path = config_path.unwrap_or_else(default_config_path);

    let contents = fs::read_to_string(&path).map_err(|source| ConfigError::Io {
        path: path.clone(),
        source,
    })?;
    let config = parse_config(&contents)?;
    tracing::debug!(path = %path.display(), routes = config.tab_bar.routes.len(), "loaded config");
    Ok(config)
}

/// Parse a config document; sections other than `tab_bar` are ignored
pub fn parse_config(contents: &str) -> Result<AppConfig, ConfigError> {
    Ok(serde_yaml::from_str(contents)?)
}
