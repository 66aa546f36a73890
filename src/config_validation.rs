// Configuration validation module

use std::collections::HashSet;
use std::path::PathBuf;

use crate::config::{load_config, AppConfig, ConfigError};

/// Load configuration and reject tab bars the items cannot be built from
pub fn load_and_validate_config(config_path: Option<PathBuf>) -> Result<AppConfig, ConfigError> {
    let config = load_config(config_path).map_err(|e| {
        tracing::warn!(error = %e, "failed to load configuration");
        e
    })?;

    validate(&config).map_err(|e| {
        tracing::warn!(error = %e, "configuration rejected");
        e
    })?;

    Ok(config)
}

/// Routes must be non-empty with unique keys, and `initial_index` must
/// address one of them
pub fn validate(config: &AppConfig) -> Result<(), ConfigError> {
    let tab_bar = &config.tab_bar;

    if tab_bar.routes.is_empty() {
        return Err(ConfigError::Invalid("tab_bar.routes is empty".to_string()));
    }

    let mut seen = HashSet::new();
    for tab in &tab_bar.routes {
        if !seen.insert(tab.route.key.as_str()) {
            return Err(ConfigError::Invalid(format!(
                "duplicate route key '{}'",
                tab.route.key
            )));
        }
    }

    if tab_bar.initial_index >= tab_bar.routes.len() {
        return Err(ConfigError::Invalid(format!(
            "initial_index {} out of range for {} routes",
            tab_bar.initial_index,
            tab_bar.routes.len()
        )));
    }

    if let Some(opacity) = tab_bar.press_opacity {
        if !(0.0..=1.0).contains(&opacity) {
            return Err(ConfigError::Invalid(format!(
                "press_opacity {opacity} outside 0..=1"
            )));
        }
    }

    Ok(())
}
