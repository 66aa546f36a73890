// Application constants
// Named defaults substituted when a tab item leaves a field unset

use crate::core::app_config::compiled;

/// Focused variant color
pub const DEFAULT_ACTIVE_COLOR: &str = compiled::DEFAULT_ACTIVE_COLOR;

/// Unfocused variant color
pub const DEFAULT_INACTIVE_COLOR: &str = compiled::DEFAULT_INACTIVE_COLOR;

/// Press feedback starts immediately
pub const DELAY_PRESS_IN_MS: u32 = 0;

/// Default config file, relative to the crate root
pub const DEFAULT_CONFIG_PATH: &str = "src/config.yaml";
