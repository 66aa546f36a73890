// Item Defaults
// Defaults compiled from config.yaml at build time
// Modify config.yaml and rebuild to change these values

// Include the auto-generated config from build.rs
pub mod compiled {
    include!(concat!(env!("OUT_DIR"), "/compiled_config.rs"));
}

/// Default colors and base metrics for tab items
/// Values are compiled in from config.yaml at build time
#[derive(Debug, Clone, PartialEq)]
pub struct ItemDefaults {
    /// Color of the focused variant when the caller sets none
    pub active_color: String,

    /// Color of the unfocused variant when the caller sets none
    pub inactive_color: String,

    /// Base metrics used by the item style table
    pub metrics: ItemMetrics,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemMetrics {
    /// Margin around the default text label
    pub label_margin: f32,

    /// Margin around the icon container
    pub icon_margin: f32,

    /// Padding inside the item container
    pub item_padding: f32,

    /// Minimum height of the item container
    pub item_min_height: f32,
}

impl Default for ItemMetrics {
    fn default() -> Self {
        Self {
            label_margin: compiled::LABEL_MARGIN,
            icon_margin: compiled::ICON_MARGIN,
            item_padding: compiled::ITEM_PADDING,
            item_min_height: compiled::ITEM_MIN_HEIGHT,
        }
    }
}

impl Default for ItemDefaults {
    fn default() -> Self {
        Self {
            active_color: compiled::DEFAULT_ACTIVE_COLOR.to_string(),
            inactive_color: compiled::DEFAULT_INACTIVE_COLOR.to_string(),
            metrics: ItemMetrics::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_bundled_config() {
        let defaults = ItemDefaults::default();
        assert_eq!(defaults.active_color, "rgba(255, 255, 255, 1)");
        assert_eq!(defaults.inactive_color, "rgba(255, 255, 255, 0.7)");
        assert_eq!(defaults.metrics.label_margin, 4.0);
        assert_eq!(defaults.metrics.item_min_height, 48.0);
    }
}
