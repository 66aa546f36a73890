// Item Styles
// Base style table for the parts of a tab item

use view_components::{Align, Position, Style};

use crate::core::ItemMetrics;

/// Base styles applied beneath caller-supplied styles
pub struct ItemStyles;

impl ItemStyles {
    // === Content ===

    pub fn label() -> Style {
        Style::new()
            .with_margin(ItemMetrics::default().label_margin)
            .with_background_color("transparent")
    }

    pub fn icon() -> Style {
        Style::new().with_margin(ItemMetrics::default().icon_margin)
    }

    // === Containers ===

    pub fn item() -> Style {
        let metrics = ItemMetrics::default();
        Style::new()
            .with_flex(1.0)
            .with_align_items(Align::Center)
            .with_justify_content(Align::Center)
            .with_padding(metrics.item_padding)
            .with_min_height(metrics.item_min_height)
    }

    /// Overlay pinned to the item's top-right corner
    pub fn badge() -> Style {
        Style::new()
            .with_position(Position::Absolute)
            .with_top(0.0)
            .with_right(0.0)
    }
}
