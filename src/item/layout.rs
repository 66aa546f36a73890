// Layout Style Resolver
// Decides whether an item flex-fills or honors an explicit width

use view_components::{Style, StyleProp};

/// `{flex: 1}` unless the flattened caller style sets a width
///
/// Width may come from any fragment of a composed style, so the check runs on
/// the flattened record.
pub fn resolve_container_style(style: &StyleProp) -> Option<Style> {
    if is_width_set(&style.flatten()) {
        None
    } else {
        Some(Style::new().with_flex(1.0))
    }
}

pub fn is_width_set(style: &Style) -> bool {
    style.width.is_some()
}
