// Variant Composer
// Renders the focused and unfocused variants and keeps exactly one

use view_components::{Node, Style};

/// Produce both variants through `render(focused, color)` and keep one
///
/// The focused variant is rendered first with `active_color`, then the
/// unfocused one with `inactive_color`. When either comes back empty the whole
/// element is omitted. Otherwise the kept variant is wrapped twice: an inner
/// plain container and an outer container carrying `container_style`.
pub fn compose_variants(
    render: impl Fn(bool, &str) -> Option<Node>,
    active_color: &str,
    inactive_color: &str,
    shows_focused_variant: bool,
    container_style: Style,
) -> Option<Node> {
    let focused = render(true, active_color);
    let unfocused = render(false, inactive_color);

    match (focused, unfocused) {
        (Some(focused), Some(unfocused)) => {
            let selected = if shows_focused_variant { focused } else { unfocused };
            Some(Node::view(container_style, vec![Node::wrap(selected)]))
        }
        _ => None,
    }
}
