// Label Fallback Renderer
// Default label used when the caller supplies no label strategy

use view_components::{Node, Style, StyleProp};

use super::props::LabelContent;
use super::styles::ItemStyles;
use super::TabBarItem;
use crate::core::{Route, Scene};

/// Text label built from the item's label-text lookup
///
/// `has_icon` must reflect the icon composition of the same render pass, so
/// the icon has to be composed before this renderer is used.
pub struct DefaultLabel<'s, 'a, R: Route> {
    item: &'s TabBarItem<'a, R>,
    has_icon: bool,
}

impl<'s, 'a, R: Route> DefaultLabel<'s, 'a, R> {
    pub fn new(item: &'s TabBarItem<'a, R>, has_icon: bool) -> Self {
        Self { item, has_icon }
    }

    /// Text becomes a styled text node; a pre-built node passes through
    pub fn render(&self, color: &str) -> Option<Node> {
        match self.item.label_text(&Scene::new(self.item.route))? {
            LabelContent::Text(text) => Some(Node::text(
                text,
                default_label_style(self.has_icon, color, &self.item.label_style),
            )),
            LabelContent::Node(node) => Some(node),
        }
    }
}

/// Base label style, then no top margin next to an icon, then the variant
/// color, then the caller's label style
pub fn default_label_style(has_icon: bool, color: &str, label_style: &StyleProp) -> Style {
    StyleProp::from(vec![
        ItemStyles::label().into(),
        StyleProp::from(has_icon.then(|| Style::new().with_margin_top(0.0))),
        Style::new().with_color(color).into(),
        label_style.clone(),
    ])
    .flatten()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{BasicRoute, NavigationState};

    fn nav() -> NavigationState<BasicRoute> {
        NavigationState::new(vec![BasicRoute::new("home").with_title("Home")], 0)
    }

    #[test]
    fn test_text_label_styled_with_color() {
        let nav = nav();
        let item = TabBarItem::new(&nav.routes[0], &nav, 0);
        let node = DefaultLabel::new(&item, false).render("cyan").unwrap();

        let text = node.as_text().unwrap();
        assert_eq!(text.content, "Home");
        assert_eq!(text.style.color.as_deref(), Some("cyan"));
        assert_eq!(text.style.margin, Some(4.0));
        assert_eq!(text.style.margin_top, None);
    }

    #[test]
    fn test_icon_presence_suppresses_top_margin() {
        let style = default_label_style(true, "cyan", &StyleProp::None);
        assert_eq!(style.margin_top, Some(0.0));
    }

    #[test]
    fn test_caller_label_style_wins_over_color() {
        let style = default_label_style(false, "cyan", &Style::new().with_color("red").into());
        assert_eq!(style.color.as_deref(), Some("red"));
    }

    #[test]
    fn test_prebuilt_node_passes_through() {
        let nav = nav();
        let custom = Node::view(Style::new().with_width(3.0), vec![]);
        let item = TabBarItem::new(&nav.routes[0], &nav, 0).with_label_text({
            let custom = custom.clone();
            move |_| Some(LabelContent::Node(custom.clone()))
        });

        assert_eq!(DefaultLabel::new(&item, true).render("cyan"), Some(custom));
    }

    #[test]
    fn test_missing_text_renders_nothing() {
        let nav = NavigationState::new(vec![BasicRoute::new("untitled")], 0);
        let item = TabBarItem::new(&nav.routes[0], &nav, 0);
        assert!(DefaultLabel::new(&item, false).render("cyan").is_none());
    }
}
