// Accessibility Descriptor Builder
// Resolves accessible flag, label, role, traits, states and test id for one item

use serde::Serialize;
use view_components::{Accessibility, AccessibilityRole, AccessibilityState, AccessibilityTrait};

use super::TabBarItem;
use crate::core::{Route, Scene};

/// Everything the touch delegate needs for assistive technology and tests
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AccessibilityDescriptor {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test_id: Option<String>,
    #[serde(flatten)]
    pub accessibility: Accessibility,
}

/// Build the descriptor for `scene`
///
/// The label comes from the accessibility-label lookup, falling back to the
/// label-text lookup only when the first yields nothing. A label-text lookup
/// that yields a pre-built node contributes no label.
pub fn build_accessibility<R: Route>(
    item: &TabBarItem<'_, R>,
    scene: &Scene<'_, R>,
    is_focused: bool,
) -> AccessibilityDescriptor {
    let label = item
        .accessibility_label(scene)
        .or_else(|| item.label_text(scene).and_then(|content| content.into_text()));

    let (traits, states) = if is_focused {
        (
            vec![AccessibilityTrait::Button, AccessibilityTrait::Selected],
            vec![AccessibilityState::Selected],
        )
    } else {
        (vec![AccessibilityTrait::Button], Vec::new())
    };

    AccessibilityDescriptor {
        test_id: item.test_id(scene),
        accessibility: Accessibility {
            accessible: item.accessible(scene),
            label,
            role: AccessibilityRole::Button,
            component_type: AccessibilityRole::Button,
            traits,
            states,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{BasicRoute, NavigationState};
    use crate::item::LabelContent;
    use view_components::{Node, Style};

    fn nav(route: BasicRoute) -> NavigationState<BasicRoute> {
        NavigationState::new(vec![route], 0)
    }

    #[test]
    fn test_explicit_accessibility_label_wins() {
        let nav = nav(BasicRoute::new("inbox").with_title("Inbox"));
        let item = TabBarItem::new(&nav.routes[0], &nav, 0)
            .with_accessibility_label(|_| Some("Inbox, 3 unread".to_string()));

        let descriptor = build_accessibility(&item, &Scene::new(&nav.routes[0]), true);
        assert_eq!(descriptor.accessibility.label.as_deref(), Some("Inbox, 3 unread"));
    }

    #[test]
    fn test_falls_back_to_label_text() {
        let nav = nav(BasicRoute::new("home"));
        let item = TabBarItem::new(&nav.routes[0], &nav, 0)
            .with_accessibility_label(|_| None)
            .with_label_text(|_| Some(LabelContent::from("Home")));

        let descriptor = build_accessibility(&item, &Scene::new(&nav.routes[0]), false);
        assert_eq!(descriptor.accessibility.label.as_deref(), Some("Home"));
    }

    #[test]
    fn test_all_lookups_empty() {
        let nav = nav(BasicRoute::new("bare"));
        let item = TabBarItem::new(&nav.routes[0], &nav, 0);

        let descriptor = build_accessibility(&item, &Scene::new(&nav.routes[0]), false);
        assert_eq!(descriptor.test_id, None);
        assert_eq!(descriptor.accessibility.accessible, None);
        assert_eq!(descriptor.accessibility.label, None);
        assert_eq!(descriptor.accessibility.role, AccessibilityRole::Button);
    }

    #[test]
    fn test_prebuilt_label_node_gives_no_label() {
        let nav = nav(BasicRoute::new("custom"));
        let item = TabBarItem::new(&nav.routes[0], &nav, 0)
            .with_label_text(|_| Some(LabelContent::Node(Node::text("x", Style::default()))));

        let descriptor = build_accessibility(&item, &Scene::new(&nav.routes[0]), false);
        assert_eq!(descriptor.accessibility.label, None);
    }

    #[test]
    fn test_focus_controls_traits_and_states() {
        let nav = nav(BasicRoute::new("home").with_test_id("tab-home"));
        let item = TabBarItem::new(&nav.routes[0], &nav, 0).with_accessible(|_| Some(true));
        let scene = Scene::new(&nav.routes[0]);

        let focused = build_accessibility(&item, &scene, true);
        assert_eq!(
            focused.accessibility.traits,
            vec![AccessibilityTrait::Button, AccessibilityTrait::Selected]
        );
        assert_eq!(focused.accessibility.states, vec![AccessibilityState::Selected]);
        assert_eq!(focused.test_id.as_deref(), Some("tab-home"));
        assert_eq!(focused.accessibility.accessible, Some(true));

        let unfocused = build_accessibility(&item, &scene, false);
        assert_eq!(unfocused.accessibility.traits, vec![AccessibilityTrait::Button]);
        assert!(unfocused.accessibility.states.is_empty());
    }
}
