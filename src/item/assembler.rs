// Render Assembler
// Composes icon, label and badge into the item tree and wraps it in a touchable

use view_components::{Node, PointerEvents, Style, TouchHandlers, Touchable, View};

use super::accessibility::build_accessibility;
use super::focus::resolve_focus;
use super::label::DefaultLabel;
use super::layout::resolve_container_style;
use super::props::RenderProps;
use super::styles::ItemStyles;
use super::variant::compose_variants;
use super::TabBarItem;
use crate::constants::DELAY_PRESS_IN_MS;
use crate::core::{Route, Scene};

impl<'a, R: Route> TabBarItem<'a, R> {
    /// Run one render pass
    ///
    /// The result is a touchable wrapping a container that ignores input and
    /// stacks, in order, the icon, the label and the badge overlay. Identical
    /// props always produce equal trees.
    pub fn render(&self) -> Node {
        let focus = resolve_focus(self.navigation_state, self.route, self.route_index);
        let active_color = self.active_color();
        let inactive_color = self.inactive_color();

        tracing::trace!(
            route = self.route.key(),
            route_index = self.route_index,
            focused = focus.is_focused,
            "rendering tab item"
        );

        let icon = self.render_icon.as_ref().and_then(|strategy| {
            compose_variants(
                |focused, color| strategy.render(RenderProps { route: self.route, focused, color }),
                active_color,
                inactive_color,
                focus.shows_focused_variant,
                ItemStyles::icon(),
            )
        });

        // The default label reads icon presence, so the icon is composed first
        let label = match &self.render_label {
            Some(strategy) => compose_variants(
                |focused, color| strategy.render(RenderProps { route: self.route, focused, color }),
                active_color,
                inactive_color,
                focus.shows_focused_variant,
                Style::default(),
            ),
            None => {
                let fallback = DefaultLabel::new(self, icon.is_some());
                compose_variants(
                    |_, color| fallback.render(color),
                    active_color,
                    inactive_color,
                    focus.shows_focused_variant,
                    Style::default(),
                )
            }
        };

        let scene = Scene::new(self.route);
        let descriptor = build_accessibility(self, &scene, focus.is_focused);
        let badge = self.render_badge.as_ref().and_then(|render| render(&scene));

        let mut children = Vec::with_capacity(3);
        children.extend(icon);
        children.extend(label);
        if let Some(badge) = badge {
            children.push(Node::view(ItemStyles::badge(), vec![badge]));
        }

        let mut item_style = ItemStyles::item();
        item_style.merge(&self.style.flatten());

        let container = Node::View(View {
            style: item_style,
            pointer_events: PointerEvents::None,
            children,
        });

        Node::Touchable(Touchable {
            borderless: true,
            test_id: descriptor.test_id,
            accessibility: descriptor.accessibility,
            press_color: self.press_color.clone(),
            press_opacity: self.press_opacity,
            delay_press_in: DELAY_PRESS_IN_MS,
            style: resolve_container_style(&self.style),
            handlers: TouchHandlers {
                on_press: self.on_press.clone(),
                on_long_press: self.on_long_press.clone(),
                on_layout: self.on_layout.clone(),
            },
            child: Box::new(container),
        })
    }
}
