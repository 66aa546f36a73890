// Tab Item module
// One selectable item of a horizontal tab bar: props, focus, variants, label,
// accessibility, layout, and the render pass that ties them together

pub mod accessibility;
pub mod assembler;
pub mod focus;
pub mod label;
pub mod layout;
pub mod props;
pub mod styles;
pub mod variant;

pub use accessibility::{build_accessibility, AccessibilityDescriptor};
pub use focus::{is_focused, resolve_focus, shows_focused_variant, FocusSignals};
pub use label::{default_label_style, DefaultLabel};
pub use layout::{is_width_set, resolve_container_style};
pub use props::{BadgeRenderer, LabelContent, Lookup, RenderProps, RenderStrategy};
pub use styles::ItemStyles;
pub use variant::compose_variants;

use std::fmt;
use std::rc::Rc;

use ratatui::layout::Rect;
use view_components::{Callback, Node, StyleProp};

use crate::constants::{DEFAULT_ACTIVE_COLOR, DEFAULT_INACTIVE_COLOR};
use crate::core::{NavigationState, Route, Scene};

/// Props of one tab item
///
/// Built with `new` and the `with_*` methods, then rendered with
/// [`TabBarItem::render`]. Nothing is cached between renders.
pub struct TabBarItem<'a, R: Route> {
    pub(crate) route: &'a R,
    pub(crate) navigation_state: &'a NavigationState<R>,
    /// Position of `route` as the caller knows it
    pub(crate) route_index: usize,
    pub(crate) active_color: Option<String>,
    pub(crate) inactive_color: Option<String>,
    pub(crate) press_color: Option<String>,
    pub(crate) press_opacity: Option<f32>,
    pub(crate) get_label_text: Option<Lookup<R, LabelContent>>,
    pub(crate) get_accessible: Option<Lookup<R, bool>>,
    pub(crate) get_accessibility_label: Option<Lookup<R, String>>,
    pub(crate) get_test_id: Option<Lookup<R, String>>,
    pub(crate) render_label: Option<Rc<dyn RenderStrategy<R>>>,
    pub(crate) render_icon: Option<Rc<dyn RenderStrategy<R>>>,
    pub(crate) render_badge: Option<BadgeRenderer<R>>,
    pub(crate) label_style: StyleProp,
    pub(crate) style: StyleProp,
    pub(crate) on_layout: Option<Callback<Rect>>,
    pub(crate) on_press: Option<Callback>,
    pub(crate) on_long_press: Option<Callback>,
}

impl<'a, R: Route> TabBarItem<'a, R> {
    pub fn new(route: &'a R, navigation_state: &'a NavigationState<R>, route_index: usize) -> Self {
        Self {
            route,
            navigation_state,
            route_index,
            active_color: None,
            inactive_color: None,
            press_color: None,
            press_opacity: None,
            get_label_text: None,
            get_accessible: None,
            get_accessibility_label: None,
            get_test_id: None,
            render_label: None,
            render_icon: None,
            render_badge: None,
            label_style: StyleProp::None,
            style: StyleProp::None,
            on_layout: None,
            on_press: None,
            on_long_press: None,
        }
    }

    pub fn with_active_color(mut self, color: impl Into<String>) -> Self {
        self.active_color = Some(color.into());
        self
    }

    pub fn with_inactive_color(mut self, color: impl Into<String>) -> Self {
        self.inactive_color = Some(color.into());
        self
    }

    pub fn with_press_color(mut self, color: impl Into<String>) -> Self {
        self.press_color = Some(color.into());
        self
    }

    pub fn with_press_opacity(mut self, opacity: f32) -> Self {
        self.press_opacity = Some(opacity);
        self
    }

    pub fn with_label_text<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&Scene<'_, R>) -> Option<LabelContent> + 'static,
    {
        self.get_label_text = Some(Rc::new(lookup));
        self
    }

    pub fn with_accessible<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&Scene<'_, R>) -> Option<bool> + 'static,
    {
        self.get_accessible = Some(Rc::new(lookup));
        self
    }

    pub fn with_accessibility_label<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&Scene<'_, R>) -> Option<String> + 'static,
    {
        self.get_accessibility_label = Some(Rc::new(lookup));
        self
    }

    pub fn with_test_id<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&Scene<'_, R>) -> Option<String> + 'static,
    {
        self.get_test_id = Some(Rc::new(lookup));
        self
    }

    pub fn with_render_icon<F>(self, render: F) -> Self
    where
        F: Fn(RenderProps<'_, R>) -> Option<Node> + 'static,
    {
        self.with_icon_strategy(Rc::new(render))
    }

    pub fn with_icon_strategy(mut self, strategy: Rc<dyn RenderStrategy<R>>) -> Self {
        self.render_icon = Some(strategy);
        self
    }

    pub fn with_render_label<F>(self, render: F) -> Self
    where
        F: Fn(RenderProps<'_, R>) -> Option<Node> + 'static,
    {
        self.with_label_strategy(Rc::new(render))
    }

    pub fn with_label_strategy(mut self, strategy: Rc<dyn RenderStrategy<R>>) -> Self {
        self.render_label = Some(strategy);
        self
    }

    pub fn with_render_badge<F>(mut self, render: F) -> Self
    where
        F: Fn(&Scene<'_, R>) -> Option<Node> + 'static,
    {
        self.render_badge = Some(Rc::new(render));
        self
    }

    pub fn with_label_style(mut self, style: impl Into<StyleProp>) -> Self {
        self.label_style = style.into();
        self
    }

    pub fn with_style(mut self, style: impl Into<StyleProp>) -> Self {
        self.style = style.into();
        self
    }

    pub fn on_layout(mut self, callback: Callback<Rect>) -> Self {
        self.on_layout = Some(callback);
        self
    }

    pub fn on_press(mut self, callback: Callback) -> Self {
        self.on_press = Some(callback);
        self
    }

    pub fn on_long_press(mut self, callback: Callback) -> Self {
        self.on_long_press = Some(callback);
        self
    }

    pub fn route(&self) -> &R {
        self.route
    }

    pub fn active_color(&self) -> &str {
        self.active_color.as_deref().unwrap_or(DEFAULT_ACTIVE_COLOR)
    }

    pub fn inactive_color(&self) -> &str {
        self.inactive_color.as_deref().unwrap_or(DEFAULT_INACTIVE_COLOR)
    }

    // Lookups fall back to the route's own accessors when not supplied

    pub(crate) fn label_text(&self, scene: &Scene<'_, R>) -> Option<LabelContent> {
        match &self.get_label_text {
            Some(lookup) => lookup(scene),
            None => scene.route.title().map(LabelContent::from),
        }
    }

    pub(crate) fn accessible(&self, scene: &Scene<'_, R>) -> Option<bool> {
        match &self.get_accessible {
            Some(lookup) => lookup(scene),
            None => scene.route.accessible(),
        }
    }

    pub(crate) fn accessibility_label(&self, scene: &Scene<'_, R>) -> Option<String> {
        match &self.get_accessibility_label {
            Some(lookup) => lookup(scene),
            None => scene.route.accessibility_label().map(str::to_string),
        }
    }

    pub(crate) fn test_id(&self, scene: &Scene<'_, R>) -> Option<String> {
        match &self.get_test_id {
            Some(lookup) => lookup(scene),
            None => scene.route.test_id().map(str::to_string),
        }
    }
}

impl<R: Route> fmt::Debug for TabBarItem<'_, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TabBarItem")
            .field("route", &self.route)
            .field("route_index", &self.route_index)
            .field("focused_index", &self.navigation_state.index)
            .field("active_color", &self.active_color())
            .field("inactive_color", &self.inactive_color())
            .field("render_icon", &self.render_icon.is_some())
            .field("render_label", &self.render_label.is_some())
            .field("render_badge", &self.render_badge.is_some())
            .field("style", &self.style)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::core::BasicRoute;
    use view_components::Style;

    /// Routes `a` (titled "Home") and `b` (titled "Feed")
    pub fn two_tabs(index: usize) -> NavigationState<BasicRoute> {
        NavigationState::new(
            vec![
                BasicRoute::new("a").with_title("Home").with_test_id("tab-a"),
                BasicRoute::new("b").with_title("Feed").with_test_id("tab-b"),
            ],
            index,
        )
    }

    /// Icon strategy whose text says which variant it is
    pub fn marker_icon(props: RenderProps<'_, BasicRoute>) -> Option<Node> {
        let marker = if props.focused { "icon:focused" } else { "icon:unfocused" };
        Some(Node::text(marker, Style::new().with_color(props.color)))
    }

    /// Label strategy whose text says which variant it is
    pub fn marker_label(props: RenderProps<'_, BasicRoute>) -> Option<Node> {
        let marker = if props.focused { "label:focused" } else { "label:unfocused" };
        Some(Node::text(marker, Style::new().with_color(props.color)))
    }
}
