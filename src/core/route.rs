// Routes and Navigation State
// Route identity, the shared navigation state, and per-render scenes

use serde::{Deserialize, Serialize};
use std::fmt;

/// A navigable destination shown as one tab
///
/// Identity is the key: two routes are the same tab when their keys match.
/// The descriptive accessors feed the default lookups of a tab item when the
/// caller does not supply its own.
pub trait Route: fmt::Debug {
    /// Identity token, unique within a navigation state
    fn key(&self) -> &str;

    fn title(&self) -> Option<&str> {
        None
    }

    fn accessible(&self) -> Option<bool> {
        None
    }

    fn accessibility_label(&self) -> Option<&str> {
        None
    }

    fn test_id(&self) -> Option<&str> {
        None
    }
}

/// Ordered routes plus the index of the focused one
///
/// Keeping `index` in range and keys unique is the owner's job; lookups here
/// tolerate both being violated.
#[derive(Debug, Clone, PartialEq)]
pub struct NavigationState<R> {
    pub index: usize,
    pub routes: Vec<R>,
}

impl<R: Route> NavigationState<R> {
    pub fn new(routes: Vec<R>, index: usize) -> Self {
        Self { index, routes }
    }

    /// Position of `route` by key identity, `None` if it is not in the state
    pub fn index_of(&self, route: &R) -> Option<usize> {
        self.routes
            .iter()
            .position(|candidate| candidate.key() == route.key())
    }

    pub fn focused_route(&self) -> Option<&R> {
        self.routes.get(self.index)
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

/// View binding of one route for a single render pass
#[derive(Debug)]
pub struct Scene<'a, R> {
    pub route: &'a R,
}

impl<'a, R> Scene<'a, R> {
    pub fn new(route: &'a R) -> Self {
        Self { route }
    }
}

// Derives would require `R: Clone`; a scene only holds a reference
impl<R> Clone for Scene<'_, R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for Scene<'_, R> {}

/// Plain data route used by configuration files and the binaries
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BasicRoute {
    pub key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Glyph shown as the tab icon
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Badge text shown in the top-right corner
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accessible: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accessibility_label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub test_id: Option<String>,
}

impl BasicRoute {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ..Self::default()
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn with_badge(mut self, badge: impl Into<String>) -> Self {
        self.badge = Some(badge.into());
        self
    }

    pub fn with_test_id(mut self, test_id: impl Into<String>) -> Self {
        self.test_id = Some(test_id.into());
        self
    }

    pub fn with_accessibility_label(mut self, label: impl Into<String>) -> Self {
        self.accessibility_label = Some(label.into());
        self
    }
}

impl Route for BasicRoute {
    fn key(&self) -> &str {
        &self.key
    }

    fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    fn accessible(&self) -> Option<bool> {
        self.accessible
    }

    fn accessibility_label(&self) -> Option<&str> {
        self.accessibility_label.as_deref()
    }

    fn test_id(&self) -> Option<&str> {
        self.test_id.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> NavigationState<BasicRoute> {
        NavigationState::new(vec![BasicRoute::new("a"), BasicRoute::new("b")], 1)
    }

    #[test]
    fn test_index_of_uses_key_identity() {
        let nav = state();
        assert_eq!(nav.index_of(&BasicRoute::new("a")), Some(0));
        // A copy with different data is still the same tab
        assert_eq!(nav.index_of(&BasicRoute::new("b").with_title("B")), Some(1));
        assert_eq!(nav.index_of(&BasicRoute::new("zzz")), None);
    }

    #[test]
    fn test_focused_route_tolerates_out_of_range() {
        let mut nav = state();
        assert_eq!(nav.focused_route().map(|r| r.key()), Some("b"));
        nav.index = 7;
        assert!(nav.focused_route().is_none());
    }

    #[test]
    fn test_basic_route_accessors() {
        let route = BasicRoute::new("inbox")
            .with_title("Inbox")
            .with_test_id("tab-inbox")
            .with_accessibility_label("Inbox, 3 unread");

        assert_eq!(Route::title(&route), Some("Inbox"));
        assert_eq!(Route::test_id(&route), Some("tab-inbox"));
        assert_eq!(Route::accessibility_label(&route), Some("Inbox, 3 unread"));
        assert_eq!(Route::accessible(&route), None);
    }
}
