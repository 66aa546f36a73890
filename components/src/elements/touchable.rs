// Touchable
// Interactive region props: accessibility attributes, press feedback, and event callbacks

use std::fmt;
use std::rc::Rc;

use ratatui::layout::Rect;
use serde::Serialize;

use super::node::Node;
use crate::core::Style;

/// Event callback forwarded to a touchable
///
/// Two callbacks are equal only when they share the same allocation, which is
/// what forwarding a caller's callback unchanged produces.
pub struct Callback<A = ()>(Rc<dyn Fn(A)>);

impl<A> Callback<A> {
    pub fn new(f: impl Fn(A) + 'static) -> Self {
        Self(Rc::new(f))
    }

    pub fn call(&self, arg: A) {
        (self.0)(arg)
    }
}

impl<A> Clone for Callback<A> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<A> PartialEq for Callback<A> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl<A> fmt::Debug for Callback<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Callback({:p})", Rc::as_ptr(&self.0))
    }
}

/// Press, long-press and layout callbacks of one touchable
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TouchHandlers {
    pub on_press: Option<Callback>,
    pub on_long_press: Option<Callback>,
    /// Invoked with the measured bounds after layout
    pub on_layout: Option<Callback<Rect>>,
}

impl TouchHandlers {
    pub fn press(&self) {
        if let Some(cb) = &self.on_press {
            cb.call(());
        }
    }

    pub fn long_press(&self) {
        if let Some(cb) = &self.on_long_press {
            cb.call(());
        }
    }

    pub fn layout(&self, bounds: Rect) {
        if let Some(cb) = &self.on_layout {
            cb.call(bounds);
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessibilityRole {
    #[default]
    None,
    Button,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessibilityTrait {
    Button,
    Selected,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessibilityState {
    Selected,
}

/// Assistive-technology metadata attached to an interactive element
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Accessibility {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accessible: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub role: AccessibilityRole,
    pub component_type: AccessibilityRole,
    pub traits: Vec<AccessibilityTrait>,
    pub states: Vec<AccessibilityState>,
}

impl Accessibility {
    pub fn is_selected(&self) -> bool {
        self.states.contains(&AccessibilityState::Selected)
    }
}

/// Interactive region wrapping exactly one child
///
/// Gesture recognition itself belongs to the host; this record only carries
/// what the host needs to recognise taps and report layout.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Touchable {
    /// Press feedback is not clipped to the region bounds
    pub borderless: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test_id: Option<String>,
    pub accessibility: Accessibility,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub press_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub press_opacity: Option<f32>,
    /// Delay before press feedback starts, in milliseconds
    pub delay_press_in: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<Style>,
    #[serde(skip)]
    pub handlers: TouchHandlers,
    pub child: Box<Node>,
}

impl Touchable {
    pub fn new(child: Node) -> Self {
        Self {
            borderless: false,
            test_id: None,
            accessibility: Accessibility::default(),
            press_color: None,
            press_opacity: None,
            delay_press_in: 0,
            style: None,
            handlers: TouchHandlers::default(),
            child: Box::new(child),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_callback_identity_equality() {
        let cb = Callback::new(|_: ()| {});
        let same = cb.clone();
        let other = Callback::new(|_: ()| {});

        assert_eq!(cb, same);
        assert_ne!(cb, other);
    }

    #[test]
    fn test_handlers_dispatch() {
        let presses = Rc::new(Cell::new(0));
        let seen = Rc::new(Cell::new(Rect::default()));

        let handlers = TouchHandlers {
            on_press: Some(Callback::new({
                let presses = Rc::clone(&presses);
                move |_: ()| presses.set(presses.get() + 1)
            })),
            on_long_press: None,
            on_layout: Some(Callback::new({
                let seen = Rc::clone(&seen);
                move |rect: Rect| seen.set(rect)
            })),
        };

        handlers.press();
        handlers.long_press();
        handlers.layout(Rect::new(1, 2, 3, 4));

        assert_eq!(presses.get(), 1);
        assert_eq!(seen.get(), Rect::new(1, 2, 3, 4));
    }
}
