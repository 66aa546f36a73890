// Elements module
// Renderable node types produced by components

pub mod node;
pub mod touchable;

pub use node::{Node, Text, View};
pub use touchable::{
    Accessibility, AccessibilityRole, AccessibilityState, AccessibilityTrait, Callback,
    TouchHandlers, Touchable,
};
