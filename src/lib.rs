// Tab Item Library
// Presentation engine for one selectable item of a horizontal tab bar

// Core infrastructure - route model and compiled defaults
pub mod core;

// Tab item engine - focus, variants, label, accessibility, layout, render
pub mod item;

// Runtime configuration - YAML tab bar description
pub mod config;

// Configuration validation
pub mod config_validation;

// Application constants
pub mod constants;

// Re-export commonly used items for convenience
pub use core::{BasicRoute, NavigationState, Route, Scene};
pub use item::{AccessibilityDescriptor, LabelContent, RenderProps, RenderStrategy, TabBarItem};
pub use constants::*;
