// View components library
// Node tree, style system and touch primitives consumed by the tab item engine

// Core infrastructure (styles, colors)
pub mod core;
// Renderable elements (views, text, touchables)
pub mod elements;
// Terminal painting and hit-testing
pub mod utilities;

pub use core::*;
pub use elements::*;
pub use utilities::*;
