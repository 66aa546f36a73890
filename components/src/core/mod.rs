// Core infrastructure module
// Style descriptions and color handling shared by every element

pub mod color;
pub mod style;

pub use color::parse_color;
pub use style::{Align, PointerEvents, Position, Style, StyleProp};
