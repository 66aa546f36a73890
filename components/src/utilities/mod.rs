// Utilities module
// Terminal painting and hit-testing for node trees

pub mod paint;

pub use paint::{hit_test, measure, paint_node, slot_constraint, HitRegion};
