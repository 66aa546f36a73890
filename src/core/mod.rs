// Core infrastructure module
// Route model and compiled defaults that the item engine depends on

pub mod app_config;
pub mod route;

pub use app_config::{ItemDefaults, ItemMetrics};
pub use route::{BasicRoute, NavigationState, Route, Scene};
