// Focus Resolver
// Two focus signals: the caller's route index drives variant selection,
// the route's position in the navigation state drives accessibility state

use crate::core::{NavigationState, Route};

/// Both focus signals for one item
///
/// They agree whenever the caller passes the route's true position. When they
/// disagree, each consumer keeps reading its own signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FocusSignals {
    /// `route_index == navigation_state.index`; selects the visual variant
    pub shows_focused_variant: bool,
    /// `index_of(route) == navigation_state.index`; selected state for assistive tech
    pub is_focused: bool,
}

impl FocusSignals {
    pub fn disagree(&self) -> bool {
        self.shows_focused_variant != self.is_focused
    }
}

/// Route position in the navigation state equals the focused index
///
/// A route missing from the state is never focused.
pub fn is_focused<R: Route>(navigation_state: &NavigationState<R>, route: &R) -> bool {
    navigation_state.index_of(route) == Some(navigation_state.index)
}

/// Caller-asserted position equals the focused index
pub fn shows_focused_variant<R>(navigation_state: &NavigationState<R>, route_index: usize) -> bool {
    route_index == navigation_state.index
}

pub fn resolve_focus<R: Route>(
    navigation_state: &NavigationState<R>,
    route: &R,
    route_index: usize,
) -> FocusSignals {
    let signals = FocusSignals {
        shows_focused_variant: shows_focused_variant(navigation_state, route_index),
        is_focused: is_focused(navigation_state, route),
    };

    if signals.disagree() {
        tracing::debug!(
            route = route.key(),
            route_index,
            position = ?navigation_state.index_of(route),
            focused_index = navigation_state.index,
            "route index disagrees with navigation state"
        );
    }

    signals
}
