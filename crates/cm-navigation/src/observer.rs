use crate::{Arrival, Route};

/// Callbacks invoked by [`NavigationSession`][crate::NavigationSession].
///
/// All methods have default no-op implementations.
pub trait NavigationObserver {
    /// A route was started (or replaced while already navigating).
    fn on_navigation_started(&mut self, _route: &Route) {}

    /// The active route was re-measured from a new position.
    fn on_route_updated(&mut self, _route: &Route) {}

    /// The user is within the arrival radius.  The session is still active;
    /// call `stop()` from here (or later) to end it.
    fn on_destination_reached(&mut self, _route: &Route, _arrival: &Arrival) {}

    fn on_navigation_ended(&mut self) {}
}

/// A [`NavigationObserver`] that does nothing.
pub struct NoopNavigationObserver;

impl NavigationObserver for NoopNavigationObserver {}

impl<O: NavigationObserver + ?Sized> NavigationObserver for &mut O {
    fn on_navigation_started(&mut self, route: &Route) {
        (**self).on_navigation_started(route)
    }

    fn on_route_updated(&mut self, route: &Route) {
        (**self).on_route_updated(route)
    }

    fn on_destination_reached(&mut self, route: &Route, arrival: &Arrival) {
        (**self).on_destination_reached(route, arrival)
    }

    fn on_navigation_ended(&mut self) {
        (**self).on_navigation_ended()
    }
}
