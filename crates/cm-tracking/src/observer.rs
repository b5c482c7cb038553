//! Position observer trait.

use cm_core::PlaceId;

use crate::{PositionError, PositionFix};

/// Callbacks invoked by [`PositionStream`][crate::PositionStream] for every
/// processed fix.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  For a single fix the order is always
/// `on_location` then (if the nearby building changed) `on_nearby_changed`.
pub trait PositionObserver {
    /// Called for every fix while tracking.
    fn on_location(&mut self, _fix: &PositionFix) {}

    /// Called only when the nearby building differs from the previous fix's.
    /// `None` means the user walked away from every building.
    fn on_nearby_changed(&mut self, _nearby: Option<&PlaceId>) {}

    /// Called for provider errors after the first fix.  Tracking continues.
    fn on_watch_error(&mut self, _error: &PositionError) {}
}

/// A [`PositionObserver`] that does nothing.
pub struct NoopPositionObserver;

impl PositionObserver for NoopPositionObserver {}

impl<O: PositionObserver + ?Sized> PositionObserver for &mut O {
    fn on_location(&mut self, fix: &PositionFix) {
        (**self).on_location(fix)
    }

    fn on_nearby_changed(&mut self, nearby: Option<&PlaceId>) {
        (**self).on_nearby_changed(nearby)
    }

    fn on_watch_error(&mut self, error: &PositionError) {
        (**self).on_watch_error(error)
    }
}

/// Fan out to two observers, first `A` then `B`.
impl<A: PositionObserver, B: PositionObserver> PositionObserver for (A, B) {
    fn on_location(&mut self, fix: &PositionFix) {
        self.0.on_location(fix);
        self.1.on_location(fix);
    }

    fn on_nearby_changed(&mut self, nearby: Option<&PlaceId>) {
        self.0.on_nearby_changed(nearby);
        self.1.on_nearby_changed(nearby);
    }

    fn on_watch_error(&mut self, error: &PositionError) {
        self.0.on_watch_error(error);
        self.1.on_watch_error(error);
    }
}
