//! Position samples, as delivered by a provider and as seen by observers.

use cm_core::{Coordinates, PlaceId};

/// One sample straight from the location provider.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RawFix {
    pub coordinates:  Coordinates,
    /// Horizontal accuracy radius, metres.
    pub accuracy:     f64,
    /// Provider timestamp, Unix epoch milliseconds.
    pub timestamp_ms: i64,
}

impl RawFix {
    pub fn new(coordinates: Coordinates, accuracy: f64, timestamp_ms: i64) -> Self {
        Self { coordinates, accuracy, timestamp_ms }
    }
}

/// A processed fix: the raw sample plus the building the user is standing
/// next to, if any.
#[derive(Clone, Debug, PartialEq)]
pub struct PositionFix {
    pub coordinates:  Coordinates,
    /// Never negative.
    pub accuracy:     f64,
    pub timestamp_ms: i64,
    pub nearby:       Option<PlaceId>,
}

impl PositionFix {
    pub(crate) fn from_raw(raw: RawFix, nearby: Option<PlaceId>) -> Self {
        Self {
            coordinates:  raw.coordinates,
            accuracy:     raw.accuracy.max(0.0),
            timestamp_ms: raw.timestamp_ms,
            nearby,
        }
    }
}
