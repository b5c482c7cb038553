//! Routes: a straight-line leg from the user to a resolved destination.

use std::fmt;

use cm_campus::CampusDataset;
use cm_core::{format_distance, walking_time_label, CompassPoint, Coordinates, PlaceId, RoomId};

use crate::{NavError, NavResult};

// ── Destination ───────────────────────────────────────────────────────────────

/// What the caller asked to navigate to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum DestinationKind {
    Place,
    Room,
}

impl DestinationKind {
    pub fn as_str(self) -> &'static str {
        match self {
            DestinationKind::Place => "place",
            DestinationKind::Room  => "room",
        }
    }
}

impl fmt::Display for DestinationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A resolved destination id.  Rooms are walked to via their building.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Destination {
    Place(PlaceId),
    Room(RoomId),
}

impl Destination {
    pub fn kind(&self) -> DestinationKind {
        match self {
            Destination::Place(_) => DestinationKind::Place,
            Destination::Room(_)  => DestinationKind::Room,
        }
    }

    pub fn id(&self) -> &str {
        match self {
            Destination::Place(id) => id.as_str(),
            Destination::Room(id)  => id.as_str(),
        }
    }
}

// ── Route ─────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Route {
    pub origin:      Coordinates,
    /// Where the route ends: the place itself, or a room's building.
    pub destination: Coordinates,
    pub target:      Destination,
    /// Great-circle distance origin → destination, metres.
    pub distance_m:  f64,
    /// Initial bearing origin → destination, degrees in `[0, 360)`.
    pub bearing_deg: f64,
}

impl Route {
    pub(crate) fn measure(origin: Coordinates, destination: Coordinates, target: Destination) -> Self {
        Self {
            origin,
            destination,
            target,
            distance_m:  origin.distance_m(destination),
            bearing_deg: origin.bearing_deg(destination),
        }
    }

    /// The same route re-measured from a new origin.
    pub(crate) fn from_origin(&self, origin: Coordinates) -> Self {
        Self::measure(origin, self.destination, self.target.clone())
    }

    pub fn destination_kind(&self) -> DestinationKind {
        self.target.kind()
    }

    pub fn destination_id(&self) -> &str {
        self.target.id()
    }

    pub fn compass(&self) -> CompassPoint {
        CompassPoint::from_bearing(self.bearing_deg)
    }

    /// "Head northeast", etc.
    pub fn direction_text(&self) -> &'static str {
        self.compass().heading_phrase()
    }

    pub fn distance_label(&self) -> String {
        format_distance(self.distance_m)
    }

    pub fn walking_time_label(&self) -> String {
        walking_time_label(self.distance_m)
    }
}

/// Resolve `id` against `dataset` and measure the leg from `origin`.
///
/// A room destination resolves to its building's coordinates.  Pure: no
/// session state is touched.
pub fn calculate_route<D: CampusDataset + ?Sized>(
    dataset: &D,
    origin:  Coordinates,
    kind:    DestinationKind,
    id:      &str,
) -> NavResult<Route> {
    let unresolved = || NavError::UnresolvedDestination { kind, id: id.to_owned() };

    let (destination, target) = match kind {
        DestinationKind::Place => {
            let place = dataset.place(id).ok_or_else(unresolved)?;
            (place.coordinates, Destination::Place(place.id.clone()))
        }
        DestinationKind::Room => {
            let room     = dataset.room(id).ok_or_else(unresolved)?;
            let building = dataset.place(room.building_id.as_str()).ok_or_else(unresolved)?;
            (building.coordinates, Destination::Room(room.id.clone()))
        }
    };
    Ok(Route::measure(origin, destination, target))
}
