//! [`NavigationSession`]: `Idle` / `Active(route)`.
//!
//! | Call                | Idle                      | Active                                   |
//! |---------------------|---------------------------|------------------------------------------|
//! | `start(route)`      | → Active, `started`       | route replaced, `started` again          |
//! | `update_position`   | no-op                     | re-measure, `updated`, maybe `reached`   |
//! | `stop()`            | no-op                     | → Idle, `ended`                          |
//!
//! Arrival never ends the session by itself.  Whoever handles
//! `on_destination_reached` decides when to call `stop()`, and can still read
//! the final route until then.  While the user stays inside the radius every
//! update reports arrival again.

use tracing::{debug, info};

use cm_campus::CampusDataset;
use cm_core::{Coordinates, PlaceId, RoomId};

use crate::{calculate_route, Destination, DestinationKind, NavResult, NavigationObserver, Route};

/// Default arrival radius, metres.
pub const DEFAULT_ARRIVAL_RADIUS_M: f64 = 15.0;

#[derive(Clone, Debug, PartialEq)]
pub enum NavigationState {
    Idle,
    Active(Route),
}

/// Reported when the user comes within the arrival radius of a building
/// destination.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Arrival {
    pub building_id: PlaceId,
    /// Set when the destination was a room inside `building_id`.
    pub room_id:     Option<RoomId>,
}

/// Display-ready summary of the current destination.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DestinationInfo {
    pub name:  String,
    pub floor: Option<i32>,
}

pub struct NavigationSession<D: CampusDataset> {
    dataset:          D,
    arrival_radius_m: f64,
    state:            NavigationState,
}

impl<D: CampusDataset> NavigationSession<D> {
    pub fn new(dataset: D) -> Self {
        Self {
            dataset,
            arrival_radius_m: DEFAULT_ARRIVAL_RADIUS_M,
            state: NavigationState::Idle,
        }
    }

    pub fn with_arrival_radius(mut self, meters: f64) -> Self {
        self.arrival_radius_m = meters;
        self
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    pub fn is_navigating(&self) -> bool {
        matches!(self.state, NavigationState::Active(_))
    }

    /// Snapshot of the active route.
    pub fn route(&self) -> Option<Route> {
        match &self.state {
            NavigationState::Active(route) => Some(route.clone()),
            NavigationState::Idle => None,
        }
    }

    pub fn arrival_radius_m(&self) -> f64 {
        self.arrival_radius_m
    }

    pub fn dataset(&self) -> &D {
        &self.dataset
    }

    // ── Operations ────────────────────────────────────────────────────────

    /// [`calculate_route`] against this session's dataset.  Does not change
    /// session state.
    pub fn calculate_route(&self, origin: Coordinates, kind: DestinationKind, id: &str) -> NavResult<Route> {
        calculate_route(&self.dataset, origin, kind, id)
    }

    pub fn start<O: NavigationObserver>(&mut self, route: Route, observer: &mut O) {
        info!(
            destination = route.destination_id(),
            kind        = %route.destination_kind(),
            distance_m  = route.distance_m,
            "navigation started",
        );
        observer.on_navigation_started(&route);
        self.state = NavigationState::Active(route);
    }

    /// Re-measure the active route from `position` and check for arrival.
    ///
    /// Returns the arrival (also sent to the observer) when `position` is
    /// strictly within the radius of a building destination.
    pub fn update_position<O: NavigationObserver>(&mut self, position: Coordinates, observer: &mut O) -> Option<Arrival> {
        let NavigationState::Active(route) = &mut self.state else {
            return None;
        };
        *route = route.from_origin(position);
        observer.on_route_updated(route);

        // Strict `<`: a NaN distance from a bad fix is never an arrival.
        let inside = route.distance_m < self.arrival_radius_m;
        if !inside {
            return None;
        }
        let arrival = resolve_arrival(&self.dataset, &route.target)?;
        info!(building = %arrival.building_id, room = ?arrival.room_id, distance_m = route.distance_m, "destination reached");
        observer.on_destination_reached(route, &arrival);
        Some(arrival)
    }

    /// End navigation.  A no-op (and no event) when already idle.
    pub fn stop<O: NavigationObserver>(&mut self, observer: &mut O) {
        if let NavigationState::Active(route) = std::mem::replace(&mut self.state, NavigationState::Idle) {
            info!(destination = route.destination_id(), "navigation ended");
            observer.on_navigation_ended();
        }
    }

    /// Name (and floor, for rooms) of the active destination.  `None` when
    /// idle or when the destination no longer resolves.
    pub fn destination_info(&self) -> Option<DestinationInfo> {
        let NavigationState::Active(route) = &self.state else {
            return None;
        };
        let info = match &route.target {
            Destination::Place(id) => self.dataset.place(id.as_str()).map(|p| DestinationInfo {
                name:  p.name.clone(),
                floor: None,
            }),
            Destination::Room(id) => self.dataset.room(id.as_str()).map(|r| DestinationInfo {
                name:  r.display_name(),
                floor: Some(r.floor),
            }),
        };
        if info.is_none() {
            debug!(destination = route.destination_id(), "destination no longer in dataset");
        }
        info
    }
}

/// Rooms arrive at their building; places only count when they are buildings.
fn resolve_arrival<D: CampusDataset>(dataset: &D, target: &Destination) -> Option<Arrival> {
    match target {
        Destination::Room(id) => dataset.room(id.as_str()).map(|room| Arrival {
            building_id: room.building_id.clone(),
            room_id:     Some(room.id.clone()),
        }),
        Destination::Place(id) => dataset
            .place(id.as_str())
            .filter(|place| place.is_building())
            .map(|place| Arrival { building_id: place.id.clone(), room_id: None }),
    }
}
