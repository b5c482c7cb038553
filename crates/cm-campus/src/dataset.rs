//! The dataset capability and its in-memory implementation.

use std::collections::HashMap;
use std::rc::Rc;
use std::sync::Arc;

use cm_core::{PlaceId, RoomId};

use crate::{CampusError, CampusResult, Place, PlaceKind, Room};

// ── CampusDataset trait ───────────────────────────────────────────────────────

/// Read-only view of the place and room tables.
///
/// The navigation core depends on this trait rather than on [`Campus`] so an
/// application can back it with whatever store it already has.  Slices are
/// returned in priority order: consumers that take "the first match" rely on
/// it.
pub trait CampusDataset {
    fn place(&self, id: &str) -> Option<&Place>;

    fn room(&self, id: &str) -> Option<&Room>;

    fn places(&self) -> &[Place];

    fn rooms(&self) -> &[Room];
}

impl<T: CampusDataset + ?Sized> CampusDataset for &T {
    fn place(&self, id: &str) -> Option<&Place> {
        (**self).place(id)
    }

    fn room(&self, id: &str) -> Option<&Room> {
        (**self).room(id)
    }

    fn places(&self) -> &[Place] {
        (**self).places()
    }

    fn rooms(&self) -> &[Room] {
        (**self).rooms()
    }
}

macro_rules! forward_dataset {
    ($ptr:ident) => {
        impl<T: CampusDataset + ?Sized> CampusDataset for $ptr<T> {
            fn place(&self, id: &str) -> Option<&Place> {
                (**self).place(id)
            }

            fn room(&self, id: &str) -> Option<&Room> {
                (**self).room(id)
            }

            fn places(&self) -> &[Place] {
                (**self).places()
            }

            fn rooms(&self) -> &[Room] {
                (**self).rooms()
            }
        }
    };
}

forward_dataset!(Arc);
forward_dataset!(Rc);

// ── Campus ────────────────────────────────────────────────────────────────────

/// Places and rooms held in `Vec`s (priority order) plus id → index maps.
///
/// Immutable after construction.  Do not construct directly; use
/// [`Campus::new`], [`crate::mace_campus`], or [`crate::load_campus`].
#[derive(Clone, Debug)]
pub struct Campus {
    places:      Vec<Place>,
    rooms:       Vec<Room>,
    place_index: HashMap<PlaceId, usize>,
    room_index:  HashMap<RoomId, usize>,
}

impl Campus {
    /// Index `places` and `rooms`.
    ///
    /// # Errors
    ///
    /// - [`CampusError::DuplicatePlace`] / [`CampusError::DuplicateRoom`] if
    ///   an id repeats.
    /// - [`CampusError::UnknownBuilding`] if a room names a building id that
    ///   is not among `places`.
    pub fn new(places: Vec<Place>, rooms: Vec<Room>) -> CampusResult<Self> {
        let mut place_index = HashMap::with_capacity(places.len());
        for (i, p) in places.iter().enumerate() {
            if place_index.insert(p.id.clone(), i).is_some() {
                return Err(CampusError::DuplicatePlace(p.id.to_string()));
            }
        }

        let mut room_index = HashMap::with_capacity(rooms.len());
        for (i, r) in rooms.iter().enumerate() {
            if !place_index.contains_key(r.building_id.as_str()) {
                return Err(CampusError::UnknownBuilding {
                    room:     r.id.to_string(),
                    building: r.building_id.to_string(),
                });
            }
            if room_index.insert(r.id.clone(), i).is_some() {
                return Err(CampusError::DuplicateRoom(r.id.to_string()));
            }
        }

        tracing::debug!(places = places.len(), rooms = rooms.len(), "campus dataset indexed");

        Ok(Self { places, rooms, place_index, room_index })
    }

    // ── Kind / floor views ────────────────────────────────────────────────

    /// All places of `kind`, in dataset order.
    pub fn places_of_kind(&self, kind: PlaceKind) -> impl Iterator<Item = &Place> + '_ {
        self.places.iter().filter(move |p| p.kind == kind)
    }

    pub fn buildings(&self) -> impl Iterator<Item = &Place> + '_ {
        self.places_of_kind(PlaceKind::Building)
    }

    pub fn rooms_on_floor(&self, floor: i32) -> impl Iterator<Item = &Room> + '_ {
        self.rooms.iter().filter(move |r| r.floor == floor)
    }

    pub fn rooms_in<'a>(&'a self, building: &'a str) -> impl Iterator<Item = &'a Room> + 'a {
        self.rooms.iter().filter(move |r| r.building_id == building)
    }

    /// Distinct floor levels with at least one room in `building`, ascending.
    /// Empty for buildings without an indoor plan.
    pub fn floors_of(&self, building: &str) -> Vec<i32> {
        let mut floors: Vec<i32> = self.rooms_in(building).map(|r| r.floor).collect();
        floors.sort_unstable();
        floors.dedup();
        floors
    }

    /// `true` if `building` has rooms and therefore a floor plan to show.
    pub fn has_floor_plan(&self, building: &str) -> bool {
        self.rooms_in(building).next().is_some()
    }

    // ── Room lookups ──────────────────────────────────────────────────────

    /// Case-insensitive lookup by door label ("l201" finds "L201").
    pub fn room_by_number(&self, number: &str) -> Option<&Room> {
        self.rooms.iter().find(|r| r.number.eq_ignore_ascii_case(number))
    }

    /// Rooms whose number or name contains `query`, case-insensitively.
    pub fn search_rooms(&self, query: &str) -> Vec<&Room> {
        let q = query.to_lowercase();
        self.rooms
            .iter()
            .filter(|r| r.number.to_lowercase().contains(&q) || r.name.to_lowercase().contains(&q))
            .collect()
    }
}

impl CampusDataset for Campus {
    fn place(&self, id: &str) -> Option<&Place> {
        self.place_index.get(id).map(|&i| &self.places[i])
    }

    fn room(&self, id: &str) -> Option<&Room> {
        self.room_index.get(id).map(|&i| &self.rooms[i])
    }

    fn places(&self) -> &[Place] {
        &self.places
    }

    fn rooms(&self) -> &[Room] {
        &self.rooms
    }
}
