//! CSV dataset loader.
//!
//! # CSV format
//!
//! Places, one row per place, in priority order:
//!
//! ```csv
//! id,name,short_name,kind,lat,lng,description
//! main-block,Main Block,Principal's Office,building,10.0538,76.6192,Administration
//! canteen,Canteen,,facility,10.0528,76.6198,
//! ```
//!
//! Rooms, one row per room:
//!
//! ```csv
//! id,number,name,kind,floor,building_id
//! l201,L201,Classroom,classroom,2,cs-block
//! ```
//!
//! Empty `short_name` / `description` cells mean "none".  `kind` values are
//! the lowercase names of [`PlaceKind`] / [`RoomKind`].

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use cm_core::Coordinates;

use crate::{Campus, CampusResult, Place, PlaceKind, Room, RoomKind};

// ── CSV records ───────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct PlaceRecord {
    id:          String,
    name:        String,
    short_name:  Option<String>,
    kind:        String,
    lat:         f64,
    lng:         f64,
    description: Option<String>,
}

#[derive(Deserialize)]
struct RoomRecord {
    id:          String,
    number:      String,
    name:        String,
    kind:        String,
    floor:       i32,
    building_id: String,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load and index a campus from a places CSV and a rooms CSV.
pub fn load_campus(places_path: &Path, rooms_path: &Path) -> CampusResult<Campus> {
    let places = load_places_reader(std::fs::File::open(places_path)?)?;
    let rooms  = load_rooms_reader(std::fs::File::open(rooms_path)?)?;
    tracing::info!(
        places = places.len(),
        rooms  = rooms.len(),
        path   = %places_path.display(),
        "loaded campus dataset",
    );
    Campus::new(places, rooms)
}

/// Parse place rows from any `Read` source, preserving row order.
pub fn load_places_reader<R: Read>(reader: R) -> CampusResult<Vec<Place>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut places = Vec::new();
    for result in csv_reader.deserialize::<PlaceRecord>() {
        let rec  = result?;
        let kind = rec.kind.parse::<PlaceKind>()?;
        places.push(Place {
            id:          rec.id.into(),
            name:        rec.name,
            short_name:  non_empty(rec.short_name),
            kind,
            coordinates: Coordinates::new(rec.lat, rec.lng),
            description: non_empty(rec.description),
        });
    }
    Ok(places)
}

/// Parse room rows from any `Read` source, preserving row order.
pub fn load_rooms_reader<R: Read>(reader: R) -> CampusResult<Vec<Room>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut rooms = Vec::new();
    for result in csv_reader.deserialize::<RoomRecord>() {
        let rec  = result?;
        let kind = rec.kind.parse::<RoomKind>()?;
        rooms.push(Room::new(rec.id, rec.number, rec.name, kind, rec.floor, rec.building_id));
    }
    Ok(rooms)
}

fn non_empty(s: Option<String>) -> Option<String> {
    s.filter(|v| !v.trim().is_empty())
}
