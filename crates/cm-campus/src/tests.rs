//! Unit tests for cm-campus.

#[cfg(test)]
mod helpers {
    use cm_core::Coordinates;

    use crate::{Campus, Place, PlaceKind, Room, RoomKind};

    /// Two buildings, one landmark, two rooms in `hall`.
    pub fn tiny_campus() -> Campus {
        let places = vec![
            Place::new("hall", "Great Hall", PlaceKind::Building, Coordinates::new(1.0, 1.0))
                .with_short_name("GH"),
            Place::new("lab", "Lab Block", PlaceKind::Building, Coordinates::new(1.001, 1.0)),
            Place::new("fountain", "Fountain", PlaceKind::Landmark, Coordinates::new(1.0, 1.001)),
        ];
        let rooms = vec![
            Room::new("g1", "G101", "Lecture Theatre", RoomKind::Classroom, 1, "hall"),
            Room::new("g2", "G201", "Staff Room", RoomKind::Faculty, 2, "hall"),
        ];
        Campus::new(places, rooms).unwrap()
    }
}

// ── Campus construction & lookups ─────────────────────────────────────────────

#[cfg(test)]
mod campus {
    use std::sync::Arc;

    use cm_core::Coordinates;

    use crate::{Campus, CampusDataset, CampusError, Place, PlaceKind, Room, RoomKind};

    #[test]
    fn lookup_by_id() {
        let c = super::helpers::tiny_campus();
        assert_eq!(c.place("lab").unwrap().name, "Lab Block");
        assert_eq!(c.room("g2").unwrap().number, "G201");
        assert!(c.place("nope").is_none());
        assert!(c.room("hall").is_none());
    }

    #[test]
    fn places_keep_insertion_order() {
        let c = super::helpers::tiny_campus();
        let ids: Vec<&str> = c.places().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["hall", "lab", "fountain"]);
        let buildings: Vec<&str> = c.buildings().map(|p| p.id.as_str()).collect();
        assert_eq!(buildings, ["hall", "lab"]);
    }

    #[test]
    fn floors_and_rooms() {
        let c = super::helpers::tiny_campus();
        assert_eq!(c.floors_of("hall"), vec![1, 2]);
        assert!(c.floors_of("lab").is_empty());
        assert!(c.has_floor_plan("hall"));
        assert!(!c.has_floor_plan("fountain"));
        assert_eq!(c.rooms_on_floor(2).count(), 1);
        assert_eq!(c.rooms_in("hall").count(), 2);
    }

    #[test]
    fn room_number_is_case_insensitive() {
        let c = super::helpers::tiny_campus();
        assert_eq!(c.room_by_number("g101").unwrap().id, "g1");
        assert!(c.room_by_number("G999").is_none());
    }

    #[test]
    fn search_rooms_matches_number_or_name() {
        let c = super::helpers::tiny_campus();
        assert_eq!(c.search_rooms("staff").len(), 1);
        assert_eq!(c.search_rooms("G").len(), 2);
        assert!(c.search_rooms("zzz").is_empty());
    }

    #[test]
    fn duplicate_place_rejected() {
        let p = Place::new("a", "A", PlaceKind::Building, Coordinates::default());
        let err = Campus::new(vec![p.clone(), p], vec![]).unwrap_err();
        assert!(matches!(err, CampusError::DuplicatePlace(id) if id == "a"));
    }

    #[test]
    fn duplicate_room_rejected() {
        let p = Place::new("a", "A", PlaceKind::Building, Coordinates::default());
        let r = Room::new("r", "R1", "Room", RoomKind::Other, 1, "a");
        let err = Campus::new(vec![p], vec![r.clone(), r]).unwrap_err();
        assert!(matches!(err, CampusError::DuplicateRoom(_)));
    }

    #[test]
    fn room_in_unknown_building_rejected() {
        let r = Room::new("r", "R1", "Room", RoomKind::Other, 1, "ghost");
        let err = Campus::new(vec![], vec![r]).unwrap_err();
        assert!(matches!(err, CampusError::UnknownBuilding { building, .. } if building == "ghost"));
    }

    #[test]
    fn shared_pointers_are_datasets() {
        fn count<D: CampusDataset>(d: D) -> usize {
            d.places().len()
        }
        let c = Arc::new(super::helpers::tiny_campus());
        assert_eq!(count(Arc::clone(&c)), 3);
        assert_eq!(count(&*c), 3);
    }
}

// ── Built-in table ────────────────────────────────────────────────────────────

#[cfg(test)]
mod builtin {
    use crate::{mace_campus, CampusDataset, PlaceKind};

    #[test]
    fn table_sizes() {
        let c = mace_campus().unwrap();
        assert_eq!(c.places().len(), 20);
        assert_eq!(c.rooms().len(), 35);
        assert_eq!(c.buildings().count(), 7);
        assert_eq!(c.places_of_kind(PlaceKind::Entrance).count(), 1);
    }

    #[test]
    fn main_block_position() {
        let c = mace_campus().unwrap();
        let mb = c.place("main-block").unwrap();
        assert_eq!(mb.coordinates.lat, 10.0538);
        assert_eq!(mb.coordinates.lng, 76.6192);
        assert!(mb.is_building());
    }

    #[test]
    fn dms_positions_converted() {
        let c = mace_campus().unwrap();
        let cs = c.place("cs-block").unwrap();
        // 10°3'8.8" N, 76°37'7.1" E
        assert!((cs.coordinates.lat - 10.052_444).abs() < 1e-6);
        assert!((cs.coordinates.lng - 76.618_639).abs() < 1e-6);
    }

    #[test]
    fn cs_block_floors() {
        let c = mace_campus().unwrap();
        assert_eq!(c.floors_of("cs-block"), vec![2, 3]);
        assert_eq!(c.rooms_on_floor(2).count(), 19);
        assert_eq!(c.rooms_on_floor(3).count(), 16);
        assert_eq!(c.room("l216").unwrap().display_name(), "L216 - Library");
    }
}

// ── CSV loader ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod loader {
    use std::io::{Cursor, Write};

    use crate::{load_campus, load_places_reader, load_rooms_reader, CampusDataset, CampusError, PlaceKind, RoomKind};

    const PLACES: &str = "\
id,name,short_name,kind,lat,lng,description\n\
main-block,Main Block,Office,building,10.0538,76.6192,Administration\n\
canteen,Canteen,,facility,10.0528,76.6198,\n\
";

    const ROOMS: &str = "\
id,number,name,kind,floor,building_id\n\
m1,M101,Board Room,other,1,main-block\n\
m2,M102,Lab,lab,1,main-block\n\
";

    #[test]
    fn parse_places() {
        let places = load_places_reader(Cursor::new(PLACES)).unwrap();
        assert_eq!(places.len(), 2);
        assert_eq!(places[0].kind, PlaceKind::Building);
        assert_eq!(places[0].short_name.as_deref(), Some("Office"));
        assert_eq!(places[1].short_name, None);
        assert_eq!(places[1].description, None);
        assert_eq!(places[1].coordinates.lng, 76.6198);
    }

    #[test]
    fn parse_rooms() {
        let rooms = load_rooms_reader(Cursor::new(ROOMS)).unwrap();
        assert_eq!(rooms.len(), 2);
        assert_eq!(rooms[1].kind, RoomKind::Lab);
        assert_eq!(rooms[1].building_id, "main-block");
    }

    #[test]
    fn unknown_kind_is_parse_error() {
        let bad = "id,name,short_name,kind,lat,lng,description\nx,X,,castle,1.0,2.0,\n";
        let err = load_places_reader(Cursor::new(bad)).unwrap_err();
        assert!(matches!(err, CampusError::Parse(_)));
    }

    #[test]
    fn load_from_files() {
        let dir = tempfile::tempdir().unwrap();
        let places_path = dir.path().join("places.csv");
        let rooms_path  = dir.path().join("rooms.csv");
        std::fs::File::create(&places_path).unwrap().write_all(PLACES.as_bytes()).unwrap();
        std::fs::File::create(&rooms_path).unwrap().write_all(ROOMS.as_bytes()).unwrap();

        let campus = load_campus(&places_path, &rooms_path).unwrap();
        assert_eq!(campus.places().len(), 2);
        assert_eq!(campus.floors_of("main-block"), vec![1]);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_campus(&dir.path().join("a.csv"), &dir.path().join("b.csv")).unwrap_err();
        assert!(matches!(err, CampusError::Io(_)));
    }
}

// ── Search ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod search {
    use crate::{mace_campus, search, CampusDataset, SearchItem, MAX_RESULTS};

    #[test]
    fn short_queries_return_nothing() {
        let c = mace_campus().unwrap();
        assert!(search(&c, "").is_empty());
        assert!(search(&c, " c ").is_empty());
    }

    #[test]
    fn name_prefix_ranks_first() {
        let c = mace_campus().unwrap();
        let hits = search(&c, "CS");
        let first = hits.first().unwrap();
        assert_eq!(first.score, 100);
        assert!(matches!(first.item, SearchItem::Place(p) if p.id == "cs-block"));
    }

    #[test]
    fn exact_room_number() {
        let c = mace_campus().unwrap();
        let hits = search(&c, "l201");
        assert!(matches!(hits[0].item, SearchItem::Room(r) if r.id == "l201"));
        assert_eq!(hits[0].score, 100);
    }

    #[test]
    fn place_substring_outranks_room_prefix() {
        let c = mace_campus().unwrap();
        let hits = search(&c, "library");
        assert_eq!(hits.len(), 2);
        assert!(matches!(hits[0].item, SearchItem::Place(p) if p.id == "central-library"));
        assert_eq!(hits[0].score, 80);
        assert!(matches!(hits[1].item, SearchItem::Room(r) if r.id == "l216"));
        assert_eq!(hits[1].score, 75);
    }

    #[test]
    fn short_name_match() {
        let c = mace_campus().unwrap();
        let hits = search(&c, "mech");
        // Both names start with "mech"; equal scores keep dataset order.
        assert_eq!(hits[0].score, 100);
        assert!(matches!(hits[0].item, SearchItem::Place(p) if p.id == "mech-block"));
        assert!(hits.iter().all(|h| h.score >= 60));
    }

    #[test]
    fn results_capped_at_best_ten() {
        let c = mace_campus().unwrap();
        // "Room L2xx"/"Room L3xx" names plus "Faculty Room" etc. exceed the cap.
        let matching = c.rooms().iter().filter(|r| r.name.to_lowercase().contains("room")).count();
        assert!(matching > MAX_RESULTS);

        let hits = search(&c, "room");
        assert_eq!(hits.len(), MAX_RESULTS);
        // Name-prefix hits (75) come before substring hits (60).
        assert!(hits.iter().all(|h| h.score == 75));
    }

    #[test]
    fn scores_descend() {
        let c = mace_campus().unwrap();
        let hits = search(&c, "lab");
        assert!(hits.windows(2).all(|w| w[0].score >= w[1].score));
    }
}
