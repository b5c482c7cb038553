//! The built-in campus table (Mar Athanasius College of Engineering).
//!
//! Surveyed positions are published in degrees-minutes-seconds; the rest were
//! read off the site plan in decimal degrees.  Entry order is the priority
//! order used by first-match consumers such as nearby-building detection.

use cm_core::Coordinates;

use crate::{Campus, CampusResult, Place, PlaceKind, Room, RoomKind};

/// Initial map centre (the main block).
pub const CAMPUS_CENTER: Coordinates = Coordinates::new(10.0538, 76.6192);

/// Building every indoor room belongs to.
const CS_BLOCK: &str = "cs-block";

// (id, number, name, kind, floor)
const ROOMS: &[(&str, &str, &str, RoomKind, i32)] = &[
    // ── Second floor (L2xx) ───────────────────────────────────────────────
    ("l201", "L201", "Classroom",                                RoomKind::Classroom, 2),
    ("l202", "L202", "Electronics Workshop",                     RoomKind::Lab,       2),
    ("l203", "L203", "Network Systems Lab",                      RoomKind::Lab,       2),
    ("l204", "L204", "Classroom",                                RoomKind::Classroom, 2),
    ("l205", "L205", "Faculty Room",                             RoomKind::Faculty,   2),
    ("l206", "L206", "Computer Hardware Lab / Intelligence Lab", RoomKind::Lab,       2),
    ("l207", "L207", "Faculty Room",                             RoomKind::Faculty,   2),
    ("l208", "L208", "HOD Room",                                 RoomKind::Hod,       2),
    ("l209", "L209", "Room L209",                                RoomKind::Other,     2),
    ("l210", "L210", "Toilet (M)",                               RoomKind::Toilet,    2),
    ("l211", "L211", "Room L211",                                RoomKind::Other,     2),
    ("l212", "L212", "Room L212",                                RoomKind::Other,     2),
    ("l213", "L213", "Toilet (F)",                               RoomKind::Toilet,    2),
    ("l214", "L214", "Research Lab / V Lab",                     RoomKind::Lab,       2),
    ("l215", "L215", "Room L215",                                RoomKind::Other,     2),
    ("l216", "L216", "Library",                                  RoomKind::Library,   2),
    ("l217", "L217", "Room L217",                                RoomKind::Other,     2),
    ("l218", "L218", "Room L218",                                RoomKind::Other,     2),
    ("l219", "L219", "Room L219",                                RoomKind::Other,     2),
    // ── Third floor (L3xx) ────────────────────────────────────────────────
    ("l301", "L301", "Classroom",                                RoomKind::Classroom, 3),
    ("l302", "L302", "Advanced Lab for ECE",                     RoomKind::Lab,       3),
    ("l303", "L303", "Faculty Room",                             RoomKind::Faculty,   3),
    ("l304", "L304", "ECE Project Lab",                          RoomKind::Lab,       3),
    ("l305", "L305", "ECE Project Lab",                          RoomKind::Lab,       3),
    ("l306", "L306", "Room L306",                                RoomKind::Other,     3),
    ("l307", "L307", "Faculty Room",                             RoomKind::Faculty,   3),
    ("l308", "L308", "Toilet (F)",                               RoomKind::Toilet,    3),
    ("l309", "L309", "Faculty Room",                             RoomKind::Faculty,   3),
    ("l310", "L310", "Faculty Room",                             RoomKind::Faculty,   3),
    ("l311", "L311", "Toilet (M)",                               RoomKind::Toilet,    3),
    ("l312", "L312", "Data Analytics Lab",                       RoomKind::Lab,       3),
    ("l313", "L313", "Programming Lab",                          RoomKind::Lab,       3),
    ("l314", "L314", "Room L314",                                RoomKind::Other,     3),
    ("l315", "L315", "Room L315",                                RoomKind::Other,     3),
    ("l316", "L316", "Faculty Room",                             RoomKind::Faculty,   3),
];

fn dms(lat_min: f64, lat_sec: f64, lng_min: f64, lng_sec: f64) -> Coordinates {
    Coordinates::from_dms((10.0, lat_min, lat_sec), (76.0, lng_min, lng_sec))
}

fn places() -> Vec<Place> {
    use PlaceKind::*;

    vec![
        Place::new("main-entrance", "Main Entrance", Entrance, dms(3.0, 18.6, 37.0, 9.0)),
        Place::new("main-block", "Main Block", Building, Coordinates::new(10.0538, 76.6192))
            .with_short_name("Principal's Office")
            .with_description("Principal's Office and Administration"),
        Place::new("ece-block", "ECE Block", Building, Coordinates::new(10.0540, 76.6190))
            .with_short_name("ECE"),
        Place::new(CS_BLOCK, "CS Block", Building, dms(3.0, 8.8, 37.0, 7.1))
            .with_short_name("CS"),
        Place::new("mech-block", "Mechanical Engineering Block", Building, Coordinates::new(10.0540, 76.6200))
            .with_short_name("MECH"),
        Place::new("civil-block", "Civil Engineering Block", Building, Coordinates::new(10.0532, 76.6185))
            .with_short_name("CIVIL"),
        Place::new("mca-block", "MCA Block", Building, Coordinates::new(10.0550, 76.6198))
            .with_short_name("MCA"),
        Place::new("oat-stage", "OAT Stage", Landmark, Coordinates::new(10.0541, 76.6183)),
        Place::new("oat", "Open Air Theatre", Landmark, Coordinates::new(10.0544, 76.6181))
            .with_short_name("OAT"),
        Place::new("canteen", "Canteen", Facility, Coordinates::new(10.0528, 76.6198)),
        Place::new("central-library", "Central Library", Facility, dms(3.0, 13.2, 37.0, 10.9)),
        Place::new("foundry-smithy", "Foundry and Smithy", Facility, dms(3.0, 12.1, 37.0, 11.3)),
        Place::new("machine-shops", "Machine Shops", Facility, dms(3.0, 10.8, 37.0, 11.3)),
        Place::new("hydraulics-lab", "Hydraulics Lab", Facility, dms(3.0, 9.6, 37.0, 10.7)),
        Place::new("heat-engines-lab", "Heat Engines Lab", Facility, dms(3.0, 9.3, 37.0, 9.7)),
        Place::new("eee-workshop", "EEE Workshop", Facility, dms(3.0, 9.1, 37.0, 8.0)),
        Place::new("pg-block", "PG Block", Building, dms(3.0, 7.6, 37.0, 10.2)),
        Place::new("mech-corner", "Mech Corner", Landmark, dms(3.0, 10.2, 37.0, 9.1)),
        Place::new("civil-corner", "Civil Corner", Landmark, dms(3.0, 9.4, 37.0, 11.8)),
        Place::new("nss-park", "NSS Park", Landmark, dms(3.0, 12.6, 37.0, 8.1)),
    ]
}

fn rooms() -> Vec<Room> {
    ROOMS
        .iter()
        .map(|&(id, number, name, kind, floor)| Room::new(id, number, name, kind, floor, CS_BLOCK))
        .collect()
}

/// Build the built-in campus dataset.
pub fn mace_campus() -> CampusResult<Campus> {
    Campus::new(places(), rooms())
}
