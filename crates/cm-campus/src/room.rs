//! Indoor rooms, grouped by building and floor.

use std::str::FromStr;

use cm_core::{PlaceId, RoomId};

use crate::CampusError;

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RoomKind {
    Lab,
    Faculty,
    Hod,
    Toilet,
    Library,
    Classroom,
    Other,
}

impl RoomKind {
    pub fn as_str(self) -> &'static str {
        match self {
            RoomKind::Lab       => "lab",
            RoomKind::Faculty   => "faculty",
            RoomKind::Hod       => "hod",
            RoomKind::Toilet    => "toilet",
            RoomKind::Library   => "library",
            RoomKind::Classroom => "classroom",
            RoomKind::Other     => "other",
        }
    }
}

impl std::fmt::Display for RoomKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RoomKind {
    type Err = CampusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lab"       => Ok(RoomKind::Lab),
            "faculty"   => Ok(RoomKind::Faculty),
            "hod"       => Ok(RoomKind::Hod),
            "toilet"    => Ok(RoomKind::Toilet),
            "library"   => Ok(RoomKind::Library),
            "classroom" => Ok(RoomKind::Classroom),
            "other"     => Ok(RoomKind::Other),
            other       => Err(CampusError::Parse(format!("unknown room kind {other:?}"))),
        }
    }
}

/// A room inside a building.
///
/// `number` is the door label ("L201"); its leading digit after the block
/// letter is the floor, but `floor` is stored explicitly rather than parsed.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Room {
    pub id:          RoomId,
    pub number:      String,
    pub name:        String,
    pub kind:        RoomKind,
    pub floor:       i32,
    pub building_id: PlaceId,
}

impl Room {
    pub fn new(
        id:          impl Into<RoomId>,
        number:      impl Into<String>,
        name:        impl Into<String>,
        kind:        RoomKind,
        floor:       i32,
        building_id: impl Into<PlaceId>,
    ) -> Self {
        Self {
            id:          id.into(),
            number:      number.into(),
            name:        name.into(),
            kind,
            floor,
            building_id: building_id.into(),
        }
    }

    /// "L201 - Classroom", the label used when a room is a navigation target.
    pub fn display_name(&self) -> String {
        format!("{} - {}", self.number, self.name)
    }
}
