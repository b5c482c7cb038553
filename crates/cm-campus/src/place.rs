//! Outdoor campus places.

use std::str::FromStr;

use cm_core::{Coordinates, PlaceId};

use crate::CampusError;

/// What sort of place an entry is.  Only [`PlaceKind::Building`] entries take
/// part in nearby-building detection and arrival events.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PlaceKind {
    Building,
    Landmark,
    Facility,
    Entrance,
}

impl PlaceKind {
    pub fn as_str(self) -> &'static str {
        match self {
            PlaceKind::Building => "building",
            PlaceKind::Landmark => "landmark",
            PlaceKind::Facility => "facility",
            PlaceKind::Entrance => "entrance",
        }
    }
}

impl std::fmt::Display for PlaceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlaceKind {
    type Err = CampusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "building" => Ok(PlaceKind::Building),
            "landmark" => Ok(PlaceKind::Landmark),
            "facility" => Ok(PlaceKind::Facility),
            "entrance" => Ok(PlaceKind::Entrance),
            other      => Err(CampusError::Parse(format!("unknown place kind {other:?}"))),
        }
    }
}

/// A named point on the campus map.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Place {
    pub id:          PlaceId,
    pub name:        String,
    /// Abbreviation shown on the map and matched by search ("CS", "MECH").
    pub short_name:  Option<String>,
    pub kind:        PlaceKind,
    pub coordinates: Coordinates,
    pub description: Option<String>,
}

impl Place {
    pub fn new(id: impl Into<PlaceId>, name: impl Into<String>, kind: PlaceKind, coordinates: Coordinates) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            short_name: None,
            kind,
            coordinates,
            description: None,
        }
    }

    pub fn with_short_name(mut self, short_name: impl Into<String>) -> Self {
        self.short_name = Some(short_name.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[inline]
    pub fn is_building(&self) -> bool {
        self.kind == PlaceKind::Building
    }
}
