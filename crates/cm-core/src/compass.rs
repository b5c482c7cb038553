//! Compass points and the human-readable labels shown next to an active route.

/// Average walking speed (5 km/h) used for time estimates, metres per minute.
pub const WALKING_SPEED_M_PER_MIN: f64 = 83.33;

/// One of the eight principal compass directions.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CompassPoint {
    N,
    NE,
    E,
    SE,
    S,
    SW,
    W,
    NW,
}

impl CompassPoint {
    /// Clockwise from north, index `i` covers `i * 45°`.
    pub const ALL: [CompassPoint; 8] = [
        CompassPoint::N,
        CompassPoint::NE,
        CompassPoint::E,
        CompassPoint::SE,
        CompassPoint::S,
        CompassPoint::SW,
        CompassPoint::W,
        CompassPoint::NW,
    ];

    /// Nearest of the eight points to `bearing` (degrees).
    ///
    /// `bearing / 45` is rounded half-up, so a bearing exactly between two
    /// points resolves to the clockwise one (22.5° → NE).  Bearings outside
    /// `[0, 360)` are folded in first.
    pub fn from_bearing(bearing: f64) -> Self {
        let sector = (bearing.rem_euclid(360.0) / 45.0).round() as usize % 8;
        Self::ALL[sector]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CompassPoint::N  => "N",
            CompassPoint::NE => "NE",
            CompassPoint::E  => "E",
            CompassPoint::SE => "SE",
            CompassPoint::S  => "S",
            CompassPoint::SW => "SW",
            CompassPoint::W  => "W",
            CompassPoint::NW => "NW",
        }
    }

    /// Instruction phrase for the navigation panel, e.g. "Head northeast".
    pub fn heading_phrase(self) -> &'static str {
        match self {
            CompassPoint::N  => "Head north",
            CompassPoint::NE => "Head northeast",
            CompassPoint::E  => "Head east",
            CompassPoint::SE => "Head southeast",
            CompassPoint::S  => "Head south",
            CompassPoint::SW => "Head southwest",
            CompassPoint::W  => "Head west",
            CompassPoint::NW => "Head northwest",
        }
    }
}

impl std::fmt::Display for CompassPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whole metres below 1 km ("999 m"), one-decimal kilometres from there on
/// ("1.0 km", "1.5 km").
pub fn format_distance(meters: f64) -> String {
    if meters < 1000.0 {
        format!("{} m", meters.round() as i64)
    } else {
        format!("{:.1} km", meters / 1000.0)
    }
}

/// Estimated walking time at [`WALKING_SPEED_M_PER_MIN`], rounded to the
/// nearest minute.
pub fn walking_time_label(meters: f64) -> String {
    let minutes = (meters / WALKING_SPEED_M_PER_MIN).round() as i64;
    match minutes {
        m if m < 1 => "Less than 1 min".to_owned(),
        1          => "1 min".to_owned(),
        m          => format!("{m} mins"),
    }
}
