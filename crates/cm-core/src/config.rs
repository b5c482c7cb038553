//! Engine configuration.
//!
//! Typically loaded from a JSON file by the application crate (enable the
//! `serde` feature) and handed to each component at construction.  Every
//! field has a default matching the built-in campus, so a partial file only
//! needs to name what it overrides.

use crate::{CoreResult, MapBounds, Projection};

// ── WatchSettings ─────────────────────────────────────────────────────────────

/// Location-provider knobs passed when a position subscription starts.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct WatchSettings {
    /// Ask the platform for its most accurate (GPS) source.  Default: `true`.
    pub high_accuracy: bool,

    /// How long `start()` waits for the first fix before failing with a
    /// timeout.  Default: 10 000 ms.
    pub first_fix_timeout_ms: u64,

    /// Oldest cached fix the provider may hand back during continuous
    /// watching.  Default: 5 000 ms.
    pub maximum_age_ms: u64,
}

impl Default for WatchSettings {
    fn default() -> Self {
        Self {
            high_accuracy:        true,
            first_fix_timeout_ms: 10_000,
            maximum_age_ms:       5_000,
        }
    }
}

// ── CampusConfig ──────────────────────────────────────────────────────────────

/// Top-level configuration for the navigation engine.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CampusConfig {
    /// Geographic box mapped onto the rendering plane.
    pub bounds: MapBounds,

    /// Rendering plane width in canvas units.  Default: 1000.
    pub plane_width: f64,

    /// Rendering plane height in canvas units.  Default: 1400.
    pub plane_height: f64,

    /// Nearby-building threshold in planar degrees (≈ 20 m at the campus
    /// latitude).  Default: 0.0002.
    pub proximity_threshold_deg: f64,

    /// Haversine distance under which the destination counts as reached,
    /// metres.  Default: 15.
    pub arrival_radius_m: f64,

    /// Location-provider settings.
    pub watch: WatchSettings,
}

impl Default for CampusConfig {
    fn default() -> Self {
        Self {
            bounds:                  MapBounds::CAMPUS,
            plane_width:             1000.0,
            plane_height:            1400.0,
            proximity_threshold_deg: 0.0002,
            arrival_radius_m:        15.0,
            watch:                   WatchSettings::default(),
        }
    }
}

impl CampusConfig {
    /// Build the render projection described by this configuration.
    pub fn projection(&self) -> CoreResult<Projection> {
        Projection::new(self.bounds, self.plane_width, self.plane_height)
    }
}
