//! Linear mapping between geographic coordinates and the planar canvas.
//!
//! The canvas is a fixed `width × height` plane whose origin is the top-left
//! corner.  Longitude scales linearly onto `x`; latitude scales onto `y` with
//! the axis inverted so that north is up:
//!
//! ```text
//! x = (lng - min_lng) / (max_lng - min_lng) * width
//! y = height - (lat - min_lat) / (max_lat - min_lat) * height
//! ```
//!
//! Points outside the bounding box are not clamped; they simply land outside
//! the visible plane.

use crate::{CoreError, CoreResult, Coordinates};

// ── MapBounds ─────────────────────────────────────────────────────────────────

/// Geographic bounding box of the rendered area, decimal degrees.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapBounds {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lng: f64,
    pub max_lng: f64,
}

impl MapBounds {
    /// The campus box the built-in dataset is drawn in.
    pub const CAMPUS: MapBounds = MapBounds {
        min_lat: 10.0510,
        max_lat: 10.0560,
        min_lng: 76.6170,
        max_lng: 76.6220,
    };

    #[inline]
    pub fn lat_span(&self) -> f64 {
        self.max_lat - self.min_lat
    }

    #[inline]
    pub fn lng_span(&self) -> f64 {
        self.max_lng - self.min_lng
    }

    /// Inclusive containment test.
    pub fn contains(&self, c: Coordinates) -> bool {
        (self.min_lat..=self.max_lat).contains(&c.lat)
            && (self.min_lng..=self.max_lng).contains(&c.lng)
    }

    /// Geometric centre of the box.
    pub fn center(&self) -> Coordinates {
        Coordinates::new(
            (self.min_lat + self.max_lat) * 0.5,
            (self.min_lng + self.max_lng) * 0.5,
        )
    }
}

impl Default for MapBounds {
    fn default() -> Self {
        Self::CAMPUS
    }
}

// ── PlanePoint ────────────────────────────────────────────────────────────────

/// A point on the rendering plane.  `y` grows downward.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlanePoint {
    pub x: f64,
    pub y: f64,
}

impl std::fmt::Display for PlanePoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:.1}, {:.1}]", self.x, self.y)
    }
}

// ── Projection ────────────────────────────────────────────────────────────────

/// Bidirectional geo ↔ plane transform for a fixed box and canvas size.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Projection {
    bounds: MapBounds,
    width:  f64,
    height: f64,
}

impl Projection {
    /// Build a projection.
    ///
    /// # Errors
    ///
    /// [`CoreError::Config`] if either span of `bounds` is not strictly
    /// positive or either plane dimension is not strictly positive (the
    /// transform would divide by zero or flip).
    pub fn new(bounds: MapBounds, width: f64, height: f64) -> CoreResult<Self> {
        if !(bounds.lat_span() > 0.0 && bounds.lng_span() > 0.0) {
            return Err(CoreError::Config(format!(
                "map bounds must have positive extent, got lat {}..{} lng {}..{}",
                bounds.min_lat, bounds.max_lat, bounds.min_lng, bounds.max_lng,
            )));
        }
        if !(width > 0.0 && height > 0.0) {
            return Err(CoreError::Config(format!(
                "plane dimensions must be positive, got {width}×{height}"
            )));
        }
        Ok(Self { bounds, width, height })
    }

    pub fn bounds(&self) -> &MapBounds {
        &self.bounds
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// Geographic → plane.
    pub fn to_plane(&self, c: Coordinates) -> PlanePoint {
        let b = &self.bounds;
        PlanePoint {
            x: (c.lng - b.min_lng) / b.lng_span() * self.width,
            y: self.height - (c.lat - b.min_lat) / b.lat_span() * self.height,
        }
    }

    /// Plane → geographic; exact inverse of [`to_plane`][Self::to_plane].
    pub fn to_geo(&self, p: PlanePoint) -> Coordinates {
        let b = &self.bounds;
        Coordinates {
            lat: (self.height - p.y) / self.height * b.lat_span() + b.min_lat,
            lng: p.x / self.width * b.lng_span() + b.min_lng,
        }
    }

    /// Planar segment for a straight-line route, origin first.
    pub fn route_line(&self, origin: Coordinates, destination: Coordinates) -> (PlanePoint, PlanePoint) {
        (self.to_plane(origin), self.to_plane(destination))
    }
}
