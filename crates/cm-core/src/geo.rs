//! Geographic coordinate type and great-circle math.
//!
//! `Coordinates` uses `f64` latitude/longitude in decimal degrees.  The
//! projection round-trip is exact to 1e-9 degrees only at this precision.
//!
//! No range validation is performed.  Out-of-range values are accepted and
//! simply produce geometrically meaningless results.

/// Mean Earth radius used by the haversine formula, metres.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// A WGS-84 geographic coordinate in decimal degrees.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    #[inline]
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Build a coordinate from degrees-minutes-seconds components, the form
    /// survey data for the campus is published in.  Both components are
    /// taken as positive (north / east) hemispheres.
    pub fn from_dms(lat: (f64, f64, f64), lng: (f64, f64, f64)) -> Self {
        Self {
            lat: dms_to_decimal(lat.0, lat.1, lat.2),
            lng: dms_to_decimal(lng.0, lng.1, lng.2),
        }
    }

    /// Haversine great-circle distance in metres.
    ///
    /// Symmetric, and zero exactly when both points are equal.
    pub fn distance_m(self, other: Coordinates) -> f64 {
        let d_lat = (other.lat - self.lat).to_radians();
        let d_lng = (other.lng - self.lng).to_radians();

        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();

        let a = (d_lat * 0.5).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lng * 0.5).sin().powi(2);

        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        EARTH_RADIUS_M * c
    }

    /// Initial great-circle bearing from `self` to `other`, degrees in
    /// `[0, 360)` with 0 = north, 90 = east.
    pub fn bearing_deg(self, other: Coordinates) -> f64 {
        let lat1  = self.lat.to_radians();
        let lat2  = other.lat.to_radians();
        let d_lng = (other.lng - self.lng).to_radians();

        let y = d_lng.sin() * lat2.cos();
        let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * d_lng.cos();

        normalize_bearing(y.atan2(x).to_degrees())
    }

    /// Euclidean distance treating degrees of latitude and longitude as a
    /// flat plane.  Only meaningful for very short separations; used by the
    /// nearby-building check, whose threshold is expressed in degrees.
    #[inline]
    pub fn planar_distance_deg(self, other: Coordinates) -> f64 {
        let d_lat = self.lat - other.lat;
        let d_lng = self.lng - other.lng;
        (d_lat * d_lat + d_lng * d_lng).sqrt()
    }

    /// Axis-aligned box test in degrees, for quick rejection before
    /// `distance_m`.
    #[inline]
    pub fn within_bbox(self, center: Coordinates, half_deg: f64) -> bool {
        (self.lat - center.lat).abs() <= half_deg
            && (self.lng - center.lng).abs() <= half_deg
    }
}

impl std::fmt::Display for Coordinates {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lng)
    }
}

#[inline]
fn dms_to_decimal(degrees: f64, minutes: f64, seconds: f64) -> f64 {
    degrees + minutes / 60.0 + seconds / 3600.0
}

/// Fold any angle in degrees into `[0, 360)`.
///
/// `rem_euclid` can return exactly 360.0 for tiny negative inputs because of
/// rounding, so that case is folded back to 0.
fn normalize_bearing(deg: f64) -> f64 {
    let b = deg.rem_euclid(360.0);
    if b >= 360.0 { 0.0 } else { b }
}
