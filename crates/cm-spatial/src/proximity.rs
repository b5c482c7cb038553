//! Threshold-based nearby-place lookup.
//!
//! [`find_nearby`] is the reference behaviour: scan in order, return the
//! first place strictly under the threshold.  [`ProximityIndex`] gives the
//! same answer from an R-tree, which matters once the candidate set grows
//! beyond a handful of buildings.

use rstar::{PointDistance, RTree, RTreeObject, AABB};

use cm_core::{Coordinates, PlaceId};

/// ≈ 20 m at the campus latitude, in planar degrees.
pub const DEFAULT_THRESHOLD_DEG: f64 = 0.0002;

/// First entry of `places` whose planar distance to `position` is strictly
/// below `threshold_deg`.
///
/// Returns `None` when nothing qualifies (including for an empty input).
pub fn find_nearby<'a, I>(position: Coordinates, places: I, threshold_deg: f64) -> Option<&'a PlaceId>
where
    I: IntoIterator<Item = (&'a PlaceId, Coordinates)>,
{
    places
        .into_iter()
        .find(|(_, c)| position.planar_distance_deg(*c) < threshold_deg)
        .map(|(id, _)| id)
}

// ── R-tree entry ──────────────────────────────────────────────────────────────

/// Entry stored in the R-tree: a `[lat, lng]` point, the place id, and its
/// rank in the caller's priority order.
#[derive(Clone, Debug)]
struct PlaceEntry {
    point: [f64; 2], // [lat, lng]
    rank:  usize,
    id:    PlaceId,
}

impl RTreeObject for PlaceEntry {
    type Envelope = AABB<[f64; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for PlaceEntry {
    /// Squared Euclidean distance in lat/lng space.
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let d_lat = self.point[0] - point[0];
        let d_lng = self.point[1] - point[1];
        d_lat * d_lat + d_lng * d_lng
    }
}

// ── ProximityIndex ────────────────────────────────────────────────────────────

/// Spatial index over a fixed candidate set (typically "buildings only")
/// with an injected threshold.
#[derive(Clone, Debug)]
pub struct ProximityIndex {
    tree:          RTree<PlaceEntry>,
    threshold_deg: f64,
}

impl ProximityIndex {
    /// Index `places`, remembering their iteration order as priority.
    pub fn new<I>(places: I, threshold_deg: f64) -> Self
    where
        I: IntoIterator<Item = (PlaceId, Coordinates)>,
    {
        let entries: Vec<PlaceEntry> = places
            .into_iter()
            .enumerate()
            .map(|(rank, (id, c))| PlaceEntry { point: [c.lat, c.lng], rank, id })
            .collect();
        tracing::debug!(candidates = entries.len(), threshold_deg, "proximity index built");
        Self {
            tree: RTree::bulk_load(entries),
            threshold_deg,
        }
    }

    /// An index with no candidates; every query returns `None`.
    pub fn empty(threshold_deg: f64) -> Self {
        Self::new(std::iter::empty(), threshold_deg)
    }

    pub fn threshold_deg(&self) -> f64 {
        self.threshold_deg
    }

    pub fn len(&self) -> usize {
        self.tree.size()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.size() == 0
    }

    /// Highest-priority candidate strictly within the threshold of `position`.
    pub fn find(&self, position: Coordinates) -> Option<&PlaceId> {
        let query = [position.lat, position.lng];
        self.tree
            .locate_within_distance(query, self.threshold_deg * self.threshold_deg)
            // The R-tree bound is inclusive and squared; re-check with the
            // exact strict comparison the linear scan uses.
            .filter(|e| position.planar_distance_deg(Coordinates::new(e.point[0], e.point[1])) < self.threshold_deg)
            .min_by_key(|e| e.rank)
            .map(|e| &e.id)
    }
}
