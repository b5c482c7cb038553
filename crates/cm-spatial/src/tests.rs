//! Unit tests for cm-spatial.

#[cfg(test)]
mod helpers {
    use cm_core::{Coordinates, PlaceId};

    /// Campus buildings in dataset priority order.  `main-block` and
    /// `ece-block` are ~0.00028° apart, so a point between them can be
    /// within 0.0002 of both.
    pub fn buildings() -> Vec<(PlaceId, Coordinates)> {
        vec![
            (PlaceId::from("main-block"),  Coordinates::new(10.0538, 76.6192)),
            (PlaceId::from("ece-block"),   Coordinates::new(10.0540, 76.6190)),
            (PlaceId::from("mech-block"),  Coordinates::new(10.0540, 76.6200)),
            (PlaceId::from("civil-block"), Coordinates::new(10.0532, 76.6185)),
            (PlaceId::from("mca-block"),   Coordinates::new(10.0550, 76.6198)),
        ]
    }
}

// ── Linear scan ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod linear {
    use cm_core::{Coordinates, PlaceId};

    use crate::{find_nearby, DEFAULT_THRESHOLD_DEG};

    fn scan(pos: Coordinates, threshold: f64) -> Option<String> {
        let b = super::helpers::buildings();
        find_nearby(pos, b.iter().map(|(id, c)| (id, *c)), threshold).map(|id| id.to_string())
    }

    #[test]
    fn exact_position_matches() {
        let hit = scan(Coordinates::new(10.0538, 76.6192), DEFAULT_THRESHOLD_DEG);
        assert_eq!(hit.as_deref(), Some("main-block"));
    }

    #[test]
    fn one_degree_away_is_none() {
        assert_eq!(scan(Coordinates::new(11.0538, 76.6192), DEFAULT_THRESHOLD_DEG), None);
    }

    #[test]
    fn first_match_not_nearest() {
        // Much closer to ece-block, but main-block is also under the
        // threshold and comes first.
        let pos = Coordinates::new(10.05395, 76.61905);
        assert_eq!(scan(pos, DEFAULT_THRESHOLD_DEG).as_deref(), Some("main-block"));
    }

    #[test]
    fn threshold_is_strict() {
        let id = PlaceId::from("p");
        let places = [(&id, Coordinates::new(0.0, 1.0))];
        assert!(find_nearby(Coordinates::new(0.0, 0.0), places, 1.0).is_none());
        assert!(find_nearby(Coordinates::new(0.0, 0.0), places, 1.000_001).is_some());
    }

    #[test]
    fn scales_with_threshold() {
        let pos = Coordinates::new(10.0600, 76.6192); // ~0.0062° north of main-block
        assert_eq!(scan(pos, DEFAULT_THRESHOLD_DEG), None);
        assert_eq!(scan(pos, 0.01).as_deref(), Some("main-block"));
    }

    #[test]
    fn empty_input() {
        let none: [(&PlaceId, Coordinates); 0] = [];
        assert!(find_nearby(Coordinates::new(0.0, 0.0), none, 10.0).is_none());
    }
}

// ── R-tree index ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod index {
    use cm_core::Coordinates;

    use crate::{find_nearby, ProximityIndex, DEFAULT_THRESHOLD_DEG};

    #[test]
    fn exact_and_far() {
        let idx = ProximityIndex::new(super::helpers::buildings(), DEFAULT_THRESHOLD_DEG);
        assert_eq!(idx.len(), 5);
        assert_eq!(idx.find(Coordinates::new(10.0550, 76.6198)).unwrap(), "mca-block");
        assert!(idx.find(Coordinates::new(9.0550, 76.6198)).is_none());
    }

    #[test]
    fn first_match_not_nearest() {
        let idx = ProximityIndex::new(super::helpers::buildings(), DEFAULT_THRESHOLD_DEG);
        let pos = Coordinates::new(10.05395, 76.61905);
        assert_eq!(idx.find(pos).unwrap(), "main-block");
    }

    #[test]
    fn priority_follows_supplied_order() {
        let mut b = super::helpers::buildings();
        b.swap(0, 1);
        let idx = ProximityIndex::new(b, DEFAULT_THRESHOLD_DEG);
        let pos = Coordinates::new(10.05395, 76.61905);
        assert_eq!(idx.find(pos).unwrap(), "ece-block");
    }

    #[test]
    fn agrees_with_linear_scan() {
        let b = super::helpers::buildings();
        let idx = ProximityIndex::new(b.clone(), DEFAULT_THRESHOLD_DEG);
        for i in 0..=40 {
            for j in 0..=40 {
                let pos = Coordinates::new(10.0525 + i as f64 * 0.00003, 76.6180 + j as f64 * 0.00003);
                let linear = find_nearby(pos, b.iter().map(|(id, c)| (id, *c)), DEFAULT_THRESHOLD_DEG);
                assert_eq!(idx.find(pos), linear, "at {pos}");
            }
        }
    }

    #[test]
    fn empty_index() {
        let idx = ProximityIndex::empty(DEFAULT_THRESHOLD_DEG);
        assert!(idx.is_empty());
        assert!(idx.find(Coordinates::new(10.0538, 76.6192)).is_none());
    }
}
