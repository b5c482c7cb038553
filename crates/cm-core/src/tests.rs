//! Unit tests for cm-core primitives.

#[cfg(test)]
mod geo {
    use crate::Coordinates;

    #[test]
    fn zero_distance() {
        let p = Coordinates::new(10.0538, 76.6192);
        assert_eq!(p.distance_m(p), 0.0);
    }

    #[test]
    fn one_degree_of_latitude() {
        // ~1 degree of latitude ≈ 111 km
        let a = Coordinates::new(10.0, 76.0);
        let b = Coordinates::new(11.0, 76.0);
        let d = a.distance_m(b);
        assert!((d - 111_195.0).abs() < 50.0, "got {d}");
    }

    #[test]
    fn distance_is_symmetric_and_non_negative() {
        let pts = [
            Coordinates::new(10.0, 76.6),
            Coordinates::new(10.0538, 76.6192),
            Coordinates::new(-33.8688, 151.2093),
            Coordinates::new(51.5074, -0.1278),
            Coordinates::new(89.9, 179.9),
        ];
        for a in pts {
            for b in pts {
                let ab = a.distance_m(b);
                let ba = b.distance_m(a);
                assert!(ab >= 0.0);
                assert!((ab - ba).abs() < 1e-9, "{a} ↔ {b}: {ab} vs {ba}");
                if a != b {
                    assert!(ab > 0.0);
                }
            }
        }
    }

    #[test]
    fn bearing_cardinal_directions() {
        let o = Coordinates::new(10.0, 76.0);
        let north = o.bearing_deg(Coordinates::new(11.0, 76.0));
        let east  = o.bearing_deg(Coordinates::new(10.0, 77.0));
        let south = o.bearing_deg(Coordinates::new(9.0, 76.0));
        let west  = o.bearing_deg(Coordinates::new(10.0, 75.0));
        assert!(north < 1e-9 || north > 360.0 - 1e-9, "north = {north}");
        assert!((east - 90.0).abs() < 1.0, "east = {east}");
        assert!((south - 180.0).abs() < 1e-9, "south = {south}");
        assert!((west - 270.0).abs() < 1.0, "west = {west}");
    }

    #[test]
    fn bearing_always_in_range() {
        let mut lat = -80.0;
        while lat <= 80.0 {
            let mut lng = -170.0;
            while lng <= 170.0 {
                let a = Coordinates::new(lat, lng);
                for b in [
                    Coordinates::new(0.0, 0.0),
                    Coordinates::new(lat, lng - 1e-12),
                    Coordinates::new(-lat, -lng),
                    a,
                ] {
                    let brg = a.bearing_deg(b);
                    assert!((0.0..360.0).contains(&brg), "{a} → {b}: {brg}");
                }
                lng += 17.0;
            }
            lat += 13.0;
        }
    }

    #[test]
    fn dms_conversion() {
        let c = Coordinates::from_dms((10.0, 3.0, 18.0), (76.0, 37.0, 9.0));
        assert!((c.lat - 10.055).abs() < 1e-12);
        assert!((c.lng - 76.619_166_666_666_67).abs() < 1e-9);
    }

    #[test]
    fn planar_distance_is_degree_euclidean() {
        let a = Coordinates::new(0.0, 0.0);
        let b = Coordinates::new(3.0, 4.0);
        assert!((a.planar_distance_deg(b) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn bbox_check() {
        let center = Coordinates::new(10.0538, 76.6192);
        assert!(Coordinates::new(10.0540, 76.6190).within_bbox(center, 0.001));
        assert!(!Coordinates::new(10.1538, 76.6192).within_bbox(center, 0.001));
    }
}

#[cfg(test)]
mod compass {
    use crate::{format_distance, walking_time_label, CompassPoint};

    #[test]
    fn principal_points() {
        assert_eq!(CompassPoint::from_bearing(0.0), CompassPoint::N);
        assert_eq!(CompassPoint::from_bearing(45.0), CompassPoint::NE);
        assert_eq!(CompassPoint::from_bearing(90.0), CompassPoint::E);
        assert_eq!(CompassPoint::from_bearing(180.0), CompassPoint::S);
        assert_eq!(CompassPoint::from_bearing(270.0), CompassPoint::W);
        assert_eq!(CompassPoint::from_bearing(315.0), CompassPoint::NW);
    }

    #[test]
    fn half_sector_rounds_clockwise() {
        assert_eq!(CompassPoint::from_bearing(22.4), CompassPoint::N);
        assert_eq!(CompassPoint::from_bearing(22.5), CompassPoint::NE);
        assert_eq!(CompassPoint::from_bearing(337.4), CompassPoint::NW);
        assert_eq!(CompassPoint::from_bearing(337.5), CompassPoint::N);
    }

    #[test]
    fn nearest_point_wins() {
        assert_eq!(CompassPoint::from_bearing(44.9), CompassPoint::NE);
        assert_eq!(CompassPoint::from_bearing(359.9), CompassPoint::N);
    }

    #[test]
    fn out_of_range_bearings_fold() {
        assert_eq!(CompassPoint::from_bearing(360.0), CompassPoint::N);
        assert_eq!(CompassPoint::from_bearing(-90.0), CompassPoint::W);
        assert_eq!(CompassPoint::from_bearing(450.0), CompassPoint::E);
    }

    #[test]
    fn display_and_phrase() {
        assert_eq!(CompassPoint::SE.to_string(), "SE");
        assert_eq!(CompassPoint::SW.heading_phrase(), "Head southwest");
    }

    #[test]
    fn distance_labels() {
        assert_eq!(format_distance(0.0), "0 m");
        assert_eq!(format_distance(12.4), "12 m");
        assert_eq!(format_distance(999.0), "999 m");
        assert_eq!(format_distance(1000.0), "1.0 km");
        assert_eq!(format_distance(1500.0), "1.5 km");
    }

    #[test]
    fn walking_time_labels() {
        assert_eq!(walking_time_label(0.0), "Less than 1 min");
        assert_eq!(walking_time_label(41.0), "Less than 1 min");
        assert_eq!(walking_time_label(83.33), "1 min");
        assert_eq!(walking_time_label(250.0), "3 mins");
    }
}

#[cfg(test)]
mod projection {
    use crate::{CampusConfig, Coordinates, CoreError, MapBounds, PlanePoint, Projection};

    fn campus() -> Projection {
        CampusConfig::default().projection().unwrap()
    }

    #[test]
    fn corners_map_to_plane_corners() {
        let p = campus();
        let b = MapBounds::CAMPUS;

        let nw = p.to_plane(Coordinates::new(b.max_lat, b.min_lng));
        assert!(nw.x.abs() < 1e-6 && nw.y.abs() < 1e-6, "{nw}");

        let se = p.to_plane(Coordinates::new(b.min_lat, b.max_lng));
        assert!((se.x - 1000.0).abs() < 1e-6 && (se.y - 1400.0).abs() < 1e-6, "{se}");
    }

    #[test]
    fn north_is_up() {
        let p = campus();
        let south = p.to_plane(Coordinates::new(10.0520, 76.6190));
        let north = p.to_plane(Coordinates::new(10.0550, 76.6190));
        assert!(north.y < south.y);
    }

    #[test]
    fn roundtrip_inside_box() {
        let p = campus();
        let b = MapBounds::CAMPUS;
        for i in 0..=20 {
            for j in 0..=20 {
                let c = Coordinates::new(
                    b.min_lat + b.lat_span() * i as f64 / 20.0,
                    b.min_lng + b.lng_span() * j as f64 / 20.0,
                );
                let back = p.to_geo(p.to_plane(c));
                assert!((back.lat - c.lat).abs() < 1e-9, "{c} → {back}");
                assert!((back.lng - c.lng).abs() < 1e-9, "{c} → {back}");
            }
        }
    }

    #[test]
    fn outside_box_is_not_clamped() {
        let p = campus();
        let far = p.to_plane(Coordinates::new(10.0600, 76.6100));
        assert!(far.x < 0.0);
        assert!(far.y < 0.0);
    }

    #[test]
    fn route_line_endpoints() {
        let p = campus();
        let a = Coordinates::new(10.0520, 76.6180);
        let b = Coordinates::new(10.0538, 76.6192);
        let (pa, pb) = p.route_line(a, b);
        assert_eq!(pa, p.to_plane(a));
        assert_eq!(pb, p.to_plane(b));
    }

    #[test]
    fn plane_origin_is_north_west_corner() {
        let p = campus();
        let c = p.to_geo(PlanePoint { x: 0.0, y: 0.0 });
        assert!((c.lat - MapBounds::CAMPUS.max_lat).abs() < 1e-12);
        assert!((c.lng - MapBounds::CAMPUS.min_lng).abs() < 1e-12);
    }

    #[test]
    fn degenerate_bounds_rejected() {
        let flat = MapBounds { min_lat: 10.0, max_lat: 10.0, ..MapBounds::CAMPUS };
        assert!(matches!(Projection::new(flat, 100.0, 100.0), Err(CoreError::Config(_))));
        assert!(matches!(Projection::new(MapBounds::CAMPUS, 0.0, 100.0), Err(CoreError::Config(_))));
    }

    #[test]
    fn bounds_helpers() {
        let b = MapBounds::CAMPUS;
        assert!(b.contains(b.center()));
        assert!(!b.contains(Coordinates::new(10.0, 76.6)));
    }
}

#[cfg(test)]
mod ids {
    use std::collections::HashMap;

    use crate::{PlaceId, RoomId};

    #[test]
    fn display_is_raw_slug() {
        assert_eq!(PlaceId::new("cs-block").to_string(), "cs-block");
        assert_eq!(RoomId::from("l201").as_str(), "l201");
    }

    #[test]
    fn borrowed_lookup() {
        let mut m = HashMap::new();
        m.insert(PlaceId::from("main-block"), 1);
        assert_eq!(m.get("main-block"), Some(&1));
        assert_eq!(PlaceId::from("main-block"), "main-block");
    }
}

#[cfg(test)]
mod config {
    use crate::{CampusConfig, WatchSettings};

    #[test]
    fn defaults() {
        let cfg = CampusConfig::default();
        assert_eq!(cfg.proximity_threshold_deg, 0.0002);
        assert_eq!(cfg.arrival_radius_m, 15.0);
        assert_eq!(cfg.watch, WatchSettings {
            high_accuracy:        true,
            first_fix_timeout_ms: 10_000,
            maximum_age_ms:       5_000,
        });
        let p = cfg.projection().unwrap();
        assert_eq!((p.width(), p.height()), (1000.0, 1400.0));
    }
}
