use std::collections::HashSet;

use hotspot_core::ids::SightingId;
use hotspot_core::GeoPoint;
use hotspot_spatial::SpatialIndex;
use proptest::prelude::*;
use test_fixtures::offset_point;

fn arb_offsets() -> impl Strategy<Value = Vec<(f64, f64)>> {
    prop::collection::vec((-600.0f64..600.0, -600.0f64..600.0), 1..60)
}

fn arb_origin() -> impl Strategy<Value = GeoPoint> {
    let lon = prop_oneof![
        -180.0f64..180.0,
        179.99f64..=180.0,
        -180.0f64..-179.99,
    ];
    (-70.0f64..70.0, lon).prop_map(|(lat, lon)| GeoPoint::new(lat, lon))
}

// ── Grid query agrees with a brute-force scan ───────────────────────────

proptest! {
    #[test]
    fn query_matches_linear_scan(
        origin in arb_origin(),
        offsets in arb_offsets(),
        radius in 25.0f64..400.0,
    ) {
        let mut index = SpatialIndex::new(radius);
        let mut points = Vec::new();
        for (n, e) in &offsets {
            let id = SightingId::new();
            let p = offset_point(origin, *n, *e);
            index.insert_point(id, p);
            points.push((id, p));
        }

        for (_, center) in &points {
            let got: HashSet<SightingId> = index.query(center).into_iter().collect();
            let expected: HashSet<SightingId> = points
                .iter()
                .filter(|(_, p)| center.is_within(p, radius))
                .map(|(id, _)| *id)
                .collect();
            prop_assert_eq!(got, expected);
        }
    }
}

// ── Removal is exact ────────────────────────────────────────────────────

proptest! {
    #[test]
    fn removed_points_never_reappear(
        origin in arb_origin(),
        offsets in arb_offsets(),
    ) {
        let mut index = SpatialIndex::new(150.0);
        let mut ids = Vec::new();
        for (n, e) in &offsets {
            let id = SightingId::new();
            index.insert_point(id, offset_point(origin, *n, *e));
            ids.push(id);
        }
        let removed: HashSet<SightingId> = ids.iter().step_by(2).copied().collect();
        for id in &removed {
            prop_assert!(index.remove(id));
        }
        prop_assert_eq!(index.len(), ids.len() - removed.len());
        for id in &ids {
            if let Some(p) = index.location(id) {
                prop_assert!(!removed.contains(id));
                prop_assert!(index.query(&p).contains(id));
            }
        }
    }
}
