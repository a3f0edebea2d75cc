//! Property tests for hotspot-cluster: order independence and decay monotonicity.

use std::sync::Arc;

use chrono::{Duration, Utc};
use hotspot_cluster::ClusterManager;
use hotspot_core::config::EngineConfig;
use hotspot_core::models::{Sighting, VerificationStatus};
use hotspot_core::traits::NullNotifier;
use hotspot_core::{GeoPoint, SightingId};
use proptest::prelude::*;
use test_fixtures::offset_point;

fn manager(radius: f64) -> ClusterManager {
    let mut config = EngineConfig::default();
    config.clustering.radius_meters = radius;
    ClusterManager::new(&config, Arc::new(NullNotifier))
}

fn sighting(point: GeoPoint, confidence: f64, age: Duration) -> Sighting {
    Sighting {
        id: SightingId::new(),
        species: "Zebra mussel".to_string(),
        confidence,
        location: point,
        observed_at: Utc::now() - age,
        image_ref: None,
        status: VerificationStatus::Unverified,
        cluster_id: None,
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    // Points within 35 m of a center are at most ~99 m apart, so every
    // ordering collapses into a single cluster at a 100 m radius.
    #[test]
    fn prop_tight_group_forms_one_cluster_in_any_order(
        offsets in prop::collection::vec((-35.0f64..35.0, -35.0f64..35.0), 1..12),
        reversed in any::<bool>(),
    ) {
        let origin = GeoPoint::new(45.5, -73.6);
        let now = Utc::now();
        let mut sightings: Vec<Sighting> = offsets
            .iter()
            .map(|(n, e)| sighting(offset_point(origin, *n, *e), 0.8, Duration::minutes(1)))
            .collect();
        if reversed {
            sightings.reverse();
        }

        let m = manager(100.0);
        for s in sightings {
            m.ingest(s, now).unwrap();
        }
        let clusters = m.list_active_clusters(None).unwrap();
        prop_assert_eq!(clusters.len(), 1);
        prop_assert_eq!(clusters[0].member_count, offsets.len());
    }

    #[test]
    fn prop_decay_never_grows_members_or_scores(
        ages_h in prop::collection::vec(0i64..160, 1..10),
        steps_h in prop::collection::vec(1i64..72, 1..6),
    ) {
        let origin = GeoPoint::new(-33.9, 151.2);
        let now = Utc::now();
        let m = manager(150.0);
        for (i, age) in ages_h.iter().enumerate() {
            let p = offset_point(origin, (i as f64) * 5.0, 0.0);
            m.ingest(sighting(p, 0.9, Duration::hours(*age)), now).unwrap();
        }

        let mut previous = m.list_active_clusters(None).unwrap();
        let mut at = now;
        for step in steps_h {
            at += Duration::hours(step);
            let report = m.run_decay_pass(at);
            prop_assert!(report.failed.is_empty());
            let current = m.list_active_clusters(None).unwrap();
            for c in &current {
                let before = previous.iter().find(|p| p.id == c.id);
                prop_assert!(before.is_some(), "decay created cluster {:?}", c.id);
                let before = before.unwrap();
                prop_assert!(c.member_count <= before.member_count);
                prop_assert!(c.risk_score <= before.risk_score + 1e-12);
            }
            previous = current;
        }
    }
}
