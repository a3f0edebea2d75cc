use chrono::{Duration, Utc};
use hotspot_core::ids::{ClusterId, SightingId};
use hotspot_core::models::*;
use hotspot_core::GeoPoint;

fn sighting(observed_ago: Duration) -> Sighting {
    Sighting {
        id: SightingId::new(),
        species: "Zebra Mussel".into(),
        confidence: 0.9,
        location: GeoPoint::new(44.0, -93.0),
        observed_at: Utc::now() - observed_ago,
        image_ref: Some("uploads/a.jpg".into()),
        status: VerificationStatus::Unverified,
        cluster_id: None,
    }
}

#[test]
fn sighting_activity_is_inclusive_of_the_horizon() {
    let now = Utc::now();
    let mut s = sighting(Duration::zero());
    s.observed_at = now - Duration::hours(24);
    assert!(s.is_active_at(now, Duration::hours(24)));
    assert!(!s.is_active_at(now + Duration::seconds(1), Duration::hours(24)));
}

#[test]
fn decision_maps_to_terminal_status() {
    assert_eq!(
        VerificationDecision::Confirm.resulting_status(),
        VerificationStatus::Confirmed
    );
    assert_eq!(
        VerificationDecision::Reject.resulting_status(),
        VerificationStatus::Rejected
    );
}

#[test]
fn summary_reflects_cluster() {
    let now = Utc::now();
    let mut cluster = Cluster::new(ClusterId::new(3), "Zebra Mussel".into(), GeoPoint::new(1.0, 2.0), now);
    cluster.members.insert(SightingId::new());
    cluster.members.insert(SightingId::new());
    cluster.risk_score = 0.85;
    cluster.alert_state = AlertState::Active;

    let summary = ClusterSummary::from(&cluster);
    assert_eq!(summary.id, ClusterId::new(3));
    assert_eq!(summary.member_count, 2);
    assert_eq!(summary.risk_level, RiskLevel::Critical);
    assert_eq!(summary.alert_state, AlertState::Active);
}

#[test]
fn spread_trend_direction() {
    assert_eq!(SpreadTrend::from_counts(5, 2).direction, TrendDirection::Spreading);
    assert_eq!(SpreadTrend::from_counts(2, 2).direction, TrendDirection::Stable);
    assert_eq!(SpreadTrend::from_counts(0, 2).direction, TrendDirection::Declining);
}

#[test]
fn alert_state_serializes_snake_case() {
    assert_eq!(serde_json::to_string(&AlertState::None).unwrap(), "\"none\"");
    assert_eq!(
        serde_json::to_string(&AlertState::Acknowledged).unwrap(),
        "\"acknowledged\""
    );
    assert_eq!(serde_json::to_string(&AlertStatus::Retracted).unwrap(), "\"retracted\"");
}

#[test]
fn payload_deserializes_without_image_ref() {
    let json = r#"{
        "lat": 44.0, "lon": -93.0,
        "timestamp": "2026-01-01T00:00:00Z",
        "species_label": "Apple snail",
        "confidence": 0.92
    }"#;
    let payload: SightingPayload = serde_json::from_str(json).unwrap();
    assert_eq!(payload.image_ref, None);
    assert_eq!(payload.lat, Some(44.0));
}
