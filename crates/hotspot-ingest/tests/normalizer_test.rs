use chrono::{Duration, Utc};
use hotspot_core::config::EngineConfig;
use hotspot_core::errors::ValidationError;
use hotspot_core::models::VerificationStatus;
use hotspot_core::GeoPoint;
use hotspot_ingest::Normalizer;
use test_fixtures::payload_at;

fn normalizer() -> Normalizer {
    Normalizer::new(&EngineConfig::default())
}

#[test]
fn accepted_payload_becomes_unverified_sighting() {
    let now = Utc::now();
    let mut payload = payload_at(GeoPoint::new(26.1, -80.2), " Apple  snail ", 0.91, now);
    payload.image_ref = Some("static/snail_0412.jpg".into());

    let s = normalizer().normalize(&payload, now).unwrap();
    assert_eq!(s.species, "Apple snail");
    assert_eq!(s.status, VerificationStatus::Unverified);
    assert_eq!(s.cluster_id, None);
    assert_eq!(s.image_ref.as_deref(), Some("static/snail_0412.jpg"));
    assert_eq!(s.location, GeoPoint::new(26.1, -80.2));
}

#[test]
fn identical_payloads_get_distinct_ids() {
    let now = Utc::now();
    let payload = payload_at(GeoPoint::new(26.1, -80.2), "Apple snail", 0.91, now);
    let n = normalizer();
    let a = n.normalize(&payload, now).unwrap();
    let b = n.normalize(&payload, now).unwrap();
    assert_ne!(a.id, b.id);
}

#[test]
fn missing_longitude_is_invalid_coordinate() {
    let now = Utc::now();
    let mut payload = payload_at(GeoPoint::new(26.1, -80.2), "Apple snail", 0.91, now);
    payload.lon = None;
    assert!(matches!(
        normalizer().normalize(&payload, now),
        Err(ValidationError::InvalidCoordinate { .. })
    ));
}

#[test]
fn coordinate_checked_before_confidence() {
    let now = Utc::now();
    let mut payload = payload_at(GeoPoint::new(26.1, -80.2), "Apple snail", 3.0, now);
    payload.lat = Some(123.0);
    assert!(matches!(
        normalizer().normalize(&payload, now),
        Err(ValidationError::InvalidCoordinate { .. })
    ));
}

#[test]
fn confidence_outside_unit_range_is_invalid() {
    let now = Utc::now();
    let payload = payload_at(GeoPoint::new(26.1, -80.2), "Apple snail", -0.1, now);
    assert_eq!(
        normalizer().normalize(&payload, now),
        Err(ValidationError::InvalidConfidence { value: -0.1 })
    );
}

#[test]
fn low_confidence_is_below_floor() {
    let now = Utc::now();
    let payload = payload_at(GeoPoint::new(26.1, -80.2), "Apple snail", 0.69, now);
    assert!(matches!(
        normalizer().normalize(&payload, now),
        Err(ValidationError::BelowConfidenceFloor { .. })
    ));
}

#[test]
fn stale_timestamp_uses_decay_horizon_by_default() {
    let now = Utc::now();
    let n = normalizer();
    assert_eq!(n.retention(), Duration::days(7));
    let payload = payload_at(GeoPoint::new(26.1, -80.2), "Apple snail", 0.9, now - Duration::days(8));
    assert!(matches!(
        n.normalize(&payload, now),
        Err(ValidationError::StaleTimestamp { .. })
    ));
}

#[test]
fn explicit_retention_overrides_decay_horizon() {
    let now = Utc::now();
    let mut config = EngineConfig::default();
    config.ingest.retention_horizon_secs = Some(30 * 24 * 3600);
    let n = Normalizer::new(&config);
    let payload = payload_at(GeoPoint::new(26.1, -80.2), "Apple snail", 0.9, now - Duration::days(8));
    assert!(n.normalize(&payload, now).is_ok());
}

#[test]
fn future_timestamp_beyond_skew_rejected() {
    let now = Utc::now();
    let n = normalizer();
    let near = payload_at(GeoPoint::new(26.1, -80.2), "Apple snail", 0.9, now + Duration::minutes(4));
    assert!(n.normalize(&near, now).is_ok());
    let far = payload_at(GeoPoint::new(26.1, -80.2), "Apple snail", 0.9, now + Duration::hours(1));
    assert!(matches!(
        n.normalize(&far, now),
        Err(ValidationError::FutureTimestamp { .. })
    ));
}

#[test]
fn unknown_species_label_rejected() {
    let now = Utc::now();
    let payload = payload_at(GeoPoint::new(26.1, -80.2), "Unknown Species", 0.95, now);
    assert!(matches!(
        normalizer().normalize(&payload, now),
        Err(ValidationError::InvalidSpecies { .. })
    ));
}
