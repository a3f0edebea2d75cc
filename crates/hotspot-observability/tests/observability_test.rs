use chrono::Utc;
use hotspot_core::errors::{InvariantViolation, ValidationError};
use hotspot_core::ids::{AlertId, ClusterId, SightingId};
use hotspot_core::models::{Cluster, VerificationDecision};
use hotspot_core::GeoPoint;
use hotspot_observability::spans::names;
use hotspot_observability::{
    decay_span, events, ingest_span, init_tracing_with_filter, split_span, verification_span,
};

#[test]
fn second_install_reports_existing_subscriber() {
    init_tracing_with_filter("debug");
    assert!(!init_tracing_with_filter("info"));
}

#[test]
fn operation_spans_use_their_names() {
    init_tracing_with_filter("trace");
    let cluster_id = ClusterId::new(9);
    let spans = [
        (ingest_span!("Apple snail"), names::INGEST),
        (verification_span!(SightingId::new(), VerificationDecision::Confirm), names::VERIFICATION),
        (split_span!(cluster_id, 2usize), names::SPLIT),
        (decay_span!(3usize), names::DECAY),
    ];
    for (span, name) in spans {
        let _entered = span.enter();
        events::decay_pass_skipped("Apple snail");
        assert_eq!(span.metadata().map(|m| m.name()), Some(name));
    }
}

#[test]
fn every_event_helper_emits_without_panicking() {
    init_tracing_with_filter("trace");
    let cluster_id = ClusterId::new(1);
    let alert_id = AlertId::new();
    let sighting_id = SightingId::new();
    let cluster = Cluster::new(cluster_id, "Apple snail".into(), GeoPoint::new(0.0, 0.0), Utc::now());

    events::sighting_accepted(&sighting_id, "Apple snail", &cluster_id);
    events::sighting_rejected("Apple snail", &ValidationError::InvalidConfidence { value: 2.0 });
    events::cluster_created(&cluster_id, "Apple snail");
    events::clusters_merged(&cluster_id, &[ClusterId::new(2)], 4);
    events::cluster_split(&cluster_id, &[ClusterId::new(3), ClusterId::new(4)]);
    events::cluster_destroyed(&cluster_id, "Apple snail");
    events::alert_emitted(&alert_id, &cluster_id, 0.9);
    events::alert_retracted(&alert_id, &cluster_id, true);
    events::alert_delivered(&alert_id);
    events::alert_acknowledged(&cluster_id);
    events::notifier_unavailable(&alert_id, "channel closed");
    events::verification_applied(&sighting_id, VerificationDecision::Reject, "admin-1", Some(&cluster_id));
    events::decay_pass_completed("Apple snail", 3, 1, 12);
    events::decay_pass_skipped("Apple snail");
    events::invariant_violated(&InvariantViolation::EmptyCluster(cluster_id), Some(&cluster));
    events::invariant_violated(&InvariantViolation::DegenerateCentroid(cluster_id), None);
}
