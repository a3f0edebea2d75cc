use hotspot_core::errors::*;
use hotspot_core::ids::{ClusterId, SightingId};
use hotspot_core::models::VerificationStatus;

#[test]
fn validation_errors_convert_and_classify() {
    let err: HotspotError = ValidationError::InvalidConfidence { value: 1.5 }.into();
    assert!(err.is_validation());
    assert!(!err.is_internal_fault());
    assert!(err.to_string().contains("1.5"));
}

#[test]
fn already_verified_carries_id_and_status() {
    let id = SightingId::new();
    let err = StateError::AlreadyVerified {
        sighting_id: id,
        status: VerificationStatus::Rejected,
    };
    let msg = err.to_string();
    assert!(msg.contains(&id.to_string()));
    assert!(msg.contains("Rejected"));
}

#[test]
fn invariant_violations_are_internal_faults() {
    let err: HotspotError = InvariantViolation::MixedSpecies {
        cluster_id: ClusterId::new(7),
        expected: "Apple snail".into(),
        found: "Dung beetle".into(),
    }
    .into();
    assert!(err.is_internal_fault());
    let msg = err.to_string();
    assert!(msg.contains("cluster-7"));
    assert!(msg.contains("Dung beetle"));
}

#[test]
fn lock_poisoning_is_an_internal_fault() {
    let err: HotspotError = ConcurrencyError::LockPoisoned {
        species: "Apple snail".into(),
    }
    .into();
    assert!(err.is_internal_fault());
}
