//! Structured log events for key engine operations.
//!
//! Each function emits a `tracing` event with structured fields.

use hotspot_core::errors::{InvariantViolation, ValidationError};
use hotspot_core::ids::{AlertId, ClusterId, SightingId};
use hotspot_core::models::{Cluster, VerificationDecision};

/// Log a sighting accepted into clustering.
pub fn sighting_accepted(sighting_id: &SightingId, species: &str, cluster_id: &ClusterId) {
    tracing::info!(
        event = "sighting_accepted",
        sighting_id = %sighting_id,
        species = %species,
        cluster_id = %cluster_id,
        "sighting accepted"
    );
}

/// Log a submission rejected at the normalizer boundary.
pub fn sighting_rejected(species: &str, error: &ValidationError) {
    tracing::info!(
        event = "sighting_rejected",
        species = %species,
        reason = %error,
        "sighting rejected"
    );
}

/// Log a new cluster.
pub fn cluster_created(cluster_id: &ClusterId, species: &str) {
    tracing::info!(
        event = "cluster_created",
        cluster_id = %cluster_id,
        species = %species,
        "cluster created"
    );
}

/// Log a merge of several clusters into a survivor.
pub fn clusters_merged(survivor: &ClusterId, absorbed: &[ClusterId], member_count: usize) {
    tracing::info!(
        event = "clusters_merged",
        survivor = %survivor,
        absorbed = ?absorbed,
        member_count = member_count,
        "clusters merged"
    );
}

/// Log an admin split.
pub fn cluster_split(original: &ClusterId, replacements: &[ClusterId]) {
    tracing::info!(
        event = "cluster_split",
        original = %original,
        replacements = ?replacements,
        "cluster split"
    );
}

/// Log a cluster removed from the active set.
pub fn cluster_destroyed(cluster_id: &ClusterId, species: &str) {
    tracing::info!(
        event = "cluster_destroyed",
        cluster_id = %cluster_id,
        species = %species,
        "cluster destroyed"
    );
}

/// Log an alert emission.
pub fn alert_emitted(alert_id: &AlertId, cluster_id: &ClusterId, risk_score: f64) {
    tracing::warn!(
        event = "alert_emitted",
        alert_id = %alert_id,
        cluster_id = %cluster_id,
        risk_score = risk_score,
        "alert emitted"
    );
}

/// Log an alert retraction. `notice_sent` is true when the alert had been delivered.
pub fn alert_retracted(alert_id: &AlertId, cluster_id: &ClusterId, notice_sent: bool) {
    tracing::info!(
        event = "alert_retracted",
        alert_id = %alert_id,
        cluster_id = %cluster_id,
        notice_sent = notice_sent,
        "alert retracted"
    );
}

/// Log a delivery confirmation from the notifier.
pub fn alert_delivered(alert_id: &AlertId) {
    tracing::info!(
        event = "alert_delivered",
        alert_id = %alert_id,
        "alert delivered"
    );
}

/// Log an admin acknowledgment.
pub fn alert_acknowledged(cluster_id: &ClusterId) {
    tracing::info!(
        event = "alert_acknowledged",
        cluster_id = %cluster_id,
        "alert acknowledged"
    );
}

/// Log a notifier hand-off failure. The alert stays pending.
pub fn notifier_unavailable(alert_id: &AlertId, reason: &str) {
    tracing::warn!(
        event = "notifier_unavailable",
        alert_id = %alert_id,
        reason = %reason,
        "notifier unavailable, alert left pending"
    );
}

/// Log an applied verification decision.
pub fn verification_applied(
    sighting_id: &SightingId,
    decision: VerificationDecision,
    admin_id: &str,
    cluster_id: Option<&ClusterId>,
) {
    tracing::info!(
        event = "verification_applied",
        sighting_id = %sighting_id,
        decision = ?decision,
        admin_id = %admin_id,
        cluster_id = ?cluster_id,
        "verification applied"
    );
}

/// Log a completed decay pass for one partition.
pub fn decay_pass_completed(species: &str, dropped: usize, destroyed: usize, elapsed_ms: u128) {
    tracing::info!(
        event = "decay_pass_completed",
        species = %species,
        dropped = dropped,
        destroyed = destroyed,
        elapsed_ms = elapsed_ms as u64,
        "decay pass completed"
    );
}

/// Log a decay pass skipped because the previous one is still running.
pub fn decay_pass_skipped(species: &str) {
    tracing::warn!(
        event = "decay_pass_skipped",
        species = %species,
        "decay pass skipped, previous pass still running"
    );
}

/// Log an invariant violation with the full cluster state, when one is
/// involved. The mutation was aborted.
pub fn invariant_violated(violation: &InvariantViolation, cluster: Option<&Cluster>) {
    tracing::error!(
        event = "invariant_violated",
        violation = %violation,
        cluster = ?cluster,
        "invariant violation, mutation aborted"
    );
}
