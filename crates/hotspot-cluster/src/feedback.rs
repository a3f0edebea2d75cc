//! Verification feedback: apply an admin decision and rescore the one
//! cluster that owns the sighting.

use chrono::{DateTime, Utc};
use hotspot_core::errors::{HotspotResult, InvariantViolation, StateError};
use hotspot_core::ids::VerificationId;
use hotspot_core::models::{VerificationEvent, VerificationRequest};
use hotspot_observability::events;

use crate::partition::{PartitionSettings, PartitionState};

impl PartitionState {
    /// Record the decision, update the sighting's status, and re-evaluate
    /// its owning cluster. A rejected sighting stays a member; it only stops
    /// contributing to size and confidence.
    ///
    /// Fails without mutation when the sighting is unknown or was already
    /// verified.
    pub fn verify(
        &mut self,
        request: &VerificationRequest,
        settings: &PartitionSettings,
        now: DateTime<Utc>,
    ) -> HotspotResult<VerificationEvent> {
        let sighting_id = request.sighting_id;
        let sighting = self
            .clustering
            .sighting(&sighting_id)
            .ok_or(StateError::SightingNotFound(sighting_id))?;
        if !sighting.is_unverified() {
            return Err(StateError::AlreadyVerified {
                sighting_id,
                status: sighting.status,
            }
            .into());
        }

        let status = request.decision.resulting_status();
        let owner = sighting.cluster_id;
        let snapshot = match owner {
            Some(cluster_id) => {
                if self.clustering.cluster(&cluster_id).is_none() {
                    let v = InvariantViolation::MissingCluster {
                        sighting_id,
                        cluster_id,
                    };
                    events::invariant_violated(&v, None);
                    return Err(v.into());
                }
                Some((
                    cluster_id,
                    self.clustering
                        .snapshot(&cluster_id, Some((sighting_id, status)))?,
                ))
            }
            None => None,
        };

        let event = VerificationEvent {
            id: VerificationId::new(),
            sighting_id,
            decision: request.decision,
            admin_id: request.admin_id.clone(),
            recorded_at: now,
        };
        self.verifications.push(event.clone());
        if let Some(s) = self.clustering.sighting_mut(&sighting_id) {
            s.status = status;
        }

        if let Some((cluster_id, snapshot)) = snapshot {
            if let Some(cluster) = self.clustering.cluster_mut(&cluster_id) {
                cluster.updated_at = now;
            }
            self.rescore(cluster_id, &snapshot, None, settings, now);
        }

        events::verification_applied(
            &sighting_id,
            request.decision,
            &request.admin_id,
            owner.as_ref(),
        );
        Ok(event)
    }

    /// Audit trail in append order.
    pub fn verification_log(&self) -> &[VerificationEvent] {
        &self.verifications
    }
}
