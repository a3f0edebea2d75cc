//! Admin-triggered split.
//!
//! The cluster is dissolved and assignment is re-run from scratch, once over
//! the members that stay and once over the extracted ones, so the two groups
//! never rejoin each other. Both re-runs happen on scratch sets; the live
//! partition changes only after both succeed.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use hotspot_core::errors::{HotspotResult, InvariantViolation, StateError};
use hotspot_core::ids::{ClusterId, ClusterIdSequence, SightingId};
use hotspot_core::models::Sighting;
use hotspot_observability::events;

use crate::clustering::{AssignContext, Clustering};
use crate::partition::{PartitionSettings, PartitionState};

impl PartitionState {
    /// Split `cluster_id`, pulling `extracted` out into clusters of their own.
    ///
    /// The alert track of the dissolved cluster moves to the largest
    /// replacement (smallest id on ties). Returns the replacement ids in
    /// ascending order.
    pub fn split(
        &mut self,
        cluster_id: ClusterId,
        extracted: &[SightingId],
        settings: &PartitionSettings,
        ids: &ClusterIdSequence,
        now: DateTime<Utc>,
    ) -> HotspotResult<Vec<ClusterId>> {
        let cluster = self
            .clustering
            .cluster(&cluster_id)
            .ok_or(StateError::ClusterNotFound(cluster_id))?;
        let extracted: BTreeSet<SightingId> = extracted.iter().copied().collect();
        if let Some(stray) = extracted.iter().find(|id| !cluster.contains(id)) {
            return Err(StateError::NotAMember {
                cluster_id,
                sighting_id: *stray,
            }
            .into());
        }

        let mut staying = Vec::new();
        let mut pulled = Vec::new();
        for member in &cluster.members {
            let Some(sighting) = self.clustering.sighting(member) else {
                let v = InvariantViolation::UnknownMember {
                    cluster_id,
                    sighting_id: *member,
                };
                events::invariant_violated(&v, Some(cluster));
                return Err(v.into());
            };
            let mut copy = sighting.clone();
            copy.cluster_id = None;
            if extracted.contains(member) {
                pulled.push(copy);
            } else {
                staying.push(copy);
            }
        }

        let ctx = settings.at(now);
        let species = self.clustering.species().to_string();
        let staying = recluster(&species, staying, &ctx, ids)?;
        let pulled = recluster(&species, pulled, &ctx, ids)?;

        let mut replacements: Vec<(ClusterId, usize)> = staying
            .clusters()
            .chain(pulled.clusters())
            .map(|c| (c.id, c.member_count()))
            .collect();
        replacements.sort_by_key(|(id, _)| *id);

        self.clustering.detach(&cluster_id);
        self.clustering.adopt(staying);
        self.clustering.adopt(pulled);

        let heir = replacements
            .iter()
            .max_by(|(a_id, a_n), (b_id, b_n)| a_n.cmp(b_n).then_with(|| b_id.cmp(a_id)))
            .map(|(id, _)| *id);
        if let Some(heir) = heir {
            self.dispatcher.transfer(cluster_id, heir);
        }

        let new_ids: Vec<ClusterId> = replacements.into_iter().map(|(id, _)| id).collect();
        for id in &new_ids {
            let snapshot = self.clustering.snapshot(id, None)?;
            self.rescore(*id, &snapshot, None, settings, now);
        }

        events::cluster_split(&cluster_id, &new_ids);
        Ok(new_ids)
    }
}

/// Assign `sightings` oldest first into a fresh cluster set.
fn recluster(
    species: &str,
    mut sightings: Vec<Sighting>,
    ctx: &AssignContext,
    ids: &ClusterIdSequence,
) -> Result<Clustering, InvariantViolation> {
    sightings.sort_by(|a, b| a.observed_at.cmp(&b.observed_at).then(a.id.cmp(&b.id)));
    let mut scratch = Clustering::new(species, ctx.radius_m);
    for sighting in sightings {
        scratch.assign(sighting, ctx, ids)?;
    }
    Ok(scratch)
}
