//! Cluster set of one species: members, back-references and spatial index.
//!
//! Every mutating operation validates first and only then writes, so an
//! invariant violation leaves the set exactly as it was.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use chrono::{DateTime, Duration, Utc};
use hotspot_core::errors::InvariantViolation;
use hotspot_core::ids::{ClusterId, ClusterIdSequence, SightingId};
use hotspot_core::models::{Cluster, Sighting, VerificationStatus};
use hotspot_core::GeoPoint;
use hotspot_observability::events;
use hotspot_risk::{ClusterSnapshot, MemberSnapshot};
use hotspot_spatial::SpatialIndex;

use crate::centroid::CentroidAccumulator;

/// Inputs fixed for the duration of one mutation.
#[derive(Debug, Clone, Copy)]
pub struct AssignContext {
    pub radius_m: f64,
    pub horizon: Duration,
    pub now: DateTime<Utc>,
}

/// Result of placing one sighting.
#[derive(Debug, Clone)]
pub struct Assignment {
    pub cluster_id: ClusterId,
    pub created: bool,
    /// Clusters folded into `cluster_id`, as they were before the merge.
    pub absorbed: Vec<Cluster>,
}

#[derive(Debug, Clone)]
pub(crate) struct ClusterEntry {
    pub(crate) cluster: Cluster,
    pub(crate) accumulator: CentroidAccumulator,
}

/// What a decay pass would do to one cluster.
#[derive(Debug, Clone)]
pub(crate) struct DecayPlan {
    pub(crate) cluster_id: ClusterId,
    pub(crate) expired: Vec<SightingId>,
    pub(crate) accumulator: CentroidAccumulator,
    pub(crate) centroid: Option<GeoPoint>,
    pub(crate) snapshot: ClusterSnapshot,
}

impl DecayPlan {
    pub(crate) fn empties_cluster(&self) -> bool {
        self.accumulator.count() == 0
    }
}

#[derive(Debug)]
pub struct Clustering {
    species: String,
    clusters: BTreeMap<ClusterId, ClusterEntry>,
    sightings: HashMap<SightingId, Sighting>,
    index: SpatialIndex,
}

impl Clustering {
    pub fn new(species: impl Into<String>, radius_m: f64) -> Self {
        Self {
            species: species.into(),
            clusters: BTreeMap::new(),
            sightings: HashMap::new(),
            index: SpatialIndex::new(radius_m),
        }
    }

    pub fn species(&self) -> &str {
        &self.species
    }

    pub fn cluster(&self, id: &ClusterId) -> Option<&Cluster> {
        self.clusters.get(id).map(|e| &e.cluster)
    }

    pub fn clusters(&self) -> impl Iterator<Item = &Cluster> {
        self.clusters.values().map(|e| &e.cluster)
    }

    pub fn cluster_ids(&self) -> Vec<ClusterId> {
        self.clusters.keys().copied().collect()
    }

    pub fn cluster_count(&self) -> usize {
        self.clusters.len()
    }

    pub fn sighting(&self, id: &SightingId) -> Option<&Sighting> {
        self.sightings.get(id)
    }

    /// Every sighting ever accepted, aged-out ones included.
    pub fn sightings(&self) -> impl Iterator<Item = &Sighting> {
        self.sightings.values()
    }

    /// Sightings currently in the spatial index.
    pub fn indexed_count(&self) -> usize {
        self.index.len()
    }

    pub(crate) fn cluster_mut(&mut self, id: &ClusterId) -> Option<&mut Cluster> {
        self.clusters.get_mut(id).map(|e| &mut e.cluster)
    }

    pub(crate) fn sighting_mut(&mut self, id: &SightingId) -> Option<&mut Sighting> {
        self.sightings.get_mut(id)
    }

    /// Place `sighting` into the cluster set.
    ///
    /// Neighbors are active sightings within the radius, whatever their
    /// verification status; a rejected member still anchors its cluster. A
    /// neighbor's cluster is eligible when the new sighting also lies within
    /// the radius of that cluster's centroid. No eligible cluster creates a
    /// new one; several are merged into the one with the most members
    /// (smallest id on ties) before the sighting is added.
    pub fn assign(
        &mut self,
        sighting: Sighting,
        ctx: &AssignContext,
        ids: &ClusterIdSequence,
    ) -> Result<Assignment, InvariantViolation> {
        let eligible = self.eligible_clusters(&sighting, ctx)?;

        let survivor = eligible.iter().copied().max_by(|a, b| {
            self.member_count(a)
                .cmp(&self.member_count(b))
                .then_with(|| b.cmp(a))
        });

        let mut accumulator = CentroidAccumulator::default();
        for id in &eligible {
            if let Some(entry) = self.clusters.get(id) {
                accumulator.absorb(&entry.accumulator);
            }
        }
        accumulator.add(&sighting.location);
        let Some(centroid) = accumulator.centroid() else {
            let id = survivor.unwrap_or_else(|| ids.next_id());
            return Err(self.violation(InvariantViolation::DegenerateCentroid(id), Some(id)));
        };

        let mut target = match survivor.and_then(|id| self.clusters.remove(&id)) {
            Some(entry) => entry,
            None => ClusterEntry {
                cluster: Cluster::new(ids.next_id(), self.species.clone(), centroid, ctx.now),
                accumulator: CentroidAccumulator::default(),
            },
        };
        let target_id = target.cluster.id;

        let mut absorbed = Vec::new();
        for id in eligible.iter().filter(|id| Some(**id) != survivor) {
            if let Some(entry) = self.clusters.remove(id) {
                for member in &entry.cluster.members {
                    if let Some(s) = self.sightings.get_mut(member) {
                        s.cluster_id = Some(target_id);
                    }
                }
                target.cluster.members.extend(entry.cluster.members.iter().copied());
                absorbed.push(entry.cluster);
            }
        }

        let mut sighting = sighting;
        sighting.cluster_id = Some(target_id);
        target.cluster.members.insert(sighting.id);
        target.cluster.centroid = centroid;
        target.cluster.updated_at = ctx.now;
        target.accumulator = accumulator;

        self.index.insert(&sighting);
        self.sightings.insert(sighting.id, sighting);
        self.clusters.insert(target_id, target);

        Ok(Assignment {
            cluster_id: target_id,
            created: survivor.is_none(),
            absorbed,
        })
    }

    fn eligible_clusters(
        &self,
        sighting: &Sighting,
        ctx: &AssignContext,
    ) -> Result<BTreeSet<ClusterId>, InvariantViolation> {
        let mut touched: BTreeMap<ClusterId, SightingId> = BTreeMap::new();
        for neighbor_id in self.index.query(&sighting.location) {
            let Some(neighbor) = self.sightings.get(&neighbor_id) else {
                continue;
            };
            if !neighbor.is_active_at(ctx.now, ctx.horizon) {
                continue;
            }
            if let Some(cluster_id) = neighbor.cluster_id {
                touched.entry(cluster_id).or_insert(neighbor_id);
            }
        }

        let mut eligible = BTreeSet::new();
        for (cluster_id, neighbor_id) in touched {
            let Some(entry) = self.clusters.get(&cluster_id) else {
                return Err(self.violation(
                    InvariantViolation::MissingCluster {
                        sighting_id: neighbor_id,
                        cluster_id,
                    },
                    None,
                ));
            };
            if entry.cluster.species != sighting.species {
                return Err(self.violation(
                    InvariantViolation::MixedSpecies {
                        cluster_id,
                        expected: entry.cluster.species.clone(),
                        found: sighting.species.clone(),
                    },
                    Some(cluster_id),
                ));
            }
            if sighting.location.is_within(&entry.cluster.centroid, ctx.radius_m) {
                eligible.insert(cluster_id);
            }
        }
        Ok(eligible)
    }

    fn member_count(&self, id: &ClusterId) -> usize {
        self.clusters.get(id).map_or(0, |e| e.cluster.member_count())
    }

    /// Scoring view of a cluster. `status_override` substitutes one member's
    /// status, used to score a verification before it is written.
    pub(crate) fn snapshot(
        &self,
        id: &ClusterId,
        status_override: Option<(SightingId, VerificationStatus)>,
    ) -> Result<ClusterSnapshot, InvariantViolation> {
        let entry = self
            .clusters
            .get(id)
            .ok_or(InvariantViolation::EmptyCluster(*id))?;
        let mut members = Vec::with_capacity(entry.cluster.member_count());
        for member in &entry.cluster.members {
            let sighting = self.sightings.get(member).ok_or_else(|| {
                self.violation(
                    InvariantViolation::UnknownMember {
                        cluster_id: *id,
                        sighting_id: *member,
                    },
                    Some(*id),
                )
            })?;
            let mut snap = MemberSnapshot::from(sighting);
            if let Some((target, status)) = status_override {
                if target == *member {
                    snap.status = status;
                }
            }
            members.push(snap);
        }
        Ok(ClusterSnapshot { members })
    }

    /// Work out which members of `id` have aged past the horizon, and the
    /// centroid and scoring view of the rest.
    pub(crate) fn plan_decay(
        &self,
        id: &ClusterId,
        ctx: &AssignContext,
    ) -> Result<DecayPlan, InvariantViolation> {
        let entry = self
            .clusters
            .get(id)
            .ok_or(InvariantViolation::EmptyCluster(*id))?;

        let mut expired = Vec::new();
        let mut kept = Vec::new();
        for member in &entry.cluster.members {
            let sighting = self.sightings.get(member).ok_or_else(|| {
                self.violation(
                    InvariantViolation::UnknownMember {
                        cluster_id: *id,
                        sighting_id: *member,
                    },
                    Some(*id),
                )
            })?;
            if sighting.is_active_at(ctx.now, ctx.horizon) {
                kept.push(sighting);
            } else {
                expired.push(*member);
            }
        }

        let accumulator = CentroidAccumulator::from_points(kept.iter().map(|s| &s.location));
        let centroid = accumulator.centroid();
        if !kept.is_empty() && centroid.is_none() {
            return Err(self.violation(InvariantViolation::DegenerateCentroid(*id), Some(*id)));
        }

        Ok(DecayPlan {
            cluster_id: *id,
            expired,
            accumulator,
            centroid,
            snapshot: ClusterSnapshot::from_sightings(kept),
        })
    }

    /// Drop the plan's expired members. Returns the cluster when it was left
    /// empty and removed.
    pub(crate) fn apply_decay(&mut self, plan: &DecayPlan, now: DateTime<Utc>) -> Option<Cluster> {
        for member in &plan.expired {
            self.index.remove(member);
            if let Some(s) = self.sightings.get_mut(member) {
                s.cluster_id = None;
            }
        }
        if plan.empties_cluster() {
            return self.clusters.remove(&plan.cluster_id).map(|e| e.cluster);
        }
        if let Some(entry) = self.clusters.get_mut(&plan.cluster_id) {
            for member in &plan.expired {
                entry.cluster.members.remove(member);
            }
            entry.accumulator = plan.accumulator;
            if let Some(centroid) = plan.centroid {
                entry.cluster.centroid = centroid;
            }
            if !plan.expired.is_empty() {
                entry.cluster.updated_at = now;
            }
        }
        None
    }

    /// Remove a cluster and unlink its members from it and from the index.
    pub(crate) fn detach(&mut self, id: &ClusterId) -> Option<Cluster> {
        let entry = self.clusters.remove(id)?;
        for member in &entry.cluster.members {
            self.index.remove(member);
            if let Some(s) = self.sightings.get_mut(member) {
                s.cluster_id = None;
            }
        }
        Some(entry.cluster)
    }

    /// Move every cluster of `other` into this set, re-linking the members
    /// this set already holds.
    pub(crate) fn adopt(&mut self, other: Clustering) {
        for (id, sighting) in other.sightings {
            if let Some(s) = self.sightings.get_mut(&id) {
                s.cluster_id = sighting.cluster_id;
                self.index.insert(s);
            }
        }
        self.clusters.extend(other.clusters);
    }

    /// Log a violation with the state of the cluster it concerns.
    fn violation(&self, v: InvariantViolation, cluster: Option<ClusterId>) -> InvariantViolation {
        let state = cluster.and_then(|id| self.cluster(&id));
        events::invariant_violated(&v, state);
        v
    }
}
