//! ClusterManager: species-sharded cluster authority.
//!
//! Partitions live in a `DashMap` keyed by species and are created on first
//! use. A mutation locks exactly one partition, so unrelated species proceed
//! in parallel while each species sees at most one writer at a time.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use hotspot_core::config::{AlertingConfig, EngineConfig};
use hotspot_core::errors::{HotspotResult, StateError};
use hotspot_core::ids::{AlertId, ClusterId, ClusterIdSequence, SightingId};
use hotspot_core::models::{
    Alert, ClusterSummary, EngineStats, Sighting, SpreadTrend, VerificationEvent,
    VerificationRequest,
};
use hotspot_core::traits::AlertNotifier;
use rayon::prelude::*;

use crate::clustering::Assignment;
use crate::decay::DecayReport;
use crate::partition::{Partition, PartitionSettings, PartitionState};

pub struct ClusterManager {
    settings: PartitionSettings,
    alerting: Arc<AlertingConfig>,
    notifier: Arc<dyn AlertNotifier>,
    ids: ClusterIdSequence,
    partitions: DashMap<String, Arc<Partition>>,
    /// Which partition holds each sighting.
    sighting_species: DashMap<SightingId, String>,
}

impl ClusterManager {
    pub fn new(config: &EngineConfig, notifier: Arc<dyn AlertNotifier>) -> Self {
        Self {
            settings: PartitionSettings::new(config.clustering.radius_meters, config.decay.horizon()),
            alerting: Arc::new(config.alerting.clone()),
            notifier,
            ids: ClusterIdSequence::new(),
            partitions: DashMap::new(),
            sighting_species: DashMap::new(),
        }
    }

    pub fn settings(&self) -> &PartitionSettings {
        &self.settings
    }

    /// Assign a normalized sighting within its species partition.
    pub fn ingest(&self, sighting: Sighting, now: DateTime<Utc>) -> HotspotResult<Assignment> {
        let species = sighting.species.clone();
        let sighting_id = sighting.id;
        let partition = self.partition_for(&species);
        let assignment = partition
            .write()?
            .ingest(sighting, &self.settings, &self.ids, now)?;
        self.sighting_species.insert(sighting_id, species);
        Ok(assignment)
    }

    /// Apply an admin verification decision.
    pub fn verify(
        &self,
        request: &VerificationRequest,
        now: DateTime<Utc>,
    ) -> HotspotResult<VerificationEvent> {
        let partition = self
            .sighting_partition(&request.sighting_id)
            .ok_or(StateError::SightingNotFound(request.sighting_id))?;
        let event = partition.write()?.verify(request, &self.settings, now)?;
        Ok(event)
    }

    pub fn acknowledge(&self, cluster_id: ClusterId) -> HotspotResult<()> {
        let partition = self.cluster_partition(cluster_id)?;
        let result = partition.write()?.acknowledge(cluster_id);
        result
    }

    pub fn split_cluster(
        &self,
        cluster_id: ClusterId,
        extracted: &[SightingId],
        now: DateTime<Utc>,
    ) -> HotspotResult<Vec<ClusterId>> {
        let partition = self.cluster_partition(cluster_id)?;
        let result = partition
            .write()?
            .split(cluster_id, extracted, &self.settings, &self.ids, now);
        result
    }

    pub fn confirm_delivery(&self, alert_id: AlertId) -> HotspotResult<()> {
        let partition = self.alert_partition(alert_id)?;
        let result = partition.write()?.confirm_delivery(alert_id);
        result
    }

    /// Returns whether the notifier accepted the re-sent alert.
    pub fn resend(&self, alert_id: AlertId) -> HotspotResult<bool> {
        let partition = self.alert_partition(alert_id)?;
        let result = partition.read()?.resend(alert_id);
        result
    }

    /// Run one decay pass over every partition in parallel. A partition
    /// whose previous pass is still running is skipped.
    pub fn run_decay_pass(&self, now: DateTime<Utc>) -> DecayReport {
        let partitions = self.partitions_snapshot();
        let outcomes: Vec<_> = partitions
            .par_iter()
            .map(|p| p.decay(&self.settings, now))
            .collect();
        DecayReport::from_outcomes(outcomes)
    }

    /// Active clusters, highest risk first, optionally for one species.
    pub fn list_active_clusters(&self, species: Option<&str>) -> HotspotResult<Vec<ClusterSummary>> {
        let mut out = Vec::new();
        for partition in self.selected(species) {
            out.extend(partition.read()?.summaries());
        }
        out.sort_by(|a, b| {
            b.risk_score
                .total_cmp(&a.risk_score)
                .then_with(|| a.id.cmp(&b.id))
        });
        Ok(out)
    }

    /// Every alert record, newest first.
    pub fn list_alerts(&self) -> HotspotResult<Vec<Alert>> {
        let mut out = Vec::new();
        for partition in self.partitions_snapshot() {
            out.extend(partition.read()?.dispatcher().alerts());
        }
        out.sort_by(|a, b| b.emitted_at.cmp(&a.emitted_at).then(a.id.cmp(&b.id)));
        Ok(out)
    }

    pub fn stats(&self) -> HotspotResult<EngineStats> {
        let mut stats = EngineStats::default();
        for partition in self.partitions_snapshot() {
            stats += partition.read()?.stats();
        }
        Ok(stats)
    }

    pub fn spread_trend(&self, species: Option<&str>, now: DateTime<Utc>) -> HotspotResult<SpreadTrend> {
        let (mut current, mut previous) = (0, 0);
        for partition in self.selected(species) {
            let (c, p) = partition.read()?.trend_counts(now);
            current += c;
            previous += p;
        }
        Ok(SpreadTrend::from_counts(current, previous))
    }

    /// Unverified sightings, newest first.
    pub fn pending_review(&self) -> HotspotResult<Vec<Sighting>> {
        let mut out = Vec::new();
        for partition in self.partitions_snapshot() {
            out.extend(partition.read()?.unverified());
        }
        out.sort_by(|a, b| b.observed_at.cmp(&a.observed_at).then(a.id.cmp(&b.id)));
        Ok(out)
    }

    pub fn sighting(&self, id: &SightingId) -> HotspotResult<Option<Sighting>> {
        let Some(partition) = self.sighting_partition(id) else {
            return Ok(None);
        };
        let state = partition.read()?;
        Ok(state.clustering().sighting(id).cloned())
    }

    pub fn cluster(&self, id: ClusterId) -> HotspotResult<Option<ClusterSummary>> {
        for partition in self.partitions_snapshot() {
            if let Some(c) = partition.read()?.clustering().cluster(&id) {
                return Ok(Some(ClusterSummary::from(c)));
            }
        }
        Ok(None)
    }

    /// Verification audit trail across partitions, oldest first.
    pub fn verification_log(&self) -> HotspotResult<Vec<VerificationEvent>> {
        let mut out = Vec::new();
        for partition in self.partitions_snapshot() {
            out.extend_from_slice(partition.read()?.verification_log());
        }
        out.sort_by_key(|e| e.recorded_at);
        Ok(out)
    }

    /// Entries in the spatial index of one species partition.
    pub fn indexed_sightings(&self, species: &str) -> HotspotResult<usize> {
        match self.partitions.get(species).map(|p| p.value().clone()) {
            Some(partition) => Ok(partition.read()?.clustering().indexed_count()),
            None => Ok(0),
        }
    }

    pub fn species(&self) -> Vec<String> {
        let mut names: Vec<String> = self.partitions.iter().map(|e| e.key().clone()).collect();
        names.sort();
        names
    }

    fn partition_for(&self, species: &str) -> Arc<Partition> {
        if let Some(existing) = self.partitions.get(species) {
            return existing.value().clone();
        }
        self.partitions
            .entry(species.to_string())
            .or_insert_with(|| {
                tracing::debug!(species = %species, "creating species partition");
                Arc::new(Partition::new(
                    species,
                    PartitionState::new(
                        species,
                        self.settings.radius_m,
                        self.alerting.clone(),
                        self.notifier.clone(),
                    ),
                ))
            })
            .value()
            .clone()
    }

    /// Clone the partition handles so no map shard lock is held while a
    /// partition lock is taken.
    fn partitions_snapshot(&self) -> Vec<Arc<Partition>> {
        self.partitions.iter().map(|e| e.value().clone()).collect()
    }

    fn selected(&self, species: Option<&str>) -> Vec<Arc<Partition>> {
        match species {
            Some(name) => self
                .partitions
                .get(name)
                .map(|p| vec![p.value().clone()])
                .unwrap_or_default(),
            None => self.partitions_snapshot(),
        }
    }

    fn sighting_partition(&self, id: &SightingId) -> Option<Arc<Partition>> {
        let species = self.sighting_species.get(id)?.value().clone();
        self.partitions.get(&species).map(|p| p.value().clone())
    }

    fn cluster_partition(&self, id: ClusterId) -> HotspotResult<Arc<Partition>> {
        for partition in self.partitions_snapshot() {
            if partition.read()?.clustering().cluster(&id).is_some() {
                return Ok(partition);
            }
        }
        Err(StateError::ClusterNotFound(id).into())
    }

    fn alert_partition(&self, id: AlertId) -> HotspotResult<Arc<Partition>> {
        for partition in self.partitions_snapshot() {
            if partition.read()?.dispatcher().alert(&id).is_some() {
                return Ok(partition);
            }
        }
        Err(StateError::AlertNotFound(id).into())
    }
}
