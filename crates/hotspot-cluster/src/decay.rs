//! Periodic decay pass.
//!
//! Members older than the decay horizon leave their cluster and the spatial
//! index. Emptied clusters are destroyed; the rest get a new centroid and a
//! score capped at their previous one, so a pass alone never raises either
//! member count or risk.

use std::sync::atomic::Ordering;
use std::time::Instant;

use chrono::{DateTime, Utc};
use hotspot_core::errors::ConcurrencyError;
use hotspot_observability::events;
use serde::Serialize;

use crate::partition::{Partition, PartitionSettings, PartitionState};

/// Result of one partition's pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PartitionDecay {
    pub species: String,
    pub members_dropped: usize,
    pub clusters_destroyed: usize,
    pub clusters_rescored: usize,
    /// Clusters left untouched because of an invariant violation.
    pub faults: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DecayOutcome {
    Completed(PartitionDecay),
    /// The previous pass for this partition was still running.
    Skipped(String),
    Failed(ConcurrencyError),
}

/// Engine-wide summary of one decay pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DecayReport {
    pub partitions: Vec<PartitionDecay>,
    pub skipped: Vec<String>,
    pub failed: Vec<String>,
}

impl DecayReport {
    pub fn from_outcomes(outcomes: impl IntoIterator<Item = DecayOutcome>) -> Self {
        let mut report = Self::default();
        for outcome in outcomes {
            match outcome {
                DecayOutcome::Completed(p) => report.partitions.push(p),
                DecayOutcome::Skipped(species) => report.skipped.push(species),
                DecayOutcome::Failed(ConcurrencyError::LockPoisoned { species }) => {
                    report.failed.push(species)
                }
            }
        }
        report.partitions.sort_by(|a, b| a.species.cmp(&b.species));
        report.skipped.sort();
        report.failed.sort();
        report
    }

    pub fn members_dropped(&self) -> usize {
        self.partitions.iter().map(|p| p.members_dropped).sum()
    }

    pub fn clusters_destroyed(&self) -> usize {
        self.partitions.iter().map(|p| p.clusters_destroyed).sum()
    }

    pub fn clusters_rescored(&self) -> usize {
        self.partitions.iter().map(|p| p.clusters_rescored).sum()
    }
}

impl Partition {
    /// Run a decay pass unless one is already in flight for this partition.
    pub fn decay(&self, settings: &PartitionSettings, now: DateTime<Utc>) -> DecayOutcome {
        if self
            .decay_running
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            events::decay_pass_skipped(self.species());
            return DecayOutcome::Skipped(self.species().to_string());
        }

        let started = Instant::now();
        let outcome = match self.write() {
            Ok(mut state) => {
                let result = state.decay(settings, now);
                events::decay_pass_completed(
                    self.species(),
                    result.members_dropped,
                    result.clusters_destroyed,
                    started.elapsed().as_millis(),
                );
                DecayOutcome::Completed(result)
            }
            Err(e) => DecayOutcome::Failed(e),
        };

        self.decay_running.store(false, Ordering::SeqCst);
        outcome
    }
}

impl PartitionState {
    pub(crate) fn decay(&mut self, settings: &PartitionSettings, now: DateTime<Utc>) -> PartitionDecay {
        let ctx = settings.at(now);
        let species = self.clustering.species().to_string();
        let mut report = PartitionDecay {
            species: species.clone(),
            ..PartitionDecay::default()
        };

        for cluster_id in self.clustering.cluster_ids() {
            let Ok(plan) = self.clustering.plan_decay(&cluster_id, &ctx) else {
                report.faults += 1;
                continue;
            };
            report.members_dropped += plan.expired.len();
            let previous = self
                .clustering
                .cluster(&cluster_id)
                .map_or(0.0, |c| c.risk_score);

            match self.clustering.apply_decay(&plan, now) {
                Some(mut removed) => {
                    removed.risk_score = 0.0;
                    self.dispatcher.on_cluster_removed(&removed, now);
                    events::cluster_destroyed(&cluster_id, &species);
                    report.clusters_destroyed += 1;
                }
                None => {
                    self.rescore(cluster_id, &plan.snapshot, Some(previous), settings, now);
                    report.clusters_rescored += 1;
                }
            }
        }
        report
    }
}
