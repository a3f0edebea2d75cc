//! Species partition: the unit of serialized mutation.
//!
//! Writers take the partition's write lock, so assignment, merge, decay,
//! split and verification never interleave within one species. Readers share
//! the read lock and see a consistent snapshot.

use std::sync::atomic::AtomicBool;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{DateTime, Duration, Utc};
use hotspot_alert::AlertDispatcher;
use hotspot_core::config::AlertingConfig;
use hotspot_core::errors::{ConcurrencyError, HotspotResult, StateError};
use hotspot_core::ids::{AlertId, ClusterId, ClusterIdSequence};
use hotspot_core::models::{AlertState, Sighting, VerificationEvent};
use hotspot_core::traits::AlertNotifier;
use hotspot_observability::events;
use hotspot_risk::{ClusterSnapshot, RiskScorer};

use crate::clustering::{AssignContext, Assignment, Clustering};

/// Engine-wide settings every partition works with.
#[derive(Debug, Clone, Copy)]
pub struct PartitionSettings {
    pub radius_m: f64,
    pub horizon: Duration,
    pub scorer: RiskScorer,
}

impl PartitionSettings {
    pub fn new(radius_m: f64, horizon: Duration) -> Self {
        Self {
            radius_m,
            horizon,
            scorer: RiskScorer::new(horizon),
        }
    }

    pub(crate) fn at(&self, now: DateTime<Utc>) -> AssignContext {
        AssignContext {
            radius_m: self.radius_m,
            horizon: self.horizon,
            now,
        }
    }
}

/// Everything one species partition owns.
#[derive(Debug)]
pub struct PartitionState {
    pub(crate) clustering: Clustering,
    pub(crate) dispatcher: AlertDispatcher,
    pub(crate) verifications: Vec<VerificationEvent>,
}

impl PartitionState {
    pub fn new(
        species: &str,
        radius_m: f64,
        alerting: Arc<AlertingConfig>,
        notifier: Arc<dyn AlertNotifier>,
    ) -> Self {
        Self {
            clustering: Clustering::new(species, radius_m),
            dispatcher: AlertDispatcher::new(alerting, notifier),
            verifications: Vec::new(),
        }
    }

    pub fn clustering(&self) -> &Clustering {
        &self.clustering
    }

    pub fn dispatcher(&self) -> &AlertDispatcher {
        &self.dispatcher
    }

    /// Assign a normalized sighting, reconcile alert tracks of any merged
    /// clusters, then score the touched cluster.
    pub fn ingest(
        &mut self,
        sighting: Sighting,
        settings: &PartitionSettings,
        ids: &ClusterIdSequence,
        now: DateTime<Utc>,
    ) -> HotspotResult<Assignment> {
        let sighting_id = sighting.id;
        let assignment = self.clustering.assign(sighting, &settings.at(now), ids)?;
        let cluster_id = assignment.cluster_id;
        let snapshot = self.clustering.snapshot(&cluster_id, None)?;

        if assignment.created {
            events::cluster_created(&cluster_id, self.clustering.species());
        }
        if !assignment.absorbed.is_empty() {
            if let Some(survivor) = self.clustering.cluster(&cluster_id) {
                self.dispatcher.on_merge(survivor, &assignment.absorbed, now);
                let absorbed: Vec<ClusterId> = assignment.absorbed.iter().map(|c| c.id).collect();
                events::clusters_merged(&cluster_id, &absorbed, survivor.member_count());
            }
        }

        self.rescore(cluster_id, &snapshot, None, settings, now);
        events::sighting_accepted(&sighting_id, self.clustering.species(), &cluster_id);
        Ok(assignment)
    }

    /// Admin review of an active alert.
    pub fn acknowledge(&mut self, cluster_id: ClusterId) -> HotspotResult<()> {
        let cluster = self
            .clustering
            .cluster_mut(&cluster_id)
            .ok_or(StateError::ClusterNotFound(cluster_id))?;
        self.dispatcher.acknowledge(cluster_id)?;
        cluster.alert_state = AlertState::Acknowledged;
        Ok(())
    }

    pub fn confirm_delivery(&mut self, alert_id: AlertId) -> HotspotResult<()> {
        Ok(self.dispatcher.confirm_delivery(alert_id)?)
    }

    pub fn resend(&self, alert_id: AlertId) -> HotspotResult<bool> {
        Ok(self.dispatcher.resend(alert_id)?)
    }

    /// Store a new score for `cluster_id` and let the dispatcher react.
    /// With a `ceiling` the stored score never exceeds it.
    pub(crate) fn rescore(
        &mut self,
        cluster_id: ClusterId,
        snapshot: &ClusterSnapshot,
        ceiling: Option<f64>,
        settings: &PartitionSettings,
        now: DateTime<Utc>,
    ) {
        let fresh = settings.scorer.score(snapshot, now);
        let Some(cluster) = self.clustering.cluster_mut(&cluster_id) else {
            return;
        };
        cluster.risk_score = ceiling.map_or(fresh, |prev| fresh.min(prev));
        cluster.alert_state = self.dispatcher.on_score_update(cluster, now);
    }
}

/// A lock-guarded partition plus its decay guard.
#[derive(Debug)]
pub struct Partition {
    species: String,
    state: RwLock<PartitionState>,
    pub(crate) decay_running: AtomicBool,
}

impl Partition {
    pub fn new(species: impl Into<String>, state: PartitionState) -> Self {
        Self {
            species: species.into(),
            state: RwLock::new(state),
            decay_running: AtomicBool::new(false),
        }
    }

    pub fn species(&self) -> &str {
        &self.species
    }

    pub fn read(&self) -> Result<RwLockReadGuard<'_, PartitionState>, ConcurrencyError> {
        self.state.read().map_err(|_| self.poisoned())
    }

    pub fn write(&self) -> Result<RwLockWriteGuard<'_, PartitionState>, ConcurrencyError> {
        self.state.write().map_err(|_| self.poisoned())
    }

    pub fn is_decaying(&self) -> bool {
        self.decay_running.load(std::sync::atomic::Ordering::Relaxed)
    }

    fn poisoned(&self) -> ConcurrencyError {
        ConcurrencyError::LockPoisoned {
            species: self.species.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hotspot_core::models::VerificationStatus;
    use hotspot_core::traits::NullNotifier;
    use hotspot_core::{GeoPoint, SightingId};

    fn state() -> PartitionState {
        PartitionState::new(
            "Zebra mussel",
            100.0,
            Arc::new(AlertingConfig::default()),
            Arc::new(NullNotifier),
        )
    }

    fn sighting(now: DateTime<Utc>) -> Sighting {
        Sighting {
            id: SightingId::new(),
            species: "Zebra mussel".into(),
            confidence: 0.9,
            location: GeoPoint::new(46.0, -94.0),
            observed_at: now,
            image_ref: None,
            status: VerificationStatus::Unverified,
            cluster_id: None,
        }
    }

    #[test]
    fn ingest_scores_the_touched_cluster() {
        let now = Utc::now();
        let settings = PartitionSettings::new(100.0, Duration::days(7));
        let ids = ClusterIdSequence::new();
        let mut st = state();
        let a = st.ingest(sighting(now), &settings, &ids, now).unwrap();
        let cluster = st.clustering().cluster(&a.cluster_id).unwrap();
        assert!(cluster.risk_score > 0.0);
        assert_eq!(cluster.alert_state, AlertState::None);
    }

    #[test]
    fn acknowledge_unknown_cluster_is_a_state_error() {
        let mut st = state();
        let err = st.acknowledge(ClusterId::new(42)).unwrap_err();
        assert!(matches!(
            err,
            hotspot_core::HotspotError::StateError(StateError::ClusterNotFound(_))
        ));
    }

    #[test]
    fn poisoned_lock_surfaces_as_concurrency_error() {
        let partition = Arc::new(Partition::new("Zebra mussel", state()));
        let p = partition.clone();
        let _ = std::thread::spawn(move || {
            let _guard = p.write().unwrap();
            panic!("poison the partition");
        })
        .join();
        let err = partition.read().unwrap_err();
        assert_eq!(
            err,
            ConcurrencyError::LockPoisoned {
                species: "Zebra mussel".into()
            }
        );
    }
}
