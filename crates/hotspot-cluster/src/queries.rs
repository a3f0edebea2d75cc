//! Read-side views of a partition.

use chrono::{DateTime, Duration, Utc};
use hotspot_core::constants::SPREAD_TREND_WINDOW_DAYS;
use hotspot_core::models::{ClusterSummary, EngineStats, Sighting, VerificationStatus};

use crate::partition::PartitionState;

impl PartitionState {
    pub fn summaries(&self) -> Vec<ClusterSummary> {
        self.clustering.clusters().map(ClusterSummary::from).collect()
    }

    pub fn stats(&self) -> EngineStats {
        let mut stats = EngineStats {
            active_clusters: self.clustering.cluster_count(),
            active_alerts: self.dispatcher.active_alert_count(),
            pending_alerts: self.dispatcher.pending_alert_count(),
            ..EngineStats::default()
        };
        for sighting in self.clustering.sightings() {
            stats.total_sightings += 1;
            match sighting.status {
                VerificationStatus::Unverified => stats.unverified_sightings += 1,
                VerificationStatus::Confirmed => stats.confirmed_sightings += 1,
                VerificationStatus::Rejected => stats.rejected_sightings += 1,
            }
        }
        stats
    }

    /// Sightings still awaiting an admin decision.
    pub fn unverified(&self) -> Vec<Sighting> {
        self.clustering
            .sightings()
            .filter(|s| s.is_unverified())
            .cloned()
            .collect()
    }

    /// Sighting counts in the current and previous trend windows ending at
    /// `now`. Rejected sightings are not counted.
    pub fn trend_counts(&self, now: DateTime<Utc>) -> (usize, usize) {
        let window = Duration::days(SPREAD_TREND_WINDOW_DAYS);
        let current_start = now - window;
        let previous_start = current_start - window;
        let mut current = 0;
        let mut previous = 0;
        for s in self.clustering.sightings().filter(|s| !s.is_rejected()) {
            if s.observed_at > current_start && s.observed_at <= now {
                current += 1;
            } else if s.observed_at > previous_start && s.observed_at <= current_start {
                previous += 1;
            }
        }
        (current, previous)
    }
}
