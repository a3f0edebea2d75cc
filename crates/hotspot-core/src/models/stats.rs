use serde::{Deserialize, Serialize};

/// Dashboard counters across all species partitions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineStats {
    pub total_sightings: usize,
    pub unverified_sightings: usize,
    pub confirmed_sightings: usize,
    pub rejected_sightings: usize,
    pub active_clusters: usize,
    /// Clusters currently in the `active` alert state.
    pub active_alerts: usize,
    /// Alert records still awaiting delivery confirmation.
    pub pending_alerts: usize,
}

impl std::ops::AddAssign for EngineStats {
    fn add_assign(&mut self, rhs: Self) {
        self.total_sightings += rhs.total_sightings;
        self.unverified_sightings += rhs.unverified_sightings;
        self.confirmed_sightings += rhs.confirmed_sightings;
        self.rejected_sightings += rhs.rejected_sightings;
        self.active_clusters += rhs.active_clusters;
        self.active_alerts += rhs.active_alerts;
        self.pending_alerts += rhs.pending_alerts;
    }
}

/// Week-over-week direction of sighting volume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendDirection {
    Spreading,
    Stable,
    Declining,
}

/// Sighting counts for the current and previous trend windows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpreadTrend {
    pub current_window: usize,
    pub previous_window: usize,
    pub direction: TrendDirection,
}

impl SpreadTrend {
    pub fn from_counts(current_window: usize, previous_window: usize) -> Self {
        let direction = match current_window.cmp(&previous_window) {
            std::cmp::Ordering::Greater => TrendDirection::Spreading,
            std::cmp::Ordering::Equal => TrendDirection::Stable,
            std::cmp::Ordering::Less => TrendDirection::Declining,
        };
        Self {
            current_window,
            previous_window,
            direction,
        }
    }
}
