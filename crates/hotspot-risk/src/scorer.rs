use chrono::{DateTime, Duration, Utc};

use crate::factors::RiskContext;
use crate::formula::{self, RiskBreakdown};
use crate::snapshot::ClusterSnapshot;

/// Risk scorer bound to the engine's decay horizon.
///
/// Stateless apart from configuration: the same snapshot at the same
/// instant always yields the same score.
#[derive(Debug, Clone, Copy)]
pub struct RiskScorer {
    decay_horizon: Duration,
}

impl RiskScorer {
    pub fn new(decay_horizon: Duration) -> Self {
        Self { decay_horizon }
    }

    pub fn decay_horizon(&self) -> Duration {
        self.decay_horizon
    }

    /// Score a cluster snapshot at `now`. Always in [0.0, 1.0].
    pub fn score(&self, snapshot: &ClusterSnapshot, now: DateTime<Utc>) -> f64 {
        formula::compute(snapshot, &RiskContext::new(now, self.decay_horizon))
    }

    /// Score with a per-factor breakdown.
    pub fn breakdown(&self, snapshot: &ClusterSnapshot, now: DateTime<Utc>) -> RiskBreakdown {
        formula::compute_breakdown(snapshot, &RiskContext::new(now, self.decay_horizon))
    }
}
