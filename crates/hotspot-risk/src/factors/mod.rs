pub mod confidence;
pub mod recency;
pub mod size;
pub mod verification;

use chrono::{DateTime, Duration, Utc};

/// Evaluation context: scoring instant and decay horizon.
#[derive(Debug, Clone, Copy)]
pub struct RiskContext {
    pub now: DateTime<Utc>,
    pub decay_horizon: Duration,
}

impl RiskContext {
    pub fn new(now: DateTime<Utc>, decay_horizon: Duration) -> Self {
        Self { now, decay_horizon }
    }

    /// Recency half-life: half the decay horizon.
    pub fn half_life(&self) -> Duration {
        self.decay_horizon / 2
    }
}
