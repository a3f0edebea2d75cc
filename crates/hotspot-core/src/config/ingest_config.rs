use serde::{Deserialize, Serialize};

use super::decay_config::secs_to_duration;
use super::defaults;

/// Normalizer configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IngestConfig {
    /// Sightings classified below this confidence are rejected before clustering.
    pub confidence_floor: f64,
    /// Oldest accepted observation age (seconds). Falls back to the decay horizon.
    pub retention_horizon_secs: Option<u64>,
    /// Tolerated clock skew for timestamps slightly in the future (seconds).
    pub max_clock_skew_secs: u64,
}

impl IngestConfig {
    pub fn retention_horizon(&self, decay_horizon_secs: u64) -> chrono::Duration {
        secs_to_duration(self.retention_horizon_secs.unwrap_or(decay_horizon_secs))
    }

    pub fn max_clock_skew(&self) -> chrono::Duration {
        secs_to_duration(self.max_clock_skew_secs)
    }
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            confidence_floor: defaults::DEFAULT_CONFIDENCE_FLOOR,
            retention_horizon_secs: None,
            max_clock_skew_secs: defaults::DEFAULT_MAX_CLOCK_SKEW_SECS,
        }
    }
}
