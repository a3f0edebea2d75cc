use serde::{Deserialize, Serialize};

use super::defaults;

/// Decay subsystem configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DecayConfig {
    /// Age beyond which a sighting stops contributing to clustering and risk (seconds).
    pub horizon_secs: u64,
    /// Interval between decay passes (seconds).
    pub pass_interval_secs: u64,
}

impl DecayConfig {
    pub fn horizon(&self) -> chrono::Duration {
        secs_to_duration(self.horizon_secs)
    }

    pub fn pass_interval(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.pass_interval_secs)
    }
}

impl Default for DecayConfig {
    fn default() -> Self {
        Self {
            horizon_secs: defaults::DEFAULT_DECAY_HORIZON_SECS,
            pass_interval_secs: defaults::DEFAULT_DECAY_PASS_INTERVAL_SECS,
        }
    }
}

pub(crate) fn secs_to_duration(secs: u64) -> chrono::Duration {
    chrono::Duration::seconds(i64::try_from(secs).unwrap_or(i64::MAX / 1_000))
}
