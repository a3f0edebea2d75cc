use serde::{Deserialize, Serialize};

use super::defaults;

/// Clustering subsystem configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClusteringConfig {
    /// Neighbor radius in meters. The spatial index supports only this radius.
    pub radius_meters: f64,
}

impl Default for ClusteringConfig {
    fn default() -> Self {
        Self {
            radius_meters: defaults::DEFAULT_CLUSTERING_RADIUS_METERS,
        }
    }
}
