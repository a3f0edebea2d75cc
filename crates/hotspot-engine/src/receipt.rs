use serde::Serialize;

use hotspot_core::ids::{ClusterId, SightingId};

/// Acknowledgement returned to the submitting pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SightingReceipt {
    pub sighting_id: SightingId,
    pub species: String,
    pub cluster_id: ClusterId,
    pub cluster_created: bool,
    /// Clusters merged into `cluster_id` by this sighting.
    pub merged: Vec<ClusterId>,
}
