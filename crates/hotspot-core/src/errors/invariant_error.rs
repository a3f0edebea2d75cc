use crate::ids::{ClusterId, SightingId};

/// Internal faults. The offending mutation is aborted and prior state kept.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InvariantViolation {
    #[error("cluster {cluster_id} of species {expected:?} would receive a {found:?} sighting")]
    MixedSpecies {
        cluster_id: ClusterId,
        expected: String,
        found: String,
    },

    #[error("cluster {0} has no members")]
    EmptyCluster(ClusterId),

    #[error("cluster {cluster_id} references unknown sighting {sighting_id}")]
    UnknownMember {
        cluster_id: ClusterId,
        sighting_id: SightingId,
    },

    #[error("sighting {sighting_id} back-references {recorded:?}, expected {expected}")]
    BrokenBackReference {
        sighting_id: SightingId,
        expected: ClusterId,
        recorded: Option<ClusterId>,
    },

    #[error("sighting {sighting_id} references missing cluster {cluster_id}")]
    MissingCluster {
        sighting_id: SightingId,
        cluster_id: ClusterId,
    },

    #[error("centroid of cluster {0} is undefined")]
    DegenerateCentroid(ClusterId),
}
