use crate::ids::{AlertId, ClusterId, SightingId};
use crate::models::VerificationStatus;

/// Requests rejected because of current engine state. No mutation occurs.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StateError {
    #[error("sighting not found: {0}")]
    SightingNotFound(SightingId),

    #[error("sighting {sighting_id} already verified as {status:?}")]
    AlreadyVerified {
        sighting_id: SightingId,
        status: VerificationStatus,
    },

    #[error("cluster not found: {0}")]
    ClusterNotFound(ClusterId),

    #[error("alert not found: {0}")]
    AlertNotFound(AlertId),

    #[error("cluster {0} has no active alert")]
    AlertNotActive(ClusterId),

    #[error("alert {0} is not pending")]
    AlertNotPending(AlertId),

    #[error("sighting {sighting_id} is not an active member of {cluster_id}")]
    NotAMember {
        cluster_id: ClusterId,
        sighting_id: SightingId,
    },
}
