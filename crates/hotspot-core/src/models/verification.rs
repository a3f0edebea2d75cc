use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::sighting::VerificationStatus;
use crate::ids::{SightingId, VerificationId};

/// Admin decision on a sighting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerificationDecision {
    Confirm,
    Reject,
}

impl VerificationDecision {
    pub fn resulting_status(self) -> VerificationStatus {
        match self {
            Self::Confirm => VerificationStatus::Confirmed,
            Self::Reject => VerificationStatus::Rejected,
        }
    }
}

/// Inbound verification request from the admin review collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationRequest {
    pub sighting_id: SightingId,
    pub decision: VerificationDecision,
    pub admin_id: String,
}

/// Append-only audit record of a verification decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationEvent {
    pub id: VerificationId,
    pub sighting_id: SightingId,
    pub decision: VerificationDecision,
    pub admin_id: String,
    pub recorded_at: DateTime<Utc>,
}
