use chrono::{DateTime, Utc};
use hotspot_core::models::{Sighting, VerificationStatus};
use serde::{Deserialize, Serialize};

/// The per-member facts the scorer needs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MemberSnapshot {
    pub confidence: f64,
    pub status: VerificationStatus,
    pub observed_at: DateTime<Utc>,
}

impl From<&Sighting> for MemberSnapshot {
    fn from(s: &Sighting) -> Self {
        Self {
            confidence: s.confidence,
            status: s.status,
            observed_at: s.observed_at,
        }
    }
}

/// Immutable view of a cluster's non-decayed members at scoring time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClusterSnapshot {
    pub members: Vec<MemberSnapshot>,
}

impl ClusterSnapshot {
    pub fn from_sightings<'a>(sightings: impl IntoIterator<Item = &'a Sighting>) -> Self {
        Self {
            members: sightings.into_iter().map(MemberSnapshot::from).collect(),
        }
    }

    /// Members that still contribute to size and confidence.
    pub fn contributing(&self) -> impl Iterator<Item = &MemberSnapshot> {
        self.members
            .iter()
            .filter(|m| m.status != VerificationStatus::Rejected)
    }

    pub fn total(&self) -> usize {
        self.members.len()
    }
}
