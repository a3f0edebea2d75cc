use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::geo::GeoPoint;
use crate::ids::{ClusterId, SightingId};

/// Raw submission from the upload/classification pipeline.
///
/// Coordinates are optional because upstream forms can omit them; the
/// normalizer rejects a payload with either one missing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SightingPayload {
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub timestamp: DateTime<Utc>,
    pub species_label: String,
    pub confidence: f64,
    #[serde(default)]
    pub image_ref: Option<String>,
}

/// Verification state of a sighting. Moves off `Unverified` exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerificationStatus {
    Unverified,
    Confirmed,
    Rejected,
}

/// A normalized, classified, geo-tagged report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sighting {
    pub id: SightingId,
    pub species: String,
    pub confidence: f64,
    pub location: GeoPoint,
    pub observed_at: DateTime<Utc>,
    pub image_ref: Option<String>,
    pub status: VerificationStatus,
    /// Back-reference to the owning cluster. `None` once aged out.
    pub cluster_id: Option<ClusterId>,
}

impl Sighting {
    pub fn is_rejected(&self) -> bool {
        self.status == VerificationStatus::Rejected
    }

    pub fn is_unverified(&self) -> bool {
        self.status == VerificationStatus::Unverified
    }

    /// True while the sighting is younger than `horizon` at `now`.
    pub fn is_active_at(&self, now: DateTime<Utc>, horizon: Duration) -> bool {
        now - self.observed_at <= horizon
    }
}
