use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::alert::AlertState;
use crate::geo::GeoPoint;
use crate::ids::{ClusterId, SightingId};

/// A spatially coherent group of same-species sightings (a hotspot).
///
/// Members are held by id only; the sighting carries the back-reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cluster {
    pub id: ClusterId,
    pub species: String,
    pub centroid: GeoPoint,
    pub members: BTreeSet<SightingId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Risk score from the most recent evaluation, in [0.0, 1.0].
    pub risk_score: f64,
    pub alert_state: AlertState,
}

impl Cluster {
    pub fn new(id: ClusterId, species: String, centroid: GeoPoint, now: DateTime<Utc>) -> Self {
        Self {
            id,
            species,
            centroid,
            members: BTreeSet::new(),
            created_at: now,
            updated_at: now,
            risk_score: 0.0,
            alert_state: AlertState::None,
        }
    }

    pub fn member_count(&self) -> usize {
        self.members.len()
    }

    pub fn contains(&self, sighting: &SightingId) -> bool {
        self.members.contains(sighting)
    }
}
